use crate::application::booking::sessions::BookingSessions;
use crate::application::schedule::layout::GridDefinition;
use crate::domain::courses::CourseRepository;
use crate::domain::dashboard::DashboardRepository;
use crate::domain::notifications::Notifier;
use crate::domain::qualifications::QualificationRepository;
use crate::domain::schedule::ScheduleRepository;
use crate::domain::scheduler::{DelaySettings, Scheduler};
use crate::domain::students::StudentRepository;
use crate::domain::teacher::TeacherRepository;
use crate::infrastructure::config::Config;
use crate::infrastructure::repositories::directory::InMemoryDirectory;
use crate::infrastructure::repositories::notifications::NotificationLog;
use crate::infrastructure::repositories::qualifications::InMemoryQualificationRepository;
use crate::infrastructure::repositories::schedule::InMemoryScheduleRepository;
use crate::infrastructure::repositories::teacher::InMemoryTeacherRepository;
use crate::infrastructure::scheduler::TokioScheduler;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub teacher: Arc<dyn TeacherRepository>,
    pub qualifications: Arc<dyn QualificationRepository>,
    pub schedule: Arc<dyn ScheduleRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub dashboard: Arc<dyn DashboardRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub scheduler: Arc<dyn Scheduler>,
    pub bookings: BookingSessions,
    pub delays: DelaySettings,
    pub grid: GridDefinition,
}

impl AppState {
    /// Mock data behind every repository, delays on the given scheduler
    pub fn seeded(config: &Config, scheduler: Arc<dyn Scheduler>) -> anyhow::Result<Self> {
        let directory = Arc::new(InMemoryDirectory::seeded());

        Ok(Self {
            teacher: Arc::new(InMemoryTeacherRepository::seeded()),
            qualifications: Arc::new(InMemoryQualificationRepository::seeded()),
            schedule: Arc::new(InMemoryScheduleRepository::seeded()?),
            students: directory.clone(),
            courses: directory.clone(),
            dashboard: directory,
            notifier: Arc::new(NotificationLog::new()),
            scheduler,
            bookings: BookingSessions::with_limits(config.bookings),
            delays: config.delays,
            grid: GridDefinition::with_row_height(config.schedule.row_height_px),
        })
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        Self::seeded(config, Arc::new(TokioScheduler))
    }
}
