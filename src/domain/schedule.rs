use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use time::Time;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use utoipa::ToSchema;

const HH_MM: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// Monday-first, the column order of the weekly grid
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "monday",
            DayOfWeek::Tuesday => "tuesday",
            DayOfWeek::Wednesday => "wednesday",
            DayOfWeek::Thursday => "thursday",
            DayOfWeek::Friday => "friday",
            DayOfWeek::Saturday => "saturday",
            DayOfWeek::Sunday => "sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str() == lowered)
            .ok_or_else(|| format!("Unknown day of week: {}", s))
    }
}

impl<'de> Deserialize<'de> for DayOfWeek {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TimeOfDayError {
    #[error("Invalid time '{0}': expected 24-hour HH:MM")]
    Malformed(String),
    #[error("Start time {start} must be before end time {end}")]
    EmptyInterval { start: TimeOfDay, end: TimeOfDay },
}

/// Wall-clock time parsed strictly from zero-padded 24-hour "HH:MM"
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(Time);

impl TimeOfDay {
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, TimeOfDayError> {
        Time::from_hms(hour, minute, 0)
            .map(TimeOfDay)
            .map_err(|_| TimeOfDayError::Malformed(format!("{:02}:{:02}", hour, minute)))
    }

    pub fn hour(&self) -> u8 {
        self.0.hour()
    }

    pub fn minute(&self) -> u8 {
        self.0.minute()
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        u32::from(self.hour()) * 60 + u32::from(self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Time::parse(s, HH_MM)
            .map(TimeOfDay)
            .map_err(|_| TimeOfDayError::Malformed(s.to_string()))
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Session format of a slot; only group sessions carry a headcount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Private,
    Group { student_count: Option<u32> },
}

impl SessionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Private => "private",
            SessionKind::Group { .. } => "group",
        }
    }

    pub fn student_count(&self) -> Option<u32> {
        match self {
            SessionKind::Private => None,
            SessionKind::Group { student_count } => *student_count,
        }
    }
}

/// One teaching session on the weekly calendar, over `[start_time, end_time)`
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleSlot {
    pub id: String,
    pub day: DayOfWeek,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub subject: String,
    pub session: SessionKind,
    pub color: String,
}

impl ScheduleSlot {
    pub fn new(
        id: impl Into<String>,
        day: DayOfWeek,
        start_time: TimeOfDay,
        end_time: TimeOfDay,
        subject: impl Into<String>,
        session: SessionKind,
        color: impl Into<String>,
    ) -> Result<Self, TimeOfDayError> {
        if start_time >= end_time {
            return Err(TimeOfDayError::EmptyInterval {
                start: start_time,
                end: end_time,
            });
        }

        Ok(Self {
            id: id.into(),
            day,
            start_time,
            end_time,
            subject: subject.into(),
            session,
            color: color.into(),
        })
    }

    /// Half-open membership: the slot covers `at` when `start <= at < end`
    pub fn covers(&self, at: TimeOfDay) -> bool {
        self.start_time <= at && at < self.end_time
    }

    pub fn overlaps(&self, other: &ScheduleSlot) -> bool {
        self.day == other.day
            && self.start_time < other.end_time
            && other.start_time < self.end_time
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_time.minutes_since_midnight() - self.start_time.minutes_since_midnight()
    }
}

#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<ScheduleSlot>, anyhow::Error>;
}
