//! Fixed demo dataset the in-memory repositories start from.

use crate::domain::courses::{Course, CourseStatus};
use crate::domain::dashboard::DashboardStats;
use crate::domain::qualifications::{
    GroupQualification, Level, PrivateQualification, Qualification, QualificationBase,
};
use crate::domain::schedule::{DayOfWeek, ScheduleSlot, SessionKind};
use crate::domain::students::Student;
use crate::domain::teacher::{Address, MemberStatus, Teacher};
use rust_decimal::Decimal;
use time::macros::date;

const PRIVATE_COLOR: &str = "#3B82F6";
const GROUP_COLOR: &str = "#10B981";

fn dollars(amount: i64) -> Decimal {
    Decimal::new(amount * 100, 2)
}

fn base(id: &str, name: &str, rate: i64, description: &str) -> QualificationBase {
    QualificationBase {
        id: id.to_string(),
        name: name.to_string(),
        rate: dollars(rate),
        currency: "$".to_string(),
        description: Some(description.to_string()),
    }
}

pub fn teacher() -> Teacher {
    Teacher {
        id: "1".to_string(),
        name: "Alynia Allan".to_string(),
        email: "AlyniaAllan@example.com".to_string(),
        phone: "+1 (416) 555-0123".to_string(),
        address: Address {
            street: "123 Main Street".to_string(),
            city: "North York".to_string(),
            state: "Ontario".to_string(),
            zip_code: "M2M 1A1".to_string(),
            country: "Canada".to_string(),
        },
        avatar: Some(
            "https://images.pexels.com/photos/762020/pexels-photo-762020.jpeg?auto=compress&cs=tinysrgb&w=400"
                .to_string(),
        ),
        status: MemberStatus::Active,
        join_date: date!(2023 - 01 - 15),
        specializations: ["Mathematics", "Physics", "Chemistry", "Computer Science"]
            .into_iter()
            .map(String::from)
            .collect(),
        experience_years: 8,
        rating: 4.8,
        total_students: 45,
    }
}

pub fn private_qualifications() -> Vec<Qualification> {
    let private = |id, name, rate, level, description| {
        Qualification::Private(PrivateQualification {
            base: base(id, name, rate, description),
            level,
        })
    };

    vec![
        private(
            "1",
            "Vocal Contemporary",
            20,
            Level::Intermediate,
            "Contemporary vocal techniques and performance",
        ),
        private(
            "2",
            "Vocal Core",
            30,
            Level::Advanced,
            "Core vocal training and fundamentals",
        ),
        private(
            "3",
            "Vocal Intermediate",
            25,
            Level::Intermediate,
            "Intermediate vocal training program",
        ),
        private(
            "4",
            "Vocal Plus",
            35,
            Level::Advanced,
            "Advanced vocal training with extended techniques",
        ),
        private("5", "Instrument", 40, Level::Beginner, "Basic instrument training"),
    ]
}

pub fn group_qualifications() -> Vec<Qualification> {
    vec![
        Qualification::Group(GroupQualification {
            base: base(
                "1",
                "Group Vocal Workshop",
                60,
                "Interactive group vocal training sessions",
            ),
            min_students: 3,
            max_students: 8,
        }),
        Qualification::Group(GroupQualification {
            base: base(
                "2",
                "Music Theory Basics",
                45,
                "Fundamental music theory for beginners",
            ),
            min_students: 5,
            max_students: 12,
        }),
    ]
}

/// Parses the weekly timetable through the same "HH:MM" boundary as any
/// other input.
pub fn schedule() -> anyhow::Result<Vec<ScheduleSlot>> {
    let rows = [
        ("1", DayOfWeek::Tuesday, "14:00", "15:30", "Vocal Contemporary", None),
        ("2", DayOfWeek::Wednesday, "15:30", "17:00", "Group Vocal Workshop", Some(6)),
        ("3", DayOfWeek::Thursday, "10:00", "11:30", "Vocal Core", None),
        ("4", DayOfWeek::Friday, "13:00", "14:30", "Music Theory Basics", Some(8)),
        ("5", DayOfWeek::Saturday, "09:00", "10:30", "Instrument", None),
        ("6", DayOfWeek::Saturday, "11:00", "12:30", "Vocal Plus", None),
    ];

    rows.into_iter()
        .map(|(id, day, start, end, subject, group_size)| -> anyhow::Result<ScheduleSlot> {
            let (session, color) = match group_size {
                Some(count) => (
                    SessionKind::Group {
                        student_count: Some(count),
                    },
                    GROUP_COLOR,
                ),
                None => (SessionKind::Private, PRIVATE_COLOR),
            };
            Ok(ScheduleSlot::new(
                id,
                day,
                start.parse()?,
                end.parse()?,
                subject,
                session,
                color,
            )?)
        })
        .collect()
}

pub fn students() -> Vec<Student> {
    let avatar = |photo: &str| {
        Some(format!(
            "https://images.pexels.com/photos/{photo}/pexels-photo-{photo}.jpeg?auto=compress&cs=tinysrgb&w=400"
        ))
    };

    vec![
        Student {
            id: "1".to_string(),
            name: "Emma Johnson".to_string(),
            email: "emma.johnson@example.com".to_string(),
            avatar: avatar("774909"),
            status: MemberStatus::Active,
            enrolled_courses: 3,
            join_date: date!(2024 - 01 - 15),
        },
        Student {
            id: "2".to_string(),
            name: "Michael Chen".to_string(),
            email: "michael.chen@example.com".to_string(),
            avatar: avatar("1222271"),
            status: MemberStatus::Active,
            enrolled_courses: 2,
            join_date: date!(2024 - 02 - 01),
        },
        Student {
            id: "3".to_string(),
            name: "Sarah Williams".to_string(),
            email: "sarah.williams@example.com".to_string(),
            avatar: avatar("1239291"),
            status: MemberStatus::Pending,
            enrolled_courses: 1,
            join_date: date!(2024 - 02 - 15),
        },
        Student {
            id: "4".to_string(),
            name: "David Rodriguez".to_string(),
            email: "david.rodriguez@example.com".to_string(),
            avatar: None,
            status: MemberStatus::Active,
            enrolled_courses: 4,
            join_date: date!(2023 - 12 - 10),
        },
        Student {
            id: "5".to_string(),
            name: "Lisa Thompson".to_string(),
            email: "lisa.thompson@example.com".to_string(),
            avatar: avatar("1181686"),
            status: MemberStatus::Inactive,
            enrolled_courses: 0,
            join_date: date!(2023 - 11 - 20),
        },
    ]
}

pub fn courses() -> Vec<Course> {
    let course = |id: &str, title: &str, instructor: &str, students, weeks, status, price| Course {
        id: id.to_string(),
        title: title.to_string(),
        instructor: instructor.to_string(),
        students,
        duration: format!("{} weeks", weeks),
        status,
        price: dollars(price),
    };

    vec![
        course("1", "Advanced Mathematics", "Dr. John Smith", 28, 12, CourseStatus::Active, 299),
        course("2", "Physics Fundamentals", "Prof. Maria Garcia", 22, 10, CourseStatus::Active, 249),
        course("3", "Chemistry Lab", "Dr. Robert Johnson", 18, 8, CourseStatus::Draft, 199),
        course("4", "Computer Science Basics", "Ms. Jennifer Lee", 35, 16, CourseStatus::Active, 399),
    ]
}

pub fn dashboard_stats() -> DashboardStats {
    DashboardStats {
        total_teachers: 24,
        active_students: 156,
        total_classes: 48,
        revenue: dollars(12450),
    }
}
