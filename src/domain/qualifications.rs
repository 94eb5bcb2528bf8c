use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Highest hourly rate a qualification may carry
pub const MAX_RATE: Decimal = Decimal::from_parts(10_000, 0, 0, false, 0);

/// Which of the teacher's two qualification lists a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QualificationKind {
    Private,
    Group,
}

impl QualificationKind {
    pub fn label(&self) -> &'static str {
        match self {
            QualificationKind::Private => "Private",
            QualificationKind::Group => "Group",
        }
    }
}

impl fmt::Display for QualificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            QualificationKind::Private => "private",
            QualificationKind::Group => "group",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for QualificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "private" => Ok(QualificationKind::Private),
            "group" => Ok(QualificationKind::Group),
            _ => Err(format!("Unknown qualification kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

/// Fields shared by both qualification variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationBase {
    pub id: String,
    pub name: String,
    /// Currency units per hour
    pub rate: Decimal,
    pub currency: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivateQualification {
    #[serde(flatten)]
    pub base: QualificationBase,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupQualification {
    #[serde(flatten)]
    pub base: QualificationBase,
    pub min_students: u32,
    pub max_students: u32,
}

impl GroupQualification {
    pub fn student_bounds(&self) -> (u32, u32) {
        (self.min_students, self.max_students)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Qualification {
    Private(PrivateQualification),
    Group(GroupQualification),
}

impl Qualification {
    pub fn base(&self) -> &QualificationBase {
        match self {
            Qualification::Private(q) => &q.base,
            Qualification::Group(q) => &q.base,
        }
    }

    pub fn kind(&self) -> QualificationKind {
        match self {
            Qualification::Private(_) => QualificationKind::Private,
            Qualification::Group(_) => QualificationKind::Group,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    pub fn name(&self) -> &str {
        &self.base().name
    }

    pub fn rate(&self) -> Decimal {
        self.base().rate
    }

    pub fn currency(&self) -> &str {
        &self.base().currency
    }

    /// Headcount a fresh booking starts with
    pub fn default_student_count(&self) -> u32 {
        match self {
            Qualification::Private(_) => 1,
            Qualification::Group(q) => q.min_students,
        }
    }
}

/// Fields accepted by the add and edit forms
#[derive(Debug, Clone)]
pub struct QualificationDraft {
    pub name: String,
    pub rate: Decimal,
    pub currency: String,
    pub description: Option<String>,
    pub level: Level,
    pub min_students: u32,
    pub max_students: u32,
}

impl QualificationDraft {
    /// Builds a record of the given kind; the variant-specific fields of
    /// the other kind are ignored.
    pub fn into_qualification(self, kind: QualificationKind, id: String) -> Qualification {
        let base = QualificationBase {
            id,
            name: self.name,
            rate: self.rate,
            currency: self.currency,
            description: self.description,
        };

        match kind {
            QualificationKind::Private => Qualification::Private(PrivateQualification {
                base,
                level: self.level,
            }),
            QualificationKind::Group => Qualification::Group(GroupQualification {
                base,
                min_students: self.min_students,
                max_students: self.max_students,
            }),
        }
    }
}

/// In-place edit of one qualification list; returns whether it matched
/// anything.
pub type ListEdit = Box<dyn FnOnce(&mut Vec<Qualification>) -> bool + Send>;

/// Storage for the teacher's two qualification lists.
///
/// `replace` follows the list-replacement contract: callers compute the
/// new list and hand it over whole. `modify` reads, edits and stores one
/// list as a single step so concurrent writers never drop each other's
/// changes.
#[async_trait]
pub trait QualificationRepository: Send + Sync {
    async fn list(&self, kind: QualificationKind) -> Result<Vec<Qualification>, anyhow::Error>;
    async fn find(
        &self,
        kind: QualificationKind,
        id: &str,
    ) -> Result<Option<Qualification>, anyhow::Error>;
    async fn replace(
        &self,
        kind: QualificationKind,
        qualifications: Vec<Qualification>,
    ) -> Result<(), anyhow::Error>;
    async fn modify(&self, kind: QualificationKind, edit: ListEdit) -> Result<bool, anyhow::Error>;
}
