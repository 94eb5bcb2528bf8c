use crate::domain::qualifications::{
    ListEdit, Qualification, QualificationKind, QualificationRepository,
};
use crate::infrastructure::seed;
use async_trait::async_trait;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct Lists {
    private: Vec<Qualification>,
    group: Vec<Qualification>,
}

impl Lists {
    fn of(&self, kind: QualificationKind) -> &Vec<Qualification> {
        match kind {
            QualificationKind::Private => &self.private,
            QualificationKind::Group => &self.group,
        }
    }

    fn of_mut(&mut self, kind: QualificationKind) -> &mut Vec<Qualification> {
        match kind {
            QualificationKind::Private => &mut self.private,
            QualificationKind::Group => &mut self.group,
        }
    }
}

/// The teacher's private and group qualification lists, held in memory
#[derive(Clone, Default)]
pub struct InMemoryQualificationRepository {
    lists: Arc<Mutex<Lists>>,
}

impl InMemoryQualificationRepository {
    pub fn seeded() -> Self {
        Self {
            lists: Arc::new(Mutex::new(Lists {
                private: seed::private_qualifications(),
                group: seed::group_qualifications(),
            })),
        }
    }

    fn check_kind(kind: QualificationKind, list: &[Qualification]) -> Result<(), anyhow::Error> {
        if let Some(stray) = list.iter().find(|q| q.kind() != kind) {
            anyhow::bail!(
                "{} qualification '{}' cannot be stored in the {} list",
                stray.kind(),
                stray.id(),
                kind
            );
        }
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Lists>, anyhow::Error> {
        self.lists
            .lock()
            .map_err(|_| anyhow::anyhow!("qualification store lock poisoned"))
    }
}

#[async_trait]
impl QualificationRepository for InMemoryQualificationRepository {
    async fn list(&self, kind: QualificationKind) -> Result<Vec<Qualification>, anyhow::Error> {
        Ok(self.lock()?.of(kind).clone())
    }

    async fn find(
        &self,
        kind: QualificationKind,
        id: &str,
    ) -> Result<Option<Qualification>, anyhow::Error> {
        Ok(self.lock()?.of(kind).iter().find(|q| q.id() == id).cloned())
    }

    async fn replace(
        &self,
        kind: QualificationKind,
        qualifications: Vec<Qualification>,
    ) -> Result<(), anyhow::Error> {
        Self::check_kind(kind, &qualifications)?;
        *self.lock()?.of_mut(kind) = qualifications;
        Ok(())
    }

    async fn modify(&self, kind: QualificationKind, edit: ListEdit) -> Result<bool, anyhow::Error> {
        let mut lists = self.lock()?;
        let mut list = lists.of(kind).clone();
        if !edit(&mut list) {
            return Ok(false);
        }

        Self::check_kind(kind, &list)?;
        *lists.of_mut(kind) = list;
        Ok(true)
    }
}
