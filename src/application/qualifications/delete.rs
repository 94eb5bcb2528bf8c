use super::get::not_found;
use crate::domain::notifications::{NotificationLevel, Notifier};
use crate::domain::qualifications::{QualificationKind, QualificationRepository};
use crate::shared::error::AppError;
use std::sync::Arc;

pub struct DeleteQualificationUseCase {
    repo: Arc<dyn QualificationRepository>,
    notifier: Arc<dyn Notifier>,
}

impl DeleteQualificationUseCase {
    pub fn new(repo: Arc<dyn QualificationRepository>, notifier: Arc<dyn Notifier>) -> Self {
        Self { repo, notifier }
    }

    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, kind: QualificationKind, id: &str) -> Result<(), AppError> {
        let target = id.to_string();
        let removed = self
            .repo
            .modify(
                kind,
                Box::new(move |list| {
                    let before = list.len();
                    list.retain(|q| q.id() != target);
                    list.len() != before
                }),
            )
            .await?;
        if !removed {
            return Err(not_found(kind, id));
        }

        tracing::info!(%kind, id, "qualification deleted");
        self.notifier
            .notify(
                NotificationLevel::Success,
                format!("{} qualification deleted successfully!", kind.label()),
            )
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notifications::Notifier;
    use crate::infrastructure::repositories::notifications::NotificationLog;
    use crate::infrastructure::repositories::qualifications::InMemoryQualificationRepository;

    #[tokio::test]
    async fn test_delete_removes_only_matching_kind() {
        let repo = Arc::new(InMemoryQualificationRepository::seeded());
        let notifier = NotificationLog::new();
        let use_case = DeleteQualificationUseCase::new(repo.clone(), Arc::new(notifier.clone()));

        use_case
            .execute(QualificationKind::Group, "1")
            .await
            .expect("Failed to delete qualification");

        assert_eq!(repo.list(QualificationKind::Group).await.unwrap().len(), 1);
        assert!(repo.find(QualificationKind::Private, "1").await.unwrap().is_some());
        assert_eq!(
            notifier.recent(1).await.unwrap()[0].message,
            "Group qualification deleted successfully!"
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_deletes_remove_each_once() {
        let repo = Arc::new(InMemoryQualificationRepository::seeded());
        let use_case = Arc::new(DeleteQualificationUseCase::new(
            repo.clone(),
            Arc::new(NotificationLog::new()),
        ));

        let handles: Vec<_> = ["1", "2", "3", "4", "5", "1", "3"]
            .into_iter()
            .map(|id| {
                let use_case = use_case.clone();
                tokio::spawn(async move { use_case.execute(QualificationKind::Private, id).await })
            })
            .collect();
        let mut deleted = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                deleted += 1;
            }
        }

        assert_eq!(deleted, 5);
        assert!(repo.list(QualificationKind::Private).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id() {
        let repo = Arc::new(InMemoryQualificationRepository::seeded());
        let use_case = DeleteQualificationUseCase::new(repo, Arc::new(NotificationLog::new()));

        assert!(matches!(
            use_case.execute(QualificationKind::Private, "42").await,
            Err(AppError::NotFound(_))
        ));
    }
}
