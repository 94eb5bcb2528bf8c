use crate::domain::teacher::{Teacher, TeacherRepository, UpdateTeacher};
use crate::infrastructure::seed;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct InMemoryTeacherRepository {
    teacher: Arc<Mutex<Teacher>>,
}

impl InMemoryTeacherRepository {
    pub fn new(teacher: Teacher) -> Self {
        Self {
            teacher: Arc::new(Mutex::new(teacher)),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::teacher())
    }
}

#[async_trait]
impl TeacherRepository for InMemoryTeacherRepository {
    async fn get(&self) -> Result<Teacher, anyhow::Error> {
        self.teacher
            .lock()
            .map(|t| t.clone())
            .map_err(|_| anyhow::anyhow!("teacher store lock poisoned"))
    }

    async fn update(&self, update: UpdateTeacher) -> Result<Teacher, anyhow::Error> {
        let mut teacher = self
            .teacher
            .lock()
            .map_err(|_| anyhow::anyhow!("teacher store lock poisoned"))?;

        teacher.name = update.name;
        teacher.email = update.email;
        teacher.phone = update.phone;
        teacher.address = update.address;

        Ok(teacher.clone())
    }
}
