//! Shared application state: the injected repositories, plus the pool when backed by PostgreSQL.

use crate::model::{Course, Student, Teacher};
use crate::repository::{MemoryRepository, PgRepository, Repository};
use crate::service::TeacherService;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn Repository<Student>>,
    pub teachers: Arc<dyn Repository<Teacher>>,
    pub courses: Arc<dyn Repository<Course>>,
    /// Used by the readiness probe; `None` for in-memory state.
    pub pool: Option<PgPool>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        AppState {
            students: Arc::new(PgRepository::<Student>::new(pool.clone())),
            teachers: Arc::new(PgRepository::<Teacher>::new(pool.clone())),
            courses: Arc::new(PgRepository::<Course>::new(pool.clone())),
            pool: Some(pool),
        }
    }

    pub fn in_memory() -> Self {
        Self::from_repositories(
            Arc::new(MemoryRepository::<Student>::new()),
            Arc::new(MemoryRepository::<Teacher>::new()),
            Arc::new(MemoryRepository::<Course>::new()),
        )
    }

    pub fn from_repositories(
        students: Arc<dyn Repository<Student>>,
        teachers: Arc<dyn Repository<Teacher>>,
        courses: Arc<dyn Repository<Course>>,
    ) -> Self {
        AppState {
            students,
            teachers,
            courses,
            pool: None,
        }
    }

    pub fn teacher_service(&self) -> TeacherService<'_> {
        TeacherService::new(self.teachers.as_ref(), self.courses.as_ref())
    }
}
