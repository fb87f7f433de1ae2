//! School records: students, teachers and courses over PostgreSQL, served as a JSON API
//! and as server-rendered pages.

pub mod config;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repository;
pub mod response;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;
pub mod view;

pub use config::Settings;
pub use error::{AppError, ConfigError};
pub use model::{Course, Student, Teacher, TeacherSearch};
pub use repository::{MemoryRepository, PgRepository, Repository};
pub use routes::app;
pub use service::{CrudService, TeacherService};
pub use state::AppState;
pub use store::{connect, ensure_database_exists, ensure_tables};
