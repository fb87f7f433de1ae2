//! Data-access seam: one repository per entity, injected into the application state.

use crate::error::AppError;
use crate::model::Record;
use async_trait::async_trait;

mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::{PgRecord, PgRepository};

/// Row-level persistence for one entity type. Each call is one statement; nothing here
/// spans a transaction.
#[async_trait]
pub trait Repository<E: Record>: Send + Sync {
    /// All rows, in whatever order the store yields them.
    async fn list(&self) -> Result<Vec<E>, AppError>;

    /// The row with this key, or `None`.
    async fn find(&self, id: i32) -> Result<Option<E>, AppError>;

    /// Insert and return the generated key. The record's own id is ignored.
    async fn insert(&self, record: &E) -> Result<i32, AppError>;

    /// Delete by key; returns the number of rows removed.
    async fn delete(&self, id: i32) -> Result<u64, AppError>;

    /// Overwrite every non-key column; returns the number of rows changed.
    async fn update(&self, id: i32, record: &E) -> Result<u64, AppError>;
}
