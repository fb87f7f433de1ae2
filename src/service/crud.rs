//! Entity-agnostic CRUD on top of a [`Repository`], with explicit not-found outcomes.

use crate::error::AppError;
use crate::model::Record;
use crate::repository::Repository;
use serde::Serialize;

/// Result of a delete: whether a row went away, and the message shown to the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteOutcome {
    pub removed: bool,
    pub message: String,
}

pub struct CrudService;

impl CrudService {
    pub async fn list<E: Record, R: Repository<E> + ?Sized>(repo: &R) -> Result<Vec<E>, AppError> {
        let rows = repo.list().await?;
        tracing::debug!(entity = E::LABEL, count = rows.len(), "list");
        Ok(rows)
    }

    /// Fetch one row by id, or `AppError::NotFound`.
    pub async fn find<E: Record, R: Repository<E> + ?Sized>(repo: &R, id: i32) -> Result<E, AppError> {
        repo.find(id)
            .await?
            .ok_or_else(|| AppError::NotFound(E::missing_message(id)))
    }

    pub async fn add<E: Record, R: Repository<E> + ?Sized>(repo: &R, record: &E) -> Result<i32, AppError> {
        let id = repo.insert(record).await?;
        tracing::info!(entity = E::LABEL, id, "created");
        Ok(id)
    }

    pub async fn delete<E: Record, R: Repository<E> + ?Sized>(repo: &R, id: i32) -> Result<DeleteOutcome, AppError> {
        let affected = repo.delete(id).await?;
        let removed = affected > 0;
        if removed {
            tracing::info!(entity = E::LABEL, id, "deleted");
        }
        Ok(DeleteOutcome {
            removed,
            message: if removed {
                E::removed_message(id)
            } else {
                E::missing_message(id)
            },
        })
    }

    /// Overwrite every field, then read the row back. The two statements are not atomic:
    /// a delete in between surfaces as not found.
    pub async fn update<E: Record, R: Repository<E> + ?Sized>(repo: &R, id: i32, record: &E) -> Result<E, AppError> {
        let affected = repo.update(id, record).await?;
        if affected == 0 {
            return Err(AppError::NotFound(E::missing_message(id)));
        }
        tracing::info!(entity = E::LABEL, id, "updated");
        Self::find(repo, id).await
    }
}
