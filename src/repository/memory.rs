//! In-process repository. Rows keep insertion order; ids count up from 1.

use super::Repository;
use crate::error::AppError;
use crate::model::Record;
use async_trait::async_trait;
use std::sync::{PoisonError, RwLock};

struct Table<E> {
    rows: Vec<E>,
    next_id: i32,
}

pub struct MemoryRepository<E> {
    table: RwLock<Table<E>>,
}

impl<E: Record> MemoryRepository<E> {
    pub fn new() -> Self {
        Self::with_rows(Vec::new())
    }

    /// Seed with rows that already carry their ids.
    pub fn with_rows(rows: Vec<E>) -> Self {
        let next_id = rows.iter().map(|r| r.id()).max().unwrap_or(0) + 1;
        MemoryRepository {
            table: RwLock::new(Table { rows, next_id }),
        }
    }
}

impl<E: Record> Default for MemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Record> Repository<E> for MemoryRepository<E> {
    async fn list(&self) -> Result<Vec<E>, AppError> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        Ok(table.rows.clone())
    }

    async fn find(&self, id: i32) -> Result<Option<E>, AppError> {
        let table = self.table.read().unwrap_or_else(PoisonError::into_inner);
        Ok(table.rows.iter().find(|r| r.id() == id).cloned())
    }

    async fn insert(&self, record: &E) -> Result<i32, AppError> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let id = table.next_id;
        table.next_id += 1;
        let mut row = record.clone();
        row.set_id(id);
        table.rows.push(row);
        tracing::debug!(entity = E::LABEL, id, "memory insert");
        Ok(id)
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        let before = table.rows.len();
        table.rows.retain(|r| r.id() != id);
        Ok((before - table.rows.len()) as u64)
    }

    async fn update(&self, id: i32, record: &E) -> Result<u64, AppError> {
        let mut table = self.table.write().unwrap_or_else(PoisonError::into_inner);
        match table.rows.iter_mut().find(|r| r.id() == id) {
            Some(row) => {
                *row = record.clone();
                row.set_id(id);
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;

    fn student(number: &str) -> Student {
        Student {
            first_name: "Sarah".into(),
            last_name: "Valdez".into(),
            number: number.into(),
            ..Student::default()
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_on_insert_and_ignored_from_input() {
        let repo = MemoryRepository::<Student>::new();
        let mut input = student("N1678");
        input.id = 99;
        let first = repo.insert(&input).await.unwrap();
        let second = repo.insert(&student("N1679")).await.unwrap();
        assert_eq!((first, second), (1, 2));
        assert_eq!(repo.find(1).await.unwrap().unwrap().number, "N1678");
    }

    #[tokio::test]
    async fn seeded_rows_continue_the_id_sequence() {
        let mut seeded = student("N1000");
        seeded.id = 10;
        let repo = MemoryRepository::with_rows(vec![seeded]);
        assert_eq!(repo.insert(&student("N1001")).await.unwrap(), 11);
    }

    #[tokio::test]
    async fn update_and_delete_report_rows_affected() {
        let repo = MemoryRepository::<Student>::new();
        let id = repo.insert(&student("N2000")).await.unwrap();
        assert_eq!(repo.update(id, &student("N2001")).await.unwrap(), 1);
        assert_eq!(repo.update(id + 1, &student("N2002")).await.unwrap(), 0);
        assert_eq!(repo.find(id).await.unwrap().unwrap().number, "N2001");
        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
        assert!(repo.list().await.unwrap().is_empty());
    }
}
