//! PostgreSQL repositories. Columns are read by name.

use super::Repository;
use crate::error::AppError;
use crate::model::{Course, Record, Student, Teacher};
use crate::sql::{self, bind_all, BindValue, TableDef};
use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use std::marker::PhantomData;

/// Mapping between an entity and its table.
pub trait PgRecord: Record + Unpin {
    const TABLE: TableDef;

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error>;

    /// Values for [`TableDef::columns`], in the same order.
    fn values(&self) -> Vec<BindValue>;
}

pub struct PgRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> PgRepository<E> {
    pub fn new(pool: PgPool) -> Self {
        PgRepository {
            pool,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E: PgRecord> Repository<E> for PgRepository<E> {
    async fn list(&self) -> Result<Vec<E>, AppError> {
        let sql = sql::select_all(&E::TABLE);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        let records = rows.iter().map(E::from_row).collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }

    async fn find(&self, id: i32) -> Result<Option<E>, AppError> {
        let sql = sql::select_by_id(&E::TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query(&sql).bind(id).fetch_optional(&self.pool).await?;
        let record = row.as_ref().map(E::from_row).transpose()?;
        Ok(record)
    }

    async fn insert(&self, record: &E) -> Result<i32, AppError> {
        let sql = sql::insert(&E::TABLE);
        let values = record.values();
        tracing::debug!(sql = %sql, params = ?values, "query");
        let row = bind_all(sqlx::query(&sql), values)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::InsertFailed(E::TABLE.name))?;
        let id: i32 = row.try_get(0)?;
        Ok(id)
    }

    async fn delete(&self, id: i32) -> Result<u64, AppError> {
        let sql = sql::delete(&E::TABLE);
        tracing::debug!(sql = %sql, id, "query");
        let done = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(done.rows_affected())
    }

    async fn update(&self, id: i32, record: &E) -> Result<u64, AppError> {
        let sql = sql::update(&E::TABLE);
        let mut values = record.values();
        values.push(BindValue::Int(id));
        tracing::debug!(sql = %sql, params = ?values, "query");
        let done = bind_all(sqlx::query(&sql), values).execute(&self.pool).await?;
        Ok(done.rows_affected())
    }
}

/// NULL text reads as the empty string.
fn text(row: &PgRow, column: &str) -> Result<String, sqlx::Error> {
    Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
}

impl PgRecord for Student {
    const TABLE: TableDef = TableDef {
        name: "students",
        pk: "studentid",
        columns: &["studentfname", "studentlname", "studentnumber", "enroldate"],
    };

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Student {
            id: row.try_get("studentid")?,
            first_name: text(row, "studentfname")?,
            last_name: text(row, "studentlname")?,
            number: text(row, "studentnumber")?,
            enrol_date: row.try_get("enroldate")?,
        })
    }

    fn values(&self) -> Vec<BindValue> {
        vec![
            BindValue::Text(self.first_name.clone()),
            BindValue::Text(self.last_name.clone()),
            BindValue::Text(self.number.clone()),
            BindValue::Date(self.enrol_date),
        ]
    }
}

impl PgRecord for Teacher {
    const TABLE: TableDef = TableDef {
        name: "teachers",
        pk: "teacherid",
        columns: &["teacherfname", "teacherlname", "employeenumber", "hiredate", "salary"],
    };

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Teacher {
            id: row.try_get("teacherid")?,
            first_name: text(row, "teacherfname")?,
            last_name: text(row, "teacherlname")?,
            employee_number: text(row, "employeenumber")?,
            hire_date: row.try_get("hiredate")?,
            salary: row
                .try_get::<Option<rust_decimal::Decimal>, _>("salary")?
                .unwrap_or_default(),
            courses: Vec::new(),
        })
    }

    fn values(&self) -> Vec<BindValue> {
        vec![
            BindValue::Text(self.first_name.clone()),
            BindValue::Text(self.last_name.clone()),
            BindValue::Text(self.employee_number.clone()),
            BindValue::Timestamp(self.hire_date),
            BindValue::Decimal(self.salary),
        ]
    }
}

impl PgRecord for Course {
    const TABLE: TableDef = TableDef {
        name: "courses",
        pk: "courseid",
        columns: &["coursecode", "teacherid", "startdate", "finishdate", "coursename"],
    };

    fn from_row(row: &PgRow) -> Result<Self, sqlx::Error> {
        Ok(Course {
            id: row.try_get("courseid")?,
            code: text(row, "coursecode")?,
            teacher_id: row.try_get::<Option<i32>, _>("teacherid")?.unwrap_or_default(),
            start_date: row.try_get("startdate")?,
            finish_date: row.try_get("finishdate")?,
            name: text(row, "coursename")?,
        })
    }

    fn values(&self) -> Vec<BindValue> {
        vec![
            BindValue::Text(self.code.clone()),
            BindValue::Int(self.teacher_id),
            BindValue::Date(self.start_date),
            BindValue::Date(self.finish_date),
            BindValue::Text(self.name.clone()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn bind_order_matches_the_column_map() {
        let course = Course {
            id: 9,
            code: "http5101".into(),
            teacher_id: 1,
            start_date: NaiveDate::from_ymd_opt(2018, 9, 4),
            finish_date: None,
            name: "Web Application Development".into(),
        };
        let values = course.values();
        assert_eq!(values.len(), Course::TABLE.columns.len());
        assert_eq!(values[1], BindValue::Int(1));
        assert_eq!(values[3], BindValue::Date(None));
    }

    #[test]
    fn every_table_binds_one_value_per_column() {
        assert_eq!(Student::default().values().len(), Student::TABLE.columns.len());
        assert_eq!(Teacher::default().values().len(), Teacher::TABLE.columns.len());
    }
}
