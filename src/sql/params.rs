//! Typed values bound to PostgreSQL statements.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::Query;

/// A value that can be bound to a PostgreSQL query. Each variant binds its own SQL type,
/// so absent dates go over the wire as typed NULLs.
#[derive(Clone, Debug, PartialEq)]
pub enum BindValue {
    Int(i32),
    Text(String),
    Date(Option<NaiveDate>),
    Timestamp(Option<NaiveDateTime>),
    Decimal(Decimal),
}

impl BindValue {
    pub fn bind<'q>(self, query: Query<'q, Postgres, PgArguments>) -> Query<'q, Postgres, PgArguments> {
        match self {
            BindValue::Int(n) => query.bind(n),
            BindValue::Text(s) => query.bind(s),
            BindValue::Date(d) => query.bind(d),
            BindValue::Timestamp(t) => query.bind(t),
            BindValue::Decimal(d) => query.bind(d),
        }
    }
}

/// Bind values in order.
pub fn bind_all<'q>(
    mut query: Query<'q, Postgres, PgArguments>,
    values: Vec<BindValue>,
) -> Query<'q, Postgres, PgArguments> {
    for v in values {
        query = v.bind(query);
    }
    query
}
