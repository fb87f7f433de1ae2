//! Database bootstrap: create the database and the three record tables if they are missing,
//! and open the shared connection pool.

use crate::config::Settings;
use crate::error::{AppError, ConfigError};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Tables use the lower-case column names the queries refer to. There is deliberately no
/// foreign key from courses.teacherid to teachers.
const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS students (
        studentid SERIAL PRIMARY KEY,
        studentfname VARCHAR(255),
        studentlname VARCHAR(255),
        studentnumber VARCHAR(255),
        enroldate DATE
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS teachers (
        teacherid SERIAL PRIMARY KEY,
        teacherfname VARCHAR(255),
        teacherlname VARCHAR(255),
        employeenumber VARCHAR(255),
        hiredate TIMESTAMP,
        salary NUMERIC(10, 2)
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS courses (
        courseid SERIAL PRIMARY KEY,
        coursecode VARCHAR(255),
        teacherid INTEGER,
        startdate DATE,
        finishdate DATE,
        coursename VARCHAR(255)
    )
    "#,
];

/// Open the pool used by every repository.
pub async fn connect(settings: &Settings) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await?;
    Ok(pool)
}

/// Create `students`, `teachers` and `courses` if they do not exist.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    tracing::info!("record tables ready");
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = PgConnectOptions::from_str(&admin_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), ConfigError> {
    let scheme_end = url
        .find("://")
        .ok_or_else(|| ConfigError::DatabaseUrl("missing scheme".into()))?
        + 3;
    let path_start = match url[scheme_end..].find('/') {
        Some(i) => scheme_end + i + 1,
        None => return Err(ConfigError::DatabaseUrl("no database name".into())),
    };
    let rest = &url[path_start..];
    let (db_name, query) = match rest.find('?') {
        Some(i) => (&rest[..i], &rest[i..]),
        None => (rest, ""),
    };
    let admin_url = format!("{}postgres{}", &url[..path_start], query);
    Ok((admin_url, db_name.trim().to_string()))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_url_swaps_the_database_name() {
        let (admin, name) = parse_db_name_from_url("postgres://u:p@db:5432/school").unwrap();
        assert_eq!(admin, "postgres://u:p@db:5432/postgres");
        assert_eq!(name, "school");
    }

    #[test]
    fn query_string_is_kept_on_the_admin_url() {
        let (admin, name) = parse_db_name_from_url("postgres://db/school?sslmode=disable").unwrap();
        assert_eq!(admin, "postgres://db/postgres?sslmode=disable");
        assert_eq!(name, "school");
    }

    #[test]
    fn url_without_a_path_is_rejected() {
        assert!(parse_db_name_from_url("postgres://db:5432").is_err());
        assert!(parse_db_name_from_url("school").is_err());
    }

    #[test]
    fn identifiers_are_double_quoted() {
        assert_eq!(quote_ident(r#"odd"name"#), r#""odd""name""#);
    }
}
