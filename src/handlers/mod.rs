//! HTTP handlers: the JSON API per entity and the server-rendered pages.

pub mod course;
pub mod page;
pub mod student;
pub mod teacher;

use chrono::NaiveDate;

/// Local calendar date used by the "not in the future" rules.
pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
