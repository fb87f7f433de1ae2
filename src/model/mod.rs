//! Entity records: one struct per table, plus the transient teacher search carrier.

mod course;
mod search;
mod student;
mod teacher;
pub mod wire;

pub use course::Course;
pub use search::TeacherSearch;
pub use student::Student;
pub use teacher::Teacher;

/// A row type with a database-generated integer key.
pub trait Record: Clone + Send + Sync + 'static {
    /// Lower-case singular name, used in logs and error messages.
    const LABEL: &'static str;

    fn id(&self) -> i32;

    fn set_id(&mut self, id: i32);

    /// Message returned when a delete removed the row.
    fn removed_message(id: i32) -> String;

    /// Message returned when no row has the given id.
    fn missing_message(id: i32) -> String;
}
