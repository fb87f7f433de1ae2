//! Services between the HTTP handlers and the repositories.

mod crud;
mod enrich;
mod records;
mod validation;
pub use crud::{CrudService, DeleteOutcome};
pub use enrich::{with_courses, CoursesByTeacher};
pub use records::{CourseService, StudentService, TeacherService};
pub use validation::{
    is_student_number, validate_course, validate_new_student, validate_student_update, ValidationError,
    STUDENT_NUMBER_PATTERN,
};
