//! Field rules applied before a record is written. Rules run in a fixed order and the
//! first failure is reported on its own.

use crate::model::{Course, Student};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

pub const STUDENT_NUMBER_PATTERN: &str = r"^N\d{4}$";

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Student number should start with 'N' followed by 4 digits. Eg: N1234")]
    StudentNumberFormat,
    #[error("This student number has already been taken by the student")]
    StudentNumberTaken,
    #[error("Student number cannot be empty")]
    StudentNumberEmpty,
    #[error("Enrol Date cannot be in future.")]
    EnrolDateInFuture,
    #[error("Enrol Date cannot be empty.")]
    EnrolDateEmpty,
    #[error("Student first and last name cannot be empty")]
    StudentNamesEmpty,
    #[error("Student first name cannot be empty")]
    StudentFirstNameEmpty,
    #[error("Student last name cannot be empty")]
    StudentLastNameEmpty,
    #[error("Course start date cannot be in future.")]
    CourseStartInFuture,
    #[error("Course finish date cannot be in future.")]
    CourseFinishInFuture,
    #[error("Course name cannot be empty.")]
    CourseNameEmpty,
    #[error("Enrol Date is not a valid date.")]
    InvalidEnrolDate,
    #[error("Hire Date is not a valid date.")]
    InvalidHireDate,
    #[error("Start Date is not a valid date.")]
    InvalidStartDate,
    #[error("Finish Date is not a valid date.")]
    InvalidFinishDate,
    #[error("End Date is not a valid date.")]
    InvalidEndDate,
    #[error("Salary is not a valid amount.")]
    InvalidSalary,
    #[error("Teacher id is not a valid number.")]
    InvalidTeacherId,
    #[error("Start date cannot be after end date.")]
    SearchRangeReversed,
}

impl ValidationError {
    const ALL: &'static [ValidationError] = &[
        ValidationError::StudentNumberFormat,
        ValidationError::StudentNumberTaken,
        ValidationError::StudentNumberEmpty,
        ValidationError::EnrolDateInFuture,
        ValidationError::EnrolDateEmpty,
        ValidationError::StudentNamesEmpty,
        ValidationError::StudentFirstNameEmpty,
        ValidationError::StudentLastNameEmpty,
        ValidationError::CourseStartInFuture,
        ValidationError::CourseFinishInFuture,
        ValidationError::CourseNameEmpty,
        ValidationError::InvalidEnrolDate,
        ValidationError::InvalidHireDate,
        ValidationError::InvalidStartDate,
        ValidationError::InvalidFinishDate,
        ValidationError::InvalidEndDate,
        ValidationError::InvalidSalary,
        ValidationError::InvalidTeacherId,
        ValidationError::SearchRangeReversed,
    ];

    /// Stable short code carried in page redirects.
    pub fn code(self) -> &'static str {
        match self {
            ValidationError::StudentNumberFormat => "student_number_format",
            ValidationError::StudentNumberTaken => "student_number_taken",
            ValidationError::StudentNumberEmpty => "student_number_empty",
            ValidationError::EnrolDateInFuture => "enrol_date_future",
            ValidationError::EnrolDateEmpty => "enrol_date_empty",
            ValidationError::StudentNamesEmpty => "student_names_empty",
            ValidationError::StudentFirstNameEmpty => "student_first_name_empty",
            ValidationError::StudentLastNameEmpty => "student_last_name_empty",
            ValidationError::CourseStartInFuture => "course_start_future",
            ValidationError::CourseFinishInFuture => "course_finish_future",
            ValidationError::CourseNameEmpty => "course_name_empty",
            ValidationError::InvalidEnrolDate => "invalid_enrol_date",
            ValidationError::InvalidHireDate => "invalid_hire_date",
            ValidationError::InvalidStartDate => "invalid_start_date",
            ValidationError::InvalidFinishDate => "invalid_finish_date",
            ValidationError::InvalidEndDate => "invalid_end_date",
            ValidationError::InvalidSalary => "invalid_salary",
            ValidationError::InvalidTeacherId => "invalid_teacher_id",
            ValidationError::SearchRangeReversed => "search_range_reversed",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.code() == code)
    }
}

fn student_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(STUDENT_NUMBER_PATTERN).expect("student number pattern is a valid regex"))
}

pub fn is_student_number(s: &str) -> bool {
    student_number_regex().is_match(s)
}

fn in_future(date: Option<NaiveDate>, today: NaiveDate) -> bool {
    date.is_some_and(|d| d > today)
}

/// `except` is the id of the record being edited, which may keep its own number.
fn number_taken(number: &str, existing: &[Student], except: Option<i32>) -> bool {
    existing
        .iter()
        .any(|s| s.number == number && Some(s.id) != except)
}

fn check_names(student: &Student) -> Result<(), ValidationError> {
    match (student.first_name.trim().is_empty(), student.last_name.trim().is_empty()) {
        (true, true) => Err(ValidationError::StudentNamesEmpty),
        (true, false) => Err(ValidationError::StudentFirstNameEmpty),
        (false, true) => Err(ValidationError::StudentLastNameEmpty),
        (false, false) => Ok(()),
    }
}

/// Rules for a new student. Number and enrol date are optional; when given they must be
/// well-formed, unused and not in the future.
pub fn validate_new_student(
    student: &Student,
    existing: &[Student],
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if !student.number.is_empty() {
        if !is_student_number(&student.number) {
            return Err(ValidationError::StudentNumberFormat);
        }
        if number_taken(&student.number, existing, None) {
            return Err(ValidationError::StudentNumberTaken);
        }
    }
    if in_future(student.enrol_date, today) {
        return Err(ValidationError::EnrolDateInFuture);
    }
    check_names(student)
}

/// Rules for editing student `id`: number and enrol date become mandatory. A malformed
/// number is still reported before anything else.
pub fn validate_student_update(
    id: i32,
    student: &Student,
    existing: &[Student],
    today: NaiveDate,
) -> Result<(), ValidationError> {
    if !student.number.is_empty() && !is_student_number(&student.number) {
        return Err(ValidationError::StudentNumberFormat);
    }
    if student.number.is_empty() {
        return Err(ValidationError::StudentNumberEmpty);
    }
    if number_taken(&student.number, existing, Some(id)) {
        return Err(ValidationError::StudentNumberTaken);
    }
    if student.enrol_date.is_none() {
        return Err(ValidationError::EnrolDateEmpty);
    }
    if in_future(student.enrol_date, today) {
        return Err(ValidationError::EnrolDateInFuture);
    }
    check_names(student)
}

pub fn validate_course(course: &Course, today: NaiveDate) -> Result<(), ValidationError> {
    if in_future(course.start_date, today) {
        return Err(ValidationError::CourseStartInFuture);
    }
    if in_future(course.finish_date, today) {
        return Err(ValidationError::CourseFinishInFuture);
    }
    if course.name.trim().is_empty() {
        return Err(ValidationError::CourseNameEmpty);
    }
    Ok(())
}
