//! Per-entity operations: validation before writes, course enrichment for teachers, and
//! the teacher hire-date search.

use super::crud::CrudService;
use super::enrich::{with_courses, CoursesByTeacher};
use super::validation::{validate_course, validate_new_student, validate_student_update, ValidationError};
use crate::error::AppError;
use crate::model::{Course, Record, Student, Teacher, TeacherSearch};
use crate::repository::Repository;
use chrono::NaiveDate;

pub struct StudentService;

impl StudentService {
    /// Validate against the current student list, then insert. The uniqueness check and the
    /// insert are separate statements, so two concurrent creates can still share a number.
    pub async fn add(
        students: &dyn Repository<Student>,
        student: &Student,
        today: NaiveDate,
    ) -> Result<i32, AppError> {
        let existing = CrudService::list(students).await?;
        if let Err(e) = validate_new_student(student, &existing, today) {
            tracing::warn!(rule = e.code(), "student rejected");
            return Err(e.into());
        }
        CrudService::add(students, student).await
    }

    pub async fn update(
        students: &dyn Repository<Student>,
        id: i32,
        student: &Student,
        today: NaiveDate,
    ) -> Result<Student, AppError> {
        let existing = CrudService::list(students).await?;
        if let Err(e) = validate_student_update(id, student, &existing, today) {
            tracing::warn!(rule = e.code(), id, "student update rejected");
            return Err(e.into());
        }
        CrudService::update(students, id, student).await
    }
}

pub struct CourseService;

impl CourseService {
    pub async fn add(courses: &dyn Repository<Course>, course: &Course, today: NaiveDate) -> Result<i32, AppError> {
        if let Err(e) = validate_course(course, today) {
            tracing::warn!(rule = e.code(), "course rejected");
            return Err(e.into());
        }
        CrudService::add(courses, course).await
    }

    pub async fn update(
        courses: &dyn Repository<Course>,
        id: i32,
        course: &Course,
        today: NaiveDate,
    ) -> Result<Course, AppError> {
        if let Err(e) = validate_course(course, today) {
            tracing::warn!(rule = e.code(), id, "course update rejected");
            return Err(e.into());
        }
        CrudService::update(courses, id, course).await
    }
}

/// Teacher reads always carry the teacher's courses.
pub struct TeacherService<'a> {
    pub teachers: &'a dyn Repository<Teacher>,
    pub courses: &'a dyn Repository<Course>,
}

impl<'a> TeacherService<'a> {
    pub fn new(teachers: &'a dyn Repository<Teacher>, courses: &'a dyn Repository<Course>) -> Self {
        TeacherService { teachers, courses }
    }

    pub async fn list(&self) -> Result<Vec<Teacher>, AppError> {
        let teachers = CrudService::list(self.teachers).await?;
        let courses = CrudService::list(self.courses).await?;
        Ok(with_courses(teachers, courses))
    }

    pub async fn find(&self, id: i32) -> Result<Teacher, AppError> {
        let mut teacher = CrudService::find(self.teachers, id).await?;
        let courses = CrudService::list(self.courses).await?;
        CoursesByTeacher::group(courses).attach(&mut teacher);
        Ok(teacher)
    }

    pub async fn add(&self, teacher: &Teacher) -> Result<i32, AppError> {
        CrudService::add(self.teachers, teacher).await
    }

    /// Write, then re-read with the courses attached.
    pub async fn update(&self, id: i32, teacher: &Teacher) -> Result<Teacher, AppError> {
        if self.teachers.update(id, teacher).await? == 0 {
            return Err(AppError::NotFound(Teacher::missing_message(id)));
        }
        tracing::info!(entity = Teacher::LABEL, id, "updated");
        self.find(id).await
    }

    /// Teachers hired within `[start, end]` (inclusive, by calendar date). A missing bound is
    /// open; with any bound present, teachers without a hire date are left out.
    pub async fn search(&self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<TeacherSearch, AppError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(ValidationError::SearchRangeReversed.into());
            }
        }
        let teachers = self
            .list()
            .await?
            .into_iter()
            .filter(|t| hired_within(t, start, end))
            .collect();
        Ok(TeacherSearch {
            start_date: start,
            end_date: end,
            teachers,
        })
    }
}

fn hired_within(teacher: &Teacher, start: Option<NaiveDate>, end: Option<NaiveDate>) -> bool {
    if start.is_none() && end.is_none() {
        return true;
    }
    let Some(hired) = teacher.hire_date.map(|dt| dt.date()) else {
        return false;
    };
    start.map_or(true, |s| hired >= s) && end.map_or(true, |e| hired <= e)
}
