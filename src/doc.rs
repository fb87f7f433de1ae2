use crate::handlers::{course, student, teacher};
use crate::model::{Course, Student, Teacher, TeacherSearch};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        student::list_students,
        student::find_student,
        student::add_student,
        student::delete_student,
        student::update_student,
        teacher::list_teachers,
        teacher::list_courses,
        teacher::find_teacher,
        teacher::search_teachers,
        teacher::add_teacher,
        teacher::delete_teacher,
        teacher::update_teacher,
        course::list_courses,
        course::find_course,
        course::add_course,
        course::delete_course,
        course::update_course
    ),
    components(schemas(Student, Teacher, Course, TeacherSearch)),
    tags(
        (name = "Students", description = "Student records"),
        (name = "Teachers", description = "Teacher records with the courses they teach"),
        (name = "Courses", description = "Course records"),
    ),
    info(
        title = "School Records API",
        version = "0.1.0",
        description = "Students, teachers and courses"
    )
)]
pub struct ApiDoc;
