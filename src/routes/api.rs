//! JSON API routes.

use crate::handlers::{course, student, teacher};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/Student/ListStudents", get(student::list_students))
        .route("/api/Student/FindStudent/:id", get(student::find_student))
        .route("/api/Student/AddStudent", post(student::add_student))
        .route("/api/Student/DeleteStudent/:id", delete(student::delete_student))
        .route("/api/Student/UpdateStudent/:id", put(student::update_student))
        .route("/api/Teacher/ListTeachers", get(teacher::list_teachers))
        .route("/api/Teacher/ListCourses", get(teacher::list_courses))
        .route("/api/Teacher/FindTeacher/:id", get(teacher::find_teacher))
        .route("/api/Teacher/SearchTeachers", get(teacher::search_teachers))
        .route("/api/Teacher/AddTeacher", post(teacher::add_teacher))
        .route("/api/Teacher/DeleteTeacher/:id", delete(teacher::delete_teacher))
        .route("/api/Teacher/UpdateTeacher/:id", put(teacher::update_teacher))
        .route("/api/Course/ListCourses", get(course::list_courses))
        .route("/api/Course/FindCourse/:id", get(course::find_course))
        .route("/api/Course/AddCourse", post(course::add_course))
        .route("/api/Course/DeleteCourse/:id", delete(course::delete_course))
        .route("/api/Course/UpdateCourse/:id", put(course::update_course))
        .with_state(state)
}
