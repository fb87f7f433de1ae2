//! Server-rendered page routes. Each section has the same nine actions.

use crate::handlers::page::{course, student, teacher};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/StudentPage/List", get(student::list))
        .route("/StudentPage/Show/:id", get(student::show))
        .route("/StudentPage/New", get(student::new))
        .route("/StudentPage/Create", post(student::create))
        .route("/StudentPage/Validation", get(student::validation))
        .route("/StudentPage/DeleteConfirm/:id", get(student::delete_confirm))
        .route("/StudentPage/Delete/:id", post(student::delete))
        .route("/StudentPage/Edit/:id", get(student::edit))
        .route("/StudentPage/Update/:id", post(student::update))
        .route("/TeacherPage/List", get(teacher::list))
        .route("/TeacherPage/Show/:id", get(teacher::show))
        .route("/TeacherPage/New", get(teacher::new))
        .route("/TeacherPage/Create", post(teacher::create))
        .route("/TeacherPage/Validation", get(teacher::validation))
        .route("/TeacherPage/DeleteConfirm/:id", get(teacher::delete_confirm))
        .route("/TeacherPage/Delete/:id", post(teacher::delete))
        .route("/TeacherPage/Edit/:id", get(teacher::edit))
        .route("/TeacherPage/Update/:id", post(teacher::update))
        .route("/CoursePage/List", get(course::list))
        .route("/CoursePage/Show/:id", get(course::show))
        .route("/CoursePage/New", get(course::new))
        .route("/CoursePage/Create", post(course::create))
        .route("/CoursePage/Validation", get(course::validation))
        .route("/CoursePage/DeleteConfirm/:id", get(course::delete_confirm))
        .route("/CoursePage/Delete/:id", post(course::delete))
        .route("/CoursePage/Edit/:id", get(course::edit))
        .route("/CoursePage/Update/:id", post(course::update))
        .with_state(state)
}
