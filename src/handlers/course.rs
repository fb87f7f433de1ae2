//! `/api/Course/*` handlers.

use super::today;
use crate::error::AppError;
use crate::model::Course;
use crate::response::deleted;
use crate::service::{CourseService, CrudService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// List every course
#[utoipa::path(
    get,
    path = "/api/Course/ListCourses",
    responses((status = 200, description = "All courses, unordered", body = [Course])),
    tag = "Courses"
)]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(CrudService::list(&*state.courses).await?))
}

/// Find a course by id
#[utoipa::path(
    get,
    path = "/api/Course/FindCourse/{id}",
    params(("id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Course found", body = Course),
        (status = 404, description = "No course with that id")
    ),
    tag = "Courses"
)]
pub async fn find_course(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Course>, AppError> {
    Ok(Json(CrudService::find(&*state.courses, id).await?))
}

/// Add a course and return the generated id
#[utoipa::path(
    post,
    path = "/api/Course/AddCourse",
    request_body = Course,
    responses(
        (status = 200, description = "Generated course id", body = i32),
        (status = 422, description = "Validation failed")
    ),
    tag = "Courses"
)]
pub async fn add_course(State(state): State<AppState>, Json(course): Json<Course>) -> Result<Json<i32>, AppError> {
    let id = CourseService::add(&*state.courses, &course, today()).await?;
    Ok(Json(id))
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/api/Course/DeleteCourse/{id}",
    params(("id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Removed", body = String),
        (status = 404, description = "No course with that id", body = String)
    ),
    tag = "Courses"
)]
pub async fn delete_course(State(state): State<AppState>, Path(id): Path<i32>) -> Result<impl IntoResponse, AppError> {
    let outcome = CrudService::delete::<Course, _>(&*state.courses, id).await?;
    Ok(deleted(outcome))
}

/// Replace every field of a course and return the stored row
#[utoipa::path(
    put,
    path = "/api/Course/UpdateCourse/{id}",
    params(("id" = i32, Path, description = "Course id")),
    request_body = Course,
    responses(
        (status = 200, description = "Updated course", body = Course),
        (status = 404, description = "No course with that id"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(course): Json<Course>,
) -> Result<Json<Course>, AppError> {
    let updated = CourseService::update(&*state.courses, id, &course, today()).await?;
    Ok(Json(updated))
}
