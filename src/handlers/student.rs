//! `/api/Student/*` handlers.

use super::today;
use crate::error::AppError;
use crate::model::Student;
use crate::response::deleted;
use crate::service::{CrudService, StudentService};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// List every student
#[utoipa::path(
    get,
    path = "/api/Student/ListStudents",
    responses((status = 200, description = "All students, unordered", body = [Student])),
    tag = "Students"
)]
pub async fn list_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(CrudService::list(&*state.students).await?))
}

/// Find a student by id
#[utoipa::path(
    get,
    path = "/api/Student/FindStudent/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Student found", body = Student),
        (status = 404, description = "No student with that id")
    ),
    tag = "Students"
)]
pub async fn find_student(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Student>, AppError> {
    Ok(Json(CrudService::find(&*state.students, id).await?))
}

/// Add a student and return the generated id
#[utoipa::path(
    post,
    path = "/api/Student/AddStudent",
    request_body = Student,
    responses(
        (status = 200, description = "Generated student id", body = i32),
        (status = 422, description = "Validation failed")
    ),
    tag = "Students"
)]
pub async fn add_student(State(state): State<AppState>, Json(student): Json<Student>) -> Result<Json<i32>, AppError> {
    let id = StudentService::add(&*state.students, &student, today()).await?;
    Ok(Json(id))
}

/// Delete a student
#[utoipa::path(
    delete,
    path = "/api/Student/DeleteStudent/{id}",
    params(("id" = i32, Path, description = "Student id")),
    responses(
        (status = 200, description = "Removed", body = String),
        (status = 404, description = "No student with that id", body = String)
    ),
    tag = "Students"
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let outcome = CrudService::delete::<Student, _>(&*state.students, id).await?;
    Ok(deleted(outcome))
}

/// Replace every field of a student and return the stored row
#[utoipa::path(
    put,
    path = "/api/Student/UpdateStudent/{id}",
    params(("id" = i32, Path, description = "Student id")),
    request_body = Student,
    responses(
        (status = 200, description = "Updated student", body = Student),
        (status = 404, description = "No student with that id"),
        (status = 422, description = "Validation failed")
    ),
    tag = "Students"
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(student): Json<Student>,
) -> Result<Json<Student>, AppError> {
    let updated = StudentService::update(&*state.students, id, &student, today()).await?;
    Ok(Json(updated))
}
