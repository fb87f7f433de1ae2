//! `/api/Teacher/*` handlers. Every teacher in a response carries its courses.

use crate::error::AppError;
use crate::model::{wire, Course, Teacher, TeacherSearch};
use crate::response::deleted;
use crate::service::{CrudService, ValidationError};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Earliest hire date, `yyyy-MM-dd`.
    #[serde(rename = "startDate")]
    pub start_date: Option<String>,
    /// Latest hire date, `yyyy-MM-dd`.
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

impl SearchParams {
    pub fn bounds(&self) -> Result<(Option<NaiveDate>, Option<NaiveDate>), ValidationError> {
        let parse = |raw: &Option<String>, err: ValidationError| match raw {
            Some(s) => wire::parse_date(s).map_err(|_| err),
            None => Ok(None),
        };
        Ok((
            parse(&self.start_date, ValidationError::InvalidStartDate)?,
            parse(&self.end_date, ValidationError::InvalidEndDate)?,
        ))
    }
}

/// List every teacher with the courses they teach
#[utoipa::path(
    get,
    path = "/api/Teacher/ListTeachers",
    responses((status = 200, description = "All teachers, unordered", body = [Teacher])),
    tag = "Teachers"
)]
pub async fn list_teachers(State(state): State<AppState>) -> Result<Json<Vec<Teacher>>, AppError> {
    Ok(Json(state.teacher_service().list().await?))
}

/// List every course, for picking a teacher's courses
#[utoipa::path(
    get,
    path = "/api/Teacher/ListCourses",
    responses((status = 200, description = "All courses, unordered", body = [Course])),
    tag = "Teachers"
)]
pub async fn list_courses(State(state): State<AppState>) -> Result<Json<Vec<Course>>, AppError> {
    Ok(Json(CrudService::list(&*state.courses).await?))
}

/// Find a teacher by id
#[utoipa::path(
    get,
    path = "/api/Teacher/FindTeacher/{id}",
    params(("id" = i32, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Teacher found", body = Teacher),
        (status = 404, description = "No teacher with that id")
    ),
    tag = "Teachers"
)]
pub async fn find_teacher(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Teacher>, AppError> {
    Ok(Json(state.teacher_service().find(id).await?))
}

/// Teachers hired within a date range
#[utoipa::path(
    get,
    path = "/api/Teacher/SearchTeachers",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching teachers", body = TeacherSearch),
        (status = 422, description = "Unparseable or reversed range")
    ),
    tag = "Teachers"
)]
pub async fn search_teachers(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<TeacherSearch>, AppError> {
    let (start, end) = params.bounds()?;
    Ok(Json(state.teacher_service().search(start, end).await?))
}

/// Add a teacher and return the generated id
#[utoipa::path(
    post,
    path = "/api/Teacher/AddTeacher",
    request_body = Teacher,
    responses((status = 200, description = "Generated teacher id", body = i32)),
    tag = "Teachers"
)]
pub async fn add_teacher(State(state): State<AppState>, Json(teacher): Json<Teacher>) -> Result<Json<i32>, AppError> {
    Ok(Json(state.teacher_service().add(&teacher).await?))
}

/// Delete a teacher. Their courses are left in place.
#[utoipa::path(
    delete,
    path = "/api/Teacher/DeleteTeacher/{id}",
    params(("id" = i32, Path, description = "Teacher id")),
    responses(
        (status = 200, description = "Removed", body = String),
        (status = 404, description = "No teacher with that id", body = String)
    ),
    tag = "Teachers"
)]
pub async fn delete_teacher(State(state): State<AppState>, Path(id): Path<i32>) -> Result<impl IntoResponse, AppError> {
    let outcome = CrudService::delete::<Teacher, _>(&*state.teachers, id).await?;
    Ok(deleted(outcome))
}

/// Replace every field of a teacher and return the stored row
#[utoipa::path(
    put,
    path = "/api/Teacher/UpdateTeacher/{id}",
    params(("id" = i32, Path, description = "Teacher id")),
    request_body = Teacher,
    responses(
        (status = 200, description = "Updated teacher", body = Teacher),
        (status = 404, description = "No teacher with that id")
    ),
    tag = "Teachers"
)]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(teacher): Json<Teacher>,
) -> Result<Json<Teacher>, AppError> {
    Ok(Json(state.teacher_service().update(id, &teacher).await?))
}
