use super::{after_write, rejected, PageError, ValidationQuery};
use crate::handlers::today;
use crate::model::{wire, Student};
use crate::service::{CrudService, StudentService, ValidationError};
use crate::state::AppState;
use crate::view;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

const BASE: &str = "/StudentPage";

#[derive(Debug, Default, Deserialize)]
pub struct StudentForm {
    #[serde(rename = "StudentFName", default)]
    pub first_name: String,
    #[serde(rename = "StudentLName", default)]
    pub last_name: String,
    #[serde(rename = "StudentNumber", default)]
    pub number: String,
    #[serde(rename = "EnrolDate", default)]
    pub enrol_date: String,
}

impl StudentForm {
    pub fn into_student(self) -> Result<Student, ValidationError> {
        let enrol_date = wire::parse_date(&self.enrol_date).map_err(|_| ValidationError::InvalidEnrolDate)?;
        Ok(Student {
            id: 0,
            first_name: self.first_name,
            last_name: self.last_name,
            number: self.number.trim().to_string(),
            enrol_date,
        })
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let students = CrudService::list(&*state.students).await?;
    Ok(view::student::list(&students))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>, PageError> {
    let student = CrudService::find(&*state.students, id).await?;
    Ok(view::student::show(&student))
}

pub async fn new() -> Html<String> {
    view::student::new_form()
}

pub async fn create(State(state): State<AppState>, Form(form): Form<StudentForm>) -> Result<Redirect, PageError> {
    let student = match form.into_student() {
        Ok(s) => s,
        Err(e) => return Ok(rejected(BASE, e)),
    };
    after_write(BASE, StudentService::add(&*state.students, &student, today()).await)
}

pub async fn validation(Query(q): Query<ValidationQuery>) -> Html<String> {
    view::validation("Student not saved", &q.message(), "/StudentPage/List")
}

pub async fn delete_confirm(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>, PageError> {
    let student = CrudService::find(&*state.students, id).await?;
    Ok(view::student::confirm_delete(&student))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response, PageError> {
    let outcome = CrudService::delete::<Student, _>(&*state.students, id).await?;
    if !outcome.removed {
        return Ok((StatusCode::NOT_FOUND, view::not_found(&outcome.message)).into_response());
    }
    Ok(Redirect::to("/StudentPage/List").into_response())
}

pub async fn edit(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>, PageError> {
    let student = CrudService::find(&*state.students, id).await?;
    Ok(view::student::edit_form(&student))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<StudentForm>,
) -> Result<Redirect, PageError> {
    let student = match form.into_student() {
        Ok(s) => s,
        Err(e) => return Ok(rejected(BASE, e)),
    };
    let written = StudentService::update(&*state.students, id, &student, today()).await;
    after_write(BASE, written.map(|s| s.id))
}
