use super::{after_write, rejected, PageError, ValidationQuery};
use crate::handlers::today;
use crate::model::{wire, Course};
use crate::service::{CourseService, CrudService, ValidationError};
use crate::state::AppState;
use crate::view;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::Deserialize;

const BASE: &str = "/CoursePage";

#[derive(Debug, Default, Deserialize)]
pub struct CourseForm {
    #[serde(rename = "CourseCode", default)]
    pub code: String,
    #[serde(rename = "TeacherId", default)]
    pub teacher_id: String,
    #[serde(rename = "StartDate", default)]
    pub start_date: String,
    #[serde(rename = "FinishDate", default)]
    pub finish_date: String,
    #[serde(rename = "CourseName", default)]
    pub name: String,
}

impl CourseForm {
    pub fn into_course(self) -> Result<Course, ValidationError> {
        let teacher_id = match self.teacher_id.trim() {
            "" => 0,
            raw => raw.parse().map_err(|_| ValidationError::InvalidTeacherId)?,
        };
        Ok(Course {
            id: 0,
            code: self.code,
            teacher_id,
            start_date: wire::parse_date(&self.start_date).map_err(|_| ValidationError::InvalidStartDate)?,
            finish_date: wire::parse_date(&self.finish_date).map_err(|_| ValidationError::InvalidFinishDate)?,
            name: self.name,
        })
    }
}

pub async fn list(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let courses = CrudService::list(&*state.courses).await?;
    Ok(view::course::list(&courses))
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>, PageError> {
    let course = CrudService::find(&*state.courses, id).await?;
    Ok(view::course::show(&course))
}

pub async fn new() -> Html<String> {
    view::course::new_form()
}

pub async fn create(State(state): State<AppState>, Form(form): Form<CourseForm>) -> Result<Redirect, PageError> {
    let course = match form.into_course() {
        Ok(c) => c,
        Err(e) => return Ok(rejected(BASE, e)),
    };
    after_write(BASE, CourseService::add(&*state.courses, &course, today()).await)
}

pub async fn validation(Query(q): Query<ValidationQuery>) -> Html<String> {
    view::validation("Course not saved", &q.message(), "/CoursePage/List")
}

pub async fn delete_confirm(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>, PageError> {
    let course = CrudService::find(&*state.courses, id).await?;
    Ok(view::course::confirm_delete(&course))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response, PageError> {
    let outcome = CrudService::delete::<Course, _>(&*state.courses, id).await?;
    if !outcome.removed {
        return Ok((StatusCode::NOT_FOUND, view::not_found(&outcome.message)).into_response());
    }
    Ok(Redirect::to("/CoursePage/List").into_response())
}

pub async fn edit(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>, PageError> {
    let course = CrudService::find(&*state.courses, id).await?;
    Ok(view::course::edit_form(&course))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<CourseForm>,
) -> Result<Redirect, PageError> {
    let course = match form.into_course() {
        Ok(c) => c,
        Err(e) => return Ok(rejected(BASE, e)),
    };
    let written = CourseService::update(&*state.courses, id, &course, today()).await;
    after_write(BASE, written.map(|c| c.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn teacher_id_must_be_numeric() {
        let form = CourseForm {
            teacher_id: "two".into(),
            ..CourseForm::default()
        };
        assert_eq!(form.into_course(), Err(ValidationError::InvalidTeacherId));
    }

    #[test]
    fn finish_date_errors_are_reported_separately() {
        let form = CourseForm {
            teacher_id: "2".into(),
            start_date: "2018-09-04".into(),
            finish_date: "14/12/2018".into(),
            ..CourseForm::default()
        };
        assert_eq!(form.into_course(), Err(ValidationError::InvalidFinishDate));
    }
}
