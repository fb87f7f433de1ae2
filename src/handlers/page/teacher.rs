use super::{after_write, rejected, PageError, ValidationQuery};
use crate::error::AppError;
use crate::handlers::teacher::SearchParams;
use crate::model::{wire, Teacher};
use crate::service::{CrudService, ValidationError};
use crate::state::AppState;
use crate::view;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

const BASE: &str = "/TeacherPage";

#[derive(Debug, Default, Deserialize)]
pub struct TeacherForm {
    #[serde(rename = "TeacherFName", default)]
    pub first_name: String,
    #[serde(rename = "TeacherLName", default)]
    pub last_name: String,
    #[serde(rename = "EmployeeNumber", default)]
    pub employee_number: String,
    #[serde(rename = "HireDate", default)]
    pub hire_date: String,
    #[serde(rename = "Salary", default)]
    pub salary: String,
}

impl TeacherForm {
    pub fn into_teacher(self) -> Result<Teacher, ValidationError> {
        let hire_date = wire::parse_timestamp(&self.hire_date).map_err(|_| ValidationError::InvalidHireDate)?;
        let salary = match self.salary.trim() {
            "" => Decimal::ZERO,
            raw => Decimal::from_str(raw).map_err(|_| ValidationError::InvalidSalary)?,
        };
        Ok(Teacher {
            id: 0,
            first_name: self.first_name,
            last_name: self.last_name,
            employee_number: self.employee_number,
            hire_date,
            salary,
            courses: Vec::new(),
        })
    }
}

/// `startDate` / `endDate` in the query narrow the list by hire date.
pub async fn list(State(state): State<AppState>, Query(params): Query<SearchParams>) -> Result<Response, PageError> {
    let (start, end) = match params.bounds() {
        Ok(bounds) => bounds,
        Err(e) => return Ok(rejected(BASE, e).into_response()),
    };
    match state.teacher_service().search(start, end).await {
        Ok(found) => Ok(view::teacher::list(&found).into_response()),
        Err(AppError::Validation(e)) => Ok(rejected(BASE, e).into_response()),
        Err(e) => Err(e.into()),
    }
}

pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>, PageError> {
    let teacher = state.teacher_service().find(id).await?;
    Ok(view::teacher::show(&teacher))
}

pub async fn new() -> Html<String> {
    view::teacher::new_form()
}

pub async fn create(State(state): State<AppState>, Form(form): Form<TeacherForm>) -> Result<Redirect, PageError> {
    let teacher = match form.into_teacher() {
        Ok(t) => t,
        Err(e) => return Ok(rejected(BASE, e)),
    };
    after_write(BASE, state.teacher_service().add(&teacher).await)
}

pub async fn validation(Query(q): Query<ValidationQuery>) -> Html<String> {
    view::validation("Teacher not saved", &q.message(), "/TeacherPage/List")
}

pub async fn delete_confirm(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>, PageError> {
    let teacher = CrudService::find(&*state.teachers, id).await?;
    Ok(view::teacher::confirm_delete(&teacher))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Response, PageError> {
    let outcome = CrudService::delete::<Teacher, _>(&*state.teachers, id).await?;
    if !outcome.removed {
        return Ok((StatusCode::NOT_FOUND, view::not_found(&outcome.message)).into_response());
    }
    Ok(Redirect::to("/TeacherPage/List").into_response())
}

pub async fn edit(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Html<String>, PageError> {
    let teacher = CrudService::find(&*state.teachers, id).await?;
    Ok(view::teacher::edit_form(&teacher))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<TeacherForm>,
) -> Result<Redirect, PageError> {
    let teacher = match form.into_teacher() {
        Ok(t) => t,
        Err(e) => return Ok(rejected(BASE, e)),
    };
    let written = state.teacher_service().update(id, &teacher).await;
    after_write(BASE, written.map(|t| t.id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn salary_and_hire_date_are_parsed_from_text() {
        let form = TeacherForm {
            first_name: "Caitlin".into(),
            hire_date: "2014-06-10".into(),
            salary: "62.77".into(),
            ..TeacherForm::default()
        };
        let t = form.into_teacher().unwrap();
        assert_eq!(wire::format_timestamp(t.hire_date), "2014/06/10 00:00:00");
        assert_eq!(t.salary, Decimal::from_str("62.77").unwrap());
    }

    #[test]
    fn non_numeric_salary_is_rejected() {
        let form = TeacherForm {
            salary: "lots".into(),
            ..TeacherForm::default()
        };
        assert_eq!(form.into_teacher(), Err(ValidationError::InvalidSalary));
    }
}
