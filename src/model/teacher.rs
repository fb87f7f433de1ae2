use super::{wire, Course, Record};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Teacher {
    #[serde(rename = "teacherId", default)]
    pub id: i32,
    #[serde(rename = "teacherFName", default, deserialize_with = "wire::text::deserialize")]
    pub first_name: String,
    #[serde(rename = "teacherLName", default, deserialize_with = "wire::text::deserialize")]
    pub last_name: String,
    #[serde(rename = "employeeNumber", default, deserialize_with = "wire::text::deserialize")]
    pub employee_number: String,
    #[serde(rename = "hireDate", default, with = "wire::timestamp")]
    #[schema(value_type = String, example = "2016/08/05 00:00:00")]
    pub hire_date: Option<NaiveDateTime>,
    #[serde(default, with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 55.3)]
    pub salary: Decimal,
    /// Derived at read time from the courses table; never stored.
    #[serde(rename = "coursesByTeacher", default)]
    pub courses: Vec<Course>,
}

impl Record for Teacher {
    const LABEL: &'static str = "teacher";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn removed_message(id: i32) -> String {
        format!("The teacher with given id {} has been removed from the DB", id)
    }

    fn missing_message(id: i32) -> String {
        format!("The teacher with given id {} is not found", id)
    }
}
