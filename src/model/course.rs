use super::{wire, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Course {
    #[serde(rename = "courseId", default)]
    pub id: i32,
    #[serde(rename = "courseCode", default, deserialize_with = "wire::text::deserialize")]
    pub code: String,
    /// Teacher who runs the course. Not checked against the teachers table.
    #[serde(rename = "teacherId", default)]
    pub teacher_id: i32,
    #[serde(rename = "startDate", default, with = "wire::date")]
    #[schema(value_type = String, example = "2018-09-04")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "finishDate", default, with = "wire::date")]
    #[schema(value_type = String, example = "2018-12-14")]
    pub finish_date: Option<NaiveDate>,
    #[serde(rename = "courseName", default, deserialize_with = "wire::text::deserialize")]
    pub name: String,
}

impl Record for Course {
    const LABEL: &'static str = "course";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn removed_message(id: i32) -> String {
        format!("The course with ID {} has been successfully removed from the database.", id)
    }

    fn missing_message(id: i32) -> String {
        format!("No course found with ID {}.", id)
    }
}
