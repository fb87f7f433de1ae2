use super::{wire, Teacher};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Hire-date filter together with the teachers it matched. Not persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeacherSearch {
    #[serde(rename = "startDate", default, with = "wire::date")]
    #[schema(value_type = String)]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "endDate", default, with = "wire::date")]
    #[schema(value_type = String)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub teachers: Vec<Teacher>,
}
