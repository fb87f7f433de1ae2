use super::{wire, Record};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Student {
    #[serde(rename = "studentId", default)]
    pub id: i32,
    #[serde(rename = "studentFName", default, deserialize_with = "wire::text::deserialize")]
    pub first_name: String,
    #[serde(rename = "studentLName", default, deserialize_with = "wire::text::deserialize")]
    pub last_name: String,
    /// `N` followed by four digits, unique among students.
    #[serde(rename = "studentNumber", default, deserialize_with = "wire::text::deserialize")]
    pub number: String,
    #[serde(rename = "enrolDate", default, with = "wire::date")]
    #[schema(value_type = String, example = "2023-01-09")]
    pub enrol_date: Option<NaiveDate>,
}

impl Record for Student {
    const LABEL: &'static str = "student";

    fn id(&self) -> i32 {
        self.id
    }

    fn set_id(&mut self, id: i32) {
        self.id = id;
    }

    fn removed_message(id: i32) -> String {
        format!("The student with ID {} has been successfully deleted from the database.", id)
    }

    fn missing_message(id: i32) -> String {
        format!("No student found with ID {}.", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_names_follow_the_public_api() {
        let s = Student {
            id: 7,
            first_name: "Jason".into(),
            last_name: "Freeman".into(),
            number: "N1694".into(),
            enrol_date: NaiveDate::from_ymd_opt(2018, 8, 16),
        };
        assert_eq!(
            serde_json::to_value(&s).unwrap(),
            json!({
                "studentId": 7,
                "studentFName": "Jason",
                "studentLName": "Freeman",
                "studentNumber": "N1694",
                "enrolDate": "2018-08-16"
            })
        );
    }

    #[test]
    fn missing_id_and_null_fields_deserialize_to_defaults() {
        let s: Student = serde_json::from_value(json!({
            "studentFName": "Emma",
            "studentLName": null,
            "studentNumber": "N5678",
            "enrolDate": ""
        }))
        .unwrap();
        assert_eq!(s.id, 0);
        assert_eq!(s.last_name, "");
        assert_eq!(s.enrol_date, None);
    }
}
