use super::{delete_confirm, escape, field, form, input, layout};
use crate::model::{wire, Student};
use axum::response::Html;
use std::fmt::Write;

pub fn list(students: &[Student]) -> Html<String> {
    let mut body = String::from("<a href=\"/StudentPage/New\">Add a student</a>\n<ul>\n");
    for s in students {
        let _ = writeln!(
            body,
            "<li><a href=\"/StudentPage/Show/{}\">{} {}</a> ({})</li>",
            s.id,
            escape(&s.first_name),
            escape(&s.last_name),
            escape(&s.number)
        );
    }
    body.push_str("</ul>\n");
    layout("Students", &body)
}

pub fn show(s: &Student) -> Html<String> {
    let mut body = String::new();
    field(&mut body, "Student number", &s.number);
    field(&mut body, "First name", &s.first_name);
    field(&mut body, "Last name", &s.last_name);
    field(&mut body, "Enrolled", &wire::format_date(s.enrol_date));
    let _ = writeln!(
        body,
        "<a href=\"/StudentPage/Edit/{id}\">Edit</a> | <a href=\"/StudentPage/DeleteConfirm/{id}\">Delete</a> | <a href=\"/StudentPage/List\">Back to list</a>",
        id = s.id
    );
    layout(&format!("{} {}", s.first_name, s.last_name), &body)
}

fn fields(out: &mut String, s: &Student) {
    input(out, "First name", "StudentFName", "text", &s.first_name);
    input(out, "Last name", "StudentLName", "text", &s.last_name);
    input(out, "Student number", "StudentNumber", "text", &s.number);
    input(out, "Enrol date", "EnrolDate", "date", &wire::format_date(s.enrol_date));
}

pub fn new_form() -> Html<String> {
    let mut body = String::new();
    form(&mut body, "/StudentPage/Create", |out| fields(out, &Student::default()), "Add");
    layout("New Student", &body)
}

pub fn edit_form(s: &Student) -> Html<String> {
    let mut body = String::new();
    let action = format!("/StudentPage/Update/{}", s.id);
    form(&mut body, &action, |out| fields(out, s), "Save");
    layout("Edit Student", &body)
}

pub fn confirm_delete(s: &Student) -> Html<String> {
    delete_confirm(
        "Delete Student",
        &format!("Delete {} {} ({})?", s.first_name, s.last_name, s.number),
        &format!("/StudentPage/Delete/{}", s.id),
        &format!("/StudentPage/Show/{}", s.id),
    )
}
