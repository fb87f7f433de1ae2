use super::{delete_confirm, escape, field, form, input, layout};
use crate::model::{wire, Teacher, TeacherSearch};
use axum::response::Html;
use std::fmt::Write;

fn search_form(out: &mut String, search: &TeacherSearch) {
    out.push_str("<form method=\"get\" action=\"/TeacherPage/List\">\n");
    input(out, "Hired from", "startDate", "date", &wire::format_date(search.start_date));
    input(out, "Hired until", "endDate", "date", &wire::format_date(search.end_date));
    out.push_str("<button type=\"submit\">Search</button>\n</form>\n");
}

/// Teacher list, narrowed by hire date when the search carries bounds.
pub fn list(search: &TeacherSearch) -> Html<String> {
    let mut body = String::from("<a href=\"/TeacherPage/New\">Add a teacher</a>\n");
    search_form(&mut body, search);
    body.push_str("<ul>\n");
    for t in &search.teachers {
        let _ = writeln!(
            body,
            "<li><a href=\"/TeacherPage/Show/{}\">{} {}</a> ({}, {} courses)</li>",
            t.id,
            escape(&t.first_name),
            escape(&t.last_name),
            escape(&t.employee_number),
            t.courses.len()
        );
    }
    body.push_str("</ul>\n");
    layout("Teachers", &body)
}

pub fn show(t: &Teacher) -> Html<String> {
    let mut body = String::new();
    field(&mut body, "Employee number", &t.employee_number);
    field(&mut body, "First name", &t.first_name);
    field(&mut body, "Last name", &t.last_name);
    field(&mut body, "Hired", &wire::format_timestamp(t.hire_date));
    field(&mut body, "Salary", &t.salary.to_string());
    body.push_str("<h2>Courses</h2>\n");
    if t.courses.is_empty() {
        body.push_str("<p>No courses.</p>\n");
    } else {
        body.push_str("<ul>\n");
        for c in &t.courses {
            let _ = writeln!(
                body,
                "<li><a href=\"/CoursePage/Show/{}\">{}</a> {}</li>",
                c.id,
                escape(&c.code),
                escape(&c.name)
            );
        }
        body.push_str("</ul>\n");
    }
    let _ = writeln!(
        body,
        "<a href=\"/TeacherPage/Edit/{id}\">Edit</a> | <a href=\"/TeacherPage/DeleteConfirm/{id}\">Delete</a> | <a href=\"/TeacherPage/List\">Back to list</a>",
        id = t.id
    );
    layout(&format!("{} {}", t.first_name, t.last_name), &body)
}

fn fields(out: &mut String, t: &Teacher) {
    input(out, "First name", "TeacherFName", "text", &t.first_name);
    input(out, "Last name", "TeacherLName", "text", &t.last_name);
    input(out, "Employee number", "EmployeeNumber", "text", &t.employee_number);
    let hired = wire::format_datetime_input(t.hire_date);
    input(out, "Hire date", "HireDate", "datetime-local", &hired);
    input(out, "Salary", "Salary", "text", &t.salary.to_string());
}

pub fn new_form() -> Html<String> {
    let mut body = String::new();
    form(&mut body, "/TeacherPage/Create", |out| fields(out, &Teacher::default()), "Add");
    layout("New Teacher", &body)
}

pub fn edit_form(t: &Teacher) -> Html<String> {
    let mut body = String::new();
    let action = format!("/TeacherPage/Update/{}", t.id);
    form(&mut body, &action, |out| fields(out, t), "Save");
    layout("Edit Teacher", &body)
}

pub fn confirm_delete(t: &Teacher) -> Html<String> {
    delete_confirm(
        "Delete Teacher",
        &format!("Delete {} {} ({})?", t.first_name, t.last_name, t.employee_number),
        &format!("/TeacherPage/Delete/{}", t.id),
        &format!("/TeacherPage/Show/{}", t.id),
    )
}
