use super::{delete_confirm, escape, field, form, input, layout};
use crate::model::{wire, Course};
use axum::response::Html;
use std::fmt::Write;

pub fn list(courses: &[Course]) -> Html<String> {
    let mut body = String::from("<a href=\"/CoursePage/New\">Add a course</a>\n<ul>\n");
    for c in courses {
        let _ = writeln!(
            body,
            "<li><a href=\"/CoursePage/Show/{}\">{}</a> {}</li>",
            c.id,
            escape(&c.code),
            escape(&c.name)
        );
    }
    body.push_str("</ul>\n");
    layout("Courses", &body)
}

pub fn show(c: &Course) -> Html<String> {
    let mut body = String::new();
    field(&mut body, "Code", &c.code);
    field(&mut body, "Name", &c.name);
    let _ = writeln!(
        body,
        "<p><strong>Teacher:</strong> <a href=\"/TeacherPage/Show/{id}\">{id}</a></p>",
        id = c.teacher_id
    );
    field(&mut body, "Starts", &wire::format_date(c.start_date));
    field(&mut body, "Finishes", &wire::format_date(c.finish_date));
    let _ = writeln!(
        body,
        "<a href=\"/CoursePage/Edit/{id}\">Edit</a> | <a href=\"/CoursePage/DeleteConfirm/{id}\">Delete</a> | <a href=\"/CoursePage/List\">Back to list</a>",
        id = c.id
    );
    layout(&c.name, &body)
}

fn fields(out: &mut String, c: &Course) {
    input(out, "Course code", "CourseCode", "text", &c.code);
    input(out, "Course name", "CourseName", "text", &c.name);
    let teacher = if c.teacher_id == 0 { String::new() } else { c.teacher_id.to_string() };
    input(out, "Teacher id", "TeacherId", "number", &teacher);
    input(out, "Start date", "StartDate", "date", &wire::format_date(c.start_date));
    input(out, "Finish date", "FinishDate", "date", &wire::format_date(c.finish_date));
}

pub fn new_form() -> Html<String> {
    let mut body = String::new();
    form(&mut body, "/CoursePage/Create", |out| fields(out, &Course::default()), "Add");
    layout("New Course", &body)
}

pub fn edit_form(c: &Course) -> Html<String> {
    let mut body = String::new();
    let action = format!("/CoursePage/Update/{}", c.id);
    form(&mut body, &action, |out| fields(out, c), "Save");
    layout("Edit Course", &body)
}

pub fn confirm_delete(c: &Course) -> Html<String> {
    delete_confirm(
        "Delete Course",
        &format!("Delete {} {}?", c.code, c.name),
        &format!("/CoursePage/Delete/{}", c.id),
        &format!("/CoursePage/Show/{}", c.id),
    )
}
