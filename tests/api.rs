use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use school_records::{app, AppState, Settings};
use serde_json::{json, Value};
use std::collections::HashMap;
use tower::ServiceExt;

fn router() -> Router {
    let settings = Settings::from_vars(&HashMap::new()).unwrap();
    app(AppState::in_memory(), &settings)
}

async fn call(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut req = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            req = req.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = router.clone().oneshot(req.body(body).unwrap()).await.unwrap();
    let status = res.status();
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn emma() -> Value {
    json!({
        "studentFName": "Emma",
        "studentLName": "Johnson",
        "studentNumber": "N5678",
        "enrolDate": "2023-01-09"
    })
}

#[tokio::test]
async fn student_round_trip_then_delete() {
    let router = router();

    let (status, id) = call(&router, Method::POST, "/api/Student/AddStudent", Some(emma())).await;
    assert_eq!(status, StatusCode::OK);
    let id = id.as_i64().unwrap();
    assert!(id > 0);

    let (status, found) = call(&router, Method::GET, &format!("/api/Student/FindStudent/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    let mut expected = emma();
    expected["studentId"] = json!(id);
    assert_eq!(found, expected);

    let (status, msg) = call(&router, Method::DELETE, &format!("/api/Student/DeleteStudent/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        msg,
        json!(format!("The student with ID {id} has been successfully deleted from the database."))
    );

    let (status, body) = call(&router, Method::GET, &format!("/api/Student/FindStudent/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["message"], format!("No student found with ID {id}."));

    let (status, msg) = call(&router, Method::DELETE, &format!("/api/Student/DeleteStudent/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(msg, json!(format!("No student found with ID {id}.")));
}

#[tokio::test]
async fn malformed_student_number_is_rejected_before_anything_is_written() {
    let router = router();
    let mut bad = emma();
    bad["studentNumber"] = json!("X12");

    let (status, body) = call(&router, Method::POST, "/api/Student/AddStudent", Some(bad)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["code"], "validation_error");
    assert_eq!(
        body["error"]["message"],
        "Student number should start with 'N' followed by 4 digits. Eg: N1234"
    );

    let (_, all) = call(&router, Method::GET, "/api/Student/ListStudents", None).await;
    assert_eq!(all, json!([]));
}

#[tokio::test]
async fn duplicate_student_number_is_rejected() {
    let router = router();
    call(&router, Method::POST, "/api/Student/AddStudent", Some(emma())).await;
    let (status, body) = call(&router, Method::POST, "/api/Student/AddStudent", Some(emma())).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        body["error"]["message"],
        "This student number has already been taken by the student"
    );
}

#[tokio::test]
async fn student_update_is_reflected_by_find() {
    let router = router();
    let (_, id) = call(&router, Method::POST, "/api/Student/AddStudent", Some(emma())).await;
    let id = id.as_i64().unwrap();
    let edited = json!({
        "studentFName": "Em",
        "studentLName": "J",
        "studentNumber": "N5679",
        "enrolDate": "2022-02-02"
    });

    let (status, updated) = call(&router, Method::PUT, &format!("/api/Student/UpdateStudent/{id}"), Some(edited.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (_, found) = call(&router, Method::GET, &format!("/api/Student/FindStudent/{id}"), None).await;

    let mut expected = edited;
    expected["studentId"] = json!(id);
    assert_eq!(updated, expected);
    assert_eq!(found, expected);
}

#[tokio::test]
async fn teacher_update_is_reflected_by_find() {
    let router = router();
    let original = json!({
        "teacherFName": "Alexander",
        "teacherLName": "Bennett",
        "employeeNumber": "T378",
        "hireDate": "2016-08-05",
        "salary": 55.3
    });
    let (_, id) = call(&router, Method::POST, "/api/Teacher/AddTeacher", Some(original)).await;
    let id = id.as_i64().unwrap();
    let edited = json!({
        "teacherFName": "Alex",
        "teacherLName": "Bennet",
        "employeeNumber": "T400",
        "hireDate": "2017/01/02 09:30:00",
        "salary": 61.5
    });

    let (status, updated) = call(&router, Method::PUT, &format!("/api/Teacher/UpdateTeacher/{id}"), Some(edited.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let (_, found) = call(&router, Method::GET, &format!("/api/Teacher/FindTeacher/{id}"), None).await;

    let mut expected = edited;
    expected["teacherId"] = json!(id);
    expected["coursesByTeacher"] = json!([]);
    assert_eq!(updated, expected);
    assert_eq!(found, expected);
}

#[tokio::test]
async fn teacher_section_lists_all_courses() {
    let router = router();
    let (_, empty) = call(&router, Method::GET, "/api/Teacher/ListCourses", None).await;
    assert_eq!(empty, json!([]));

    for (teacher, name) in [(1, "Web Application Development"), (2, "Project Management")] {
        let course = json!({
            "courseCode": "http5101",
            "teacherId": teacher,
            "startDate": "2018-09-04",
            "finishDate": "2018-12-14",
            "courseName": name
        });
        call(&router, Method::POST, "/api/Course/AddCourse", Some(course)).await;
    }

    let (status, listed) = call(&router, Method::GET, "/api/Teacher/ListCourses", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, from_courses) = call(&router, Method::GET, "/api/Course/ListCourses", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);
    assert_eq!(listed, from_courses);
}

#[tokio::test]
async fn update_of_a_missing_student_is_not_found() {
    let router = router();
    let (status, _) = call(&router, Method::PUT, "/api/Student/UpdateStudent/99", Some(emma())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn teachers_carry_their_courses() {
    let router = router();
    let teacher = json!({
        "teacherFName": "Alexander",
        "teacherLName": "Bennett",
        "employeeNumber": "T378",
        "hireDate": "2016-08-05",
        "salary": 55.3
    });
    let (_, tid) = call(&router, Method::POST, "/api/Teacher/AddTeacher", Some(teacher.clone())).await;
    let (_, other) = call(&router, Method::POST, "/api/Teacher/AddTeacher", Some(teacher)).await;
    let tid = tid.as_i64().unwrap();

    for name in ["Web Application Development", "Web Programming"] {
        let course = json!({
            "courseCode": "http5101",
            "teacherId": tid,
            "startDate": "2018-09-04",
            "finishDate": "2018-12-14",
            "courseName": name
        });
        let (status, _) = call(&router, Method::POST, "/api/Course/AddCourse", Some(course)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, found) = call(&router, Method::GET, &format!("/api/Teacher/FindTeacher/{tid}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["hireDate"], "2016/08/05 00:00:00");
    assert_eq!(found["salary"], json!(55.3));
    let courses = found["coursesByTeacher"].as_array().unwrap();
    assert_eq!(courses.len(), 2);
    assert!(courses.iter().all(|c| c["teacherId"] == json!(tid)));

    let (_, all) = call(&router, Method::GET, "/api/Teacher/ListTeachers", None).await;
    let without = all
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["teacherId"] == other)
        .unwrap();
    assert_eq!(without["coursesByTeacher"], json!([]));
}

#[tokio::test]
async fn course_with_future_start_date_is_rejected() {
    let router = router();
    let course = json!({
        "courseCode": "http5999",
        "teacherId": 1,
        "startDate": "2999-01-01",
        "finishDate": "",
        "courseName": "Time Travel"
    });
    let (status, body) = call(&router, Method::POST, "/api/Course/AddCourse", Some(course)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["error"]["message"], "Course start date cannot be in future.");
}

#[tokio::test]
async fn teacher_search_filters_by_hire_date() {
    let router = router();
    for (name, hired) in [("Early", "2014-06-10"), ("Late", "2016-08-05")] {
        let teacher = json!({ "teacherFName": name, "teacherLName": "T", "hireDate": hired, "salary": 50.0 });
        call(&router, Method::POST, "/api/Teacher/AddTeacher", Some(teacher)).await;
    }

    let (status, found) = call(
        &router,
        Method::GET,
        "/api/Teacher/SearchTeachers?startDate=2015-01-01&endDate=2017-01-01",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["startDate"], "2015-01-01");
    let names: Vec<_> = found["teachers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["teacherFName"].clone())
        .collect();
    assert_eq!(names, vec![json!("Late")]);

    let (status, _) = call(&router, Method::GET, "/api/Teacher/SearchTeachers?startDate=soon", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn probes_and_api_document_are_served() {
    let router = router();
    let (status, health) = call(&router, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    let (status, ready) = call(&router, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ready["database"], "in-memory");

    let (status, doc) = call(&router, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/Teacher/ListTeachers"].is_object());
}
