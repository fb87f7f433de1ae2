//! Attach each teacher's courses, grouped by the courses' teacher id.

use crate::model::{Course, Teacher};
use std::collections::HashMap;

/// Courses grouped by teacher id. Within a group, courses keep the order they were listed in.
#[derive(Debug, Default)]
pub struct CoursesByTeacher {
    groups: HashMap<i32, Vec<Course>>,
}

impl CoursesByTeacher {
    pub fn group(courses: Vec<Course>) -> Self {
        let mut groups: HashMap<i32, Vec<Course>> = HashMap::new();
        for course in courses {
            groups.entry(course.teacher_id).or_default().push(course);
        }
        CoursesByTeacher { groups }
    }

    pub fn courses_for(&self, teacher_id: i32) -> Vec<Course> {
        self.groups.get(&teacher_id).cloned().unwrap_or_default()
    }

    /// Replace the teacher's course list with the matching group (empty if none).
    pub fn attach(&self, teacher: &mut Teacher) {
        teacher.courses = self.courses_for(teacher.id);
    }
}

pub fn with_courses(mut teachers: Vec<Teacher>, courses: Vec<Course>) -> Vec<Teacher> {
    let index = CoursesByTeacher::group(courses);
    for teacher in &mut teachers {
        index.attach(teacher);
    }
    teachers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: i32, teacher_id: i32) -> Course {
        Course {
            id,
            teacher_id,
            code: format!("http51{:02}", id),
            ..Course::default()
        }
    }

    fn teacher(id: i32) -> Teacher {
        Teacher {
            id,
            ..Teacher::default()
        }
    }

    #[test]
    fn each_teacher_gets_exactly_its_courses_in_list_order() {
        let courses = vec![course(5, 2), course(1, 1), course(7, 2), course(3, 9), course(2, 1)];
        let teachers = with_courses(vec![teacher(1), teacher(2), teacher(3)], courses);

        let ids = |t: &Teacher| t.courses.iter().map(|c| c.id).collect::<Vec<_>>();
        assert_eq!(ids(&teachers[0]), vec![1, 2]);
        assert_eq!(ids(&teachers[1]), vec![5, 7]);
        assert!(teachers[2].courses.is_empty());
    }

    #[test]
    fn stale_course_lists_are_replaced() {
        let mut t = teacher(4);
        t.courses = vec![course(1, 1)];
        CoursesByTeacher::group(vec![course(8, 4)]).attach(&mut t);
        assert_eq!(t.courses, vec![course(8, 4)]);
    }
}
