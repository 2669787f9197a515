use serde::Serialize;

use super::entities::{Assignment, AssignmentGraph};
use crate::models::{SerializeDepth, courses::responses::CourseView};

// 作业视图
//
// - Simple: id, title, due_date
// - Public/Full: + course（主课程，没有关联课程时为 null）
#[derive(Debug, Serialize)]
pub struct AssignmentView {
    pub id: i64,
    pub title: String,
    pub due_date: i64,
    // 外层 None 表示不输出该字段，内层 None 输出 null
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course: Option<Option<CourseView>>,
}

impl AssignmentView {
    pub fn simple(assignment: &Assignment) -> Self {
        Self {
            id: assignment.id,
            title: assignment.title.clone(),
            due_date: assignment.due_date,
            course: None,
        }
    }

    pub fn from_graph(graph: &AssignmentGraph, depth: SerializeDepth) -> Self {
        let mut view = Self::simple(&graph.assignment);
        if depth.includes_relations() {
            view.course = Some(graph.primary_course().map(CourseView::simple));
        }
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::courses::entities::Course;
    use serde_json::json;

    fn course(id: i64, code: &str) -> Course {
        Course {
            id,
            code: code.to_string(),
            name: format!("Course {code}"),
            created_at: chrono::DateTime::default(),
        }
    }

    fn graph(courses: Vec<Course>) -> AssignmentGraph {
        AssignmentGraph {
            assignment: Assignment {
                id: 7,
                title: "PA1".to_string(),
                due_date: 1_553_354_209,
            },
            courses,
        }
    }

    #[test]
    fn test_full_without_course_is_null() {
        let value = serde_json::to_value(AssignmentView::from_graph(
            &graph(vec![]),
            SerializeDepth::Full,
        ))
        .unwrap();
        assert_eq!(
            value,
            json!({ "id": 7, "title": "PA1", "due_date": 1_553_354_209, "course": null })
        );
    }

    #[test]
    fn test_full_uses_lowest_course_id() {
        let value = serde_json::to_value(AssignmentView::from_graph(
            &graph(vec![course(9, "CS 2110"), course(3, "CS 1998")]),
            SerializeDepth::Full,
        ))
        .unwrap();
        assert_eq!(
            value["course"],
            json!({ "id": 3, "code": "CS 1998", "name": "Course CS 1998" })
        );
    }

    #[test]
    fn test_simple_omits_course() {
        let value = serde_json::to_value(AssignmentView::from_graph(
            &graph(vec![course(1, "CS 1998")]),
            SerializeDepth::Simple,
        ))
        .unwrap();
        assert!(value.get("course").is_none());
    }
}
