use serde::Serialize;

use super::entities::{Course, CourseGraph};
use crate::models::{
    SerializeDepth, assignments::responses::AssignmentView, users::responses::UserView,
};

// 课程视图
//
// - Simple: id, code, name
// - Public/Full: + assignments, instructors, students（均为 Simple）
#[derive(Debug, Serialize)]
pub struct CourseView {
    pub id: i64,
    pub code: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Vec<AssignmentView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<UserView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub students: Option<Vec<UserView>>,
}

impl CourseView {
    pub fn simple(course: &Course) -> Self {
        Self {
            id: course.id,
            code: course.code.clone(),
            name: course.name.clone(),
            assignments: None,
            instructors: None,
            students: None,
        }
    }

    pub fn from_graph(graph: &CourseGraph, depth: SerializeDepth) -> Self {
        let mut view = Self::simple(&graph.course);

        if depth.includes_relations() {
            view.assignments = Some(
                graph
                    .assignments
                    .iter()
                    .map(AssignmentView::simple)
                    .collect(),
            );
            view.instructors = Some(graph.instructors.iter().map(UserView::simple).collect());
            view.students = Some(graph.students.iter().map(UserView::simple).collect());
        }

        view
    }
}

// 课程列表响应
#[derive(Debug, Serialize)]
pub struct CourseListResponse {
    pub courses: Vec<CourseView>,
}
