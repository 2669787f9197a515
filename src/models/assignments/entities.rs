use crate::models::courses::entities::Course;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub id: i64,
    pub title: String,
    // 截止时间（Unix 时间戳）
    pub due_date: i64,
}

/// 作业及其所属课程
#[derive(Debug, Clone)]
pub struct AssignmentGraph {
    pub assignment: Assignment,
    // 按课程 ID 升序
    pub courses: Vec<Course>,
}

impl AssignmentGraph {
    /// 主课程：ID 最小的关联课程，没有关联时为 None
    pub fn primary_course(&self) -> Option<&Course> {
        self.courses.iter().min_by_key(|c| c.id)
    }
}
