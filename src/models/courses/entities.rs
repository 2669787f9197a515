use crate::models::{assignments::entities::Assignment, users::entities::User};

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    // 课程ID
    pub id: i64,
    // 课程代码
    pub code: String,
    // 课程名称
    pub name: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 课程及其关联数据
#[derive(Debug, Clone)]
pub struct CourseGraph {
    pub course: Course,
    pub assignments: Vec<Assignment>,
    pub instructors: Vec<User>,
    pub students: Vec<User>,
}

// 课程成员角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseRole {
    Instructor, // 教师
    Student,    // 学生
}

impl CourseRole {
    pub const INSTRUCTOR: &'static str = "instructor";
    pub const STUDENT: &'static str = "student";
}

impl std::fmt::Display for CourseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseRole::Instructor => write!(f, "{}", CourseRole::INSTRUCTOR),
            CourseRole::Student => write!(f, "{}", CourseRole::STUDENT),
        }
    }
}

impl std::str::FromStr for CourseRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CourseRole::INSTRUCTOR => Ok(CourseRole::Instructor),
            CourseRole::STUDENT => Ok(CourseRole::Student),
            _ => Err(format!(
                "Invalid course role: '{s}'. Supported roles: instructor, student"
            )),
        }
    }
}
