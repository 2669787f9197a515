use super::SeaOrmStorage;
use crate::entity::{
    assignments, course_assignments, course_instructors, course_students,
    courses::{ActiveModel, Column, Entity as Courses, Model as CourseModel},
};
use crate::errors::{CampusError, Result};
use crate::models::courses::entities::{Course, CourseGraph, CourseRole};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, code: &str, name: &str) -> Result<Course> {
        let model = ActiveModel {
            code: Set(code.to_string()),
            name: Set(name.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 列出所有课程及其成员与作业
    pub async fn list_course_graphs_impl(&self) -> Result<Vec<CourseGraph>> {
        let courses = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程列表失败: {e}")))?;

        self.assemble_course_graphs(courses).await
    }

    /// 获取单个课程及其成员与作业
    pub async fn get_course_graph_impl(&self, id: i64) -> Result<Option<CourseGraph>> {
        let Some(course) = Courses::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程失败: {e}")))?
        else {
            return Ok(None);
        };

        Ok(self.assemble_course_graphs(vec![course]).await?.pop())
    }

    /// 删除课程
    ///
    /// 只移除关联关系，作业本身保留。
    pub async fn delete_course_impl(&self, id: i64) -> Result<bool> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CampusError::database_operation(format!("开启事务失败: {e}")))?;

        let deleted: std::result::Result<u64, DbErr> = async {
            course_instructors::Entity::delete_many()
                .filter(course_instructors::Column::CourseId.eq(id))
                .exec(&txn)
                .await?;
            course_students::Entity::delete_many()
                .filter(course_students::Column::CourseId.eq(id))
                .exec(&txn)
                .await?;
            course_assignments::Entity::delete_many()
                .filter(course_assignments::Column::CourseId.eq(id))
                .exec(&txn)
                .await?;

            let result = Courses::delete_by_id(id).exec(&txn).await?;
            Ok(result.rows_affected)
        }
        .await;

        match deleted {
            Ok(rows) => {
                txn.commit()
                    .await
                    .map_err(|e| CampusError::database_operation(format!("提交事务失败: {e}")))?;
                Ok(rows > 0)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(CampusError::database_operation(format!("删除课程失败: {e}")))
            }
        }
    }

    /// 添加课程成员
    ///
    /// 成员关系已存在时不重复插入，返回 false。
    pub async fn add_course_member_impl(
        &self,
        course_id: i64,
        user_id: i64,
        role: CourseRole,
    ) -> Result<bool> {
        let exists = match role {
            CourseRole::Instructor => course_instructors::Entity::find_by_id((course_id, user_id))
                .one(&self.db)
                .await
                .map(|m| m.is_some()),
            CourseRole::Student => course_students::Entity::find_by_id((course_id, user_id))
                .one(&self.db)
                .await
                .map(|m| m.is_some()),
        }
        .map_err(|e| CampusError::database_operation(format!("查询课程成员失败: {e}")))?;

        if exists {
            return Ok(false);
        }

        let inserted = match role {
            CourseRole::Instructor => course_instructors::ActiveModel {
                course_id: Set(course_id),
                user_id: Set(user_id),
            }
            .insert(&self.db)
            .await
            .map(|_| ()),
            CourseRole::Student => course_students::ActiveModel {
                course_id: Set(course_id),
                user_id: Set(user_id),
            }
            .insert(&self.db)
            .await
            .map(|_| ()),
        };

        inserted
            .map_err(|e| CampusError::database_operation(format!("添加课程成员失败: {e}")))?;

        Ok(true)
    }

    /// 批量加载课程，按 ID 升序
    pub(super) async fn load_courses(&self, ids: Vec<i64>) -> Result<Vec<Course>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let courses = Courses::find()
            .filter(Column::Id.is_in(ids))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("批量查询课程失败: {e}")))?;

        Ok(courses.into_iter().map(|m| m.into_course()).collect())
    }

    /// 为一组课程批量装配成员与作业
    async fn assemble_course_graphs(&self, courses: Vec<CourseModel>) -> Result<Vec<CourseGraph>> {
        if courses.is_empty() {
            return Ok(Vec::new());
        }

        let course_ids: Vec<i64> = courses.iter().map(|c| c.id).collect();

        let instructor_links = course_instructors::Entity::find()
            .filter(course_instructors::Column::CourseId.is_in(course_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程教师失败: {e}")))?;
        let student_links = course_students::Entity::find()
            .filter(course_students::Column::CourseId.is_in(course_ids.clone()))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程学生失败: {e}")))?;
        let assignment_links = course_assignments::Entity::find()
            .filter(course_assignments::Column::CourseId.is_in(course_ids))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询课程作业失败: {e}")))?;

        let mut user_ids: Vec<i64> = instructor_links
            .iter()
            .map(|l| l.user_id)
            .chain(student_links.iter().map(|l| l.user_id))
            .collect();
        user_ids.sort_unstable();
        user_ids.dedup();
        let users = self.load_user_map(user_ids).await?;

        let mut assignment_ids: Vec<i64> =
            assignment_links.iter().map(|l| l.assignment_id).collect();
        assignment_ids.sort_unstable();
        assignment_ids.dedup();
        let assignments: HashMap<i64, _> = if assignment_ids.is_empty() {
            HashMap::new()
        } else {
            assignments::Entity::find()
                .filter(assignments::Column::Id.is_in(assignment_ids))
                .all(&self.db)
                .await
                .map_err(|e| CampusError::database_operation(format!("批量查询作业失败: {e}")))?
                .into_iter()
                .map(|m| (m.id, m.into_assignment()))
                .collect()
        };

        let graphs = courses
            .into_iter()
            .map(|course| {
                let mut instructors: Vec<_> = instructor_links
                    .iter()
                    .filter(|l| l.course_id == course.id)
                    .filter_map(|l| users.get(&l.user_id).cloned())
                    .collect();
                instructors.sort_by_key(|u| u.id);

                let mut students: Vec<_> = student_links
                    .iter()
                    .filter(|l| l.course_id == course.id)
                    .filter_map(|l| users.get(&l.user_id).cloned())
                    .collect();
                students.sort_by_key(|u| u.id);

                let mut course_assignments: Vec<_> = assignment_links
                    .iter()
                    .filter(|l| l.course_id == course.id)
                    .filter_map(|l| assignments.get(&l.assignment_id).cloned())
                    .collect();
                course_assignments.sort_by_key(|a| a.id);

                CourseGraph {
                    course: course.into_course(),
                    assignments: course_assignments,
                    instructors,
                    students,
                }
            })
            .collect();

        Ok(graphs)
    }
}
