use super::SeaOrmStorage;
use crate::entity::{
    assignments::{ActiveModel, Entity as Assignments},
    course_assignments,
};
use crate::errors::{CampusError, Result};
use crate::models::assignments::entities::{Assignment, AssignmentGraph};
use sea_orm::{ActiveModelTrait, ColumnTrait, DbErr, EntityTrait, QueryFilter, Set, TransactionTrait};

impl SeaOrmStorage {
    /// 在课程下创建作业
    ///
    /// 作业与课程关联在同一事务中写入。
    pub async fn create_assignment_for_course_impl(
        &self,
        course_id: i64,
        title: &str,
        due_date: i64,
    ) -> Result<Assignment> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| CampusError::database_operation(format!("开启事务失败: {e}")))?;

        let created: std::result::Result<_, DbErr> = async {
            let assignment = ActiveModel {
                title: Set(title.to_string()),
                due_date: Set(due_date),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            course_assignments::ActiveModel {
                course_id: Set(course_id),
                assignment_id: Set(assignment.id),
            }
            .insert(&txn)
            .await?;

            Ok(assignment)
        }
        .await;

        match created {
            Ok(assignment) => {
                txn.commit()
                    .await
                    .map_err(|e| CampusError::database_operation(format!("提交事务失败: {e}")))?;
                Ok(assignment.into_assignment())
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(CampusError::database_operation(format!("创建作业失败: {e}")))
            }
        }
    }

    /// 获取作业及其所属课程
    pub async fn get_assignment_graph_impl(&self, id: i64) -> Result<Option<AssignmentGraph>> {
        let Some(assignment) = Assignments::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询作业失败: {e}")))?
        else {
            return Ok(None);
        };

        let course_ids: Vec<i64> = course_assignments::Entity::find()
            .filter(course_assignments::Column::AssignmentId.eq(id))
            .all(&self.db)
            .await
            .map_err(|e| CampusError::database_operation(format!("查询作业课程失败: {e}")))?
            .into_iter()
            .map(|l| l.course_id)
            .collect();

        Ok(Some(AssignmentGraph {
            assignment: assignment.into_assignment(),
            courses: self.load_courses(course_ids).await?,
        }))
    }
}
