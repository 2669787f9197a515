//! 作业实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assignments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    pub due_date: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::course_assignments::Entity")]
    CourseAssignments,
}

impl Related<super::course_assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CourseAssignments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_assignment(self) -> crate::models::assignments::entities::Assignment {
        crate::models::assignments::entities::Assignment {
            id: self.id,
            title: self.title,
            due_date: self.due_date,
        }
    }
}
