use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建用户表（课程与市场共用）
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Name).string().not_null())
                    .col(
                        ColumnDef::new(Users::Netid)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(Users::Rating)
                            .double()
                            .not_null()
                            .default(5.0),
                    )
                    .col(ColumnDef::new(Users::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建课程表
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Courses::Code).string().not_null())
                    .col(ColumnDef::new(Courses::Name).string().not_null())
                    .col(ColumnDef::new(Courses::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(
                        ColumnDef::new(Assignments::DueDate)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程-教师关联表
        manager
            .create_table(
                Table::create()
                    .table(CourseInstructors::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseInstructors::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseInstructors::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseInstructors::CourseId)
                            .col(CourseInstructors::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseInstructors::Table, CourseInstructors::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseInstructors::Table, CourseInstructors::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程-学生关联表
        manager
            .create_table(
                Table::create()
                    .table(CourseStudents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseStudents::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseStudents::UserId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseStudents::CourseId)
                            .col(CourseStudents::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseStudents::Table, CourseStudents::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseStudents::Table, CourseStudents::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 课程-作业关联表
        manager
            .create_table(
                Table::create()
                    .table(CourseAssignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CourseAssignments::CourseId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CourseAssignments::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CourseAssignments::CourseId)
                            .col(CourseAssignments::AssignmentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseAssignments::Table, CourseAssignments::CourseId)
                            .to(Courses::Table, Courses::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(CourseAssignments::Table, CourseAssignments::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 索引：按用户反查课程
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_instructors_user_id")
                    .table(CourseInstructors::Table)
                    .col(CourseInstructors::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_students_user_id")
                    .table(CourseStudents::Table)
                    .col(CourseStudents::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_course_assignments_assignment_id")
                    .table(CourseAssignments::Table)
                    .col(CourseAssignments::AssignmentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 按照创建的相反顺序删除
        manager
            .drop_table(Table::drop().table(CourseAssignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseStudents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CourseInstructors::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
pub(crate) enum Users {
    #[sea_orm(iden = "users")]
    Table,
    Id,
    Name,
    Netid,
    Rating,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Courses {
    #[sea_orm(iden = "courses")]
    Table,
    Id,
    Code,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    Title,
    DueDate,
}

#[derive(DeriveIden)]
enum CourseInstructors {
    #[sea_orm(iden = "course_instructors")]
    Table,
    CourseId,
    UserId,
}

#[derive(DeriveIden)]
enum CourseStudents {
    #[sea_orm(iden = "course_students")]
    Table,
    CourseId,
    UserId,
}

#[derive(DeriveIden)]
enum CourseAssignments {
    #[sea_orm(iden = "course_assignments")]
    Table,
    CourseId,
    AssignmentId,
}
