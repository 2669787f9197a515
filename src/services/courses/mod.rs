pub mod assignment;
pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod member;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::{
    assignments::requests::CreateAssignmentRequest,
    courses::requests::{AddCourseMemberRequest, CreateCourseRequest},
};
use crate::storage::Storage;

pub struct CourseService {
    storage: Option<Arc<dyn Storage>>,
}

impl CourseService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取全部课程
    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_courses(self, request).await
    }

    // 创建课程
    pub async fn create_course(
        &self,
        course_data: CreateCourseRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_course(self, course_data, request).await
    }

    // 根据ID获取课程
    pub async fn get_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_course(self, course_id, request).await
    }

    // 删除课程
    pub async fn delete_course(
        &self,
        course_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_course(self, course_id, request).await
    }

    // 添加课程成员（教师或学生）
    pub async fn add_member(
        &self,
        course_id: i64,
        member_data: AddCourseMemberRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        member::add_member(self, course_id, member_data, request).await
    }

    // 在课程下创建作业
    pub async fn create_assignment(
        &self,
        course_id: i64,
        assignment_data: CreateAssignmentRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        assignment::create_assignment(self, course_id, assignment_data, request).await
    }
}
