use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::{
    assignments::requests::CreateAssignmentRequest,
    courses::requests::{AddCourseMemberRequest, CreateCourseRequest},
};
use crate::services::CourseService;

// 懒加载的全局 CourseService 实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);

// HTTP处理程序
pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req).await
}

pub async fn create_course(
    req: HttpRequest,
    course_data: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_course(course_data.into_inner(), &req)
        .await
}

pub async fn get_course(req: HttpRequest, course_id: web::Path<i64>) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.get_course(course_id.into_inner(), &req).await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(course_id.into_inner(), &req).await
}

pub async fn add_member(
    req: HttpRequest,
    course_id: web::Path<i64>,
    member_data: web::Json<AddCourseMemberRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .add_member(course_id.into_inner(), member_data.into_inner(), &req)
        .await
}

pub async fn create_assignment(
    req: HttpRequest,
    course_id: web::Path<i64>,
    assignment_data: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_assignment(course_id.into_inner(), assignment_data.into_inner(), &req)
        .await
}

// 配置路由
pub fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/courses")
            .route("", web::get().to(list_courses))
            .route("", web::post().to(create_course))
            .route("/{id}", web::get().to(get_course))
            .route("/{id}", web::delete().to(delete_course))
            .route("/{id}/add", web::post().to(add_member))
            .route("/{id}/assignment", web::post().to(create_assignment)),
    );
}
