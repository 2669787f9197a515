use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{
    ErrorResponse, SerializeDepth,
    courses::{entities::CourseGraph, requests::CreateCourseRequest, responses::CourseView},
};

pub async fn create_course(
    service: &CourseService,
    course_data: CreateCourseRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(code), Some(name)) = (course_data.code, course_data.name) else {
        return Ok(ErrorResponse::bad_request("Incomplete course information"));
    };
    if code.trim().is_empty() || name.trim().is_empty() {
        return Ok(ErrorResponse::bad_request("Incomplete course information"));
    }

    let storage = service.get_storage(request);

    match storage.create_course(&code, &name).await {
        Ok(course) => {
            info!("课程已创建: {} ({})", course.code, course.id);
            // 新课程没有成员与作业
            let graph = CourseGraph {
                course,
                assignments: Vec::new(),
                instructors: Vec::new(),
                students: Vec::new(),
            };
            Ok(HttpResponse::Created().json(CourseView::from_graph(&graph, SerializeDepth::Full)))
        }
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
