use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{ErrorResponse, SerializeDepth, courses::responses::CourseView};

pub async fn delete_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 删除前先取完整视图用于响应
    let graph = match storage.get_course_graph(course_id).await {
        Ok(Some(graph)) => graph,
        Ok(None) => return Ok(ErrorResponse::not_found("Course not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    };

    match storage.delete_course(course_id).await {
        Ok(true) => {
            info!("课程已删除: {}", course_id);
            Ok(HttpResponse::Ok().json(CourseView::from_graph(&graph, SerializeDepth::Full)))
        }
        Ok(false) => Ok(ErrorResponse::not_found("Course not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
