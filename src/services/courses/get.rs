use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{ErrorResponse, SerializeDepth, courses::responses::CourseView};

pub async fn get_course(
    service: &CourseService,
    course_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_graph(course_id).await {
        Ok(Some(graph)) => {
            Ok(HttpResponse::Ok().json(CourseView::from_graph(&graph, SerializeDepth::Full)))
        }
        Ok(None) => Ok(ErrorResponse::not_found("Course not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
