use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CourseService;
use crate::models::{
    ErrorResponse, SerializeDepth,
    courses::responses::{CourseListResponse, CourseView},
};

pub async fn list_courses(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_course_graphs().await {
        Ok(graphs) => Ok(HttpResponse::Ok().json(CourseListResponse {
            courses: graphs
                .iter()
                .map(|g| CourseView::from_graph(g, SerializeDepth::Full))
                .collect(),
        })),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
