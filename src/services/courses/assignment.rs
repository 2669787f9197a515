use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::CourseService;
use crate::models::{
    ErrorResponse, SerializeDepth,
    assignments::{requests::CreateAssignmentRequest, responses::AssignmentView},
};

pub async fn create_assignment(
    service: &CourseService,
    course_id: i64,
    assignment_data: CreateAssignmentRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(title), Some(due_date)) = (assignment_data.title, assignment_data.due_date) else {
        return Ok(ErrorResponse::bad_request("Incomplete assignment information"));
    };
    if title.trim().is_empty() {
        return Ok(ErrorResponse::bad_request("Incomplete assignment information"));
    }

    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("Course not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }

    let assignment = match storage
        .create_assignment_for_course(course_id, &title, due_date)
        .await
    {
        Ok(assignment) => assignment,
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    };
    info!("作业已创建: {} (课程 {})", assignment.id, course_id);

    match storage.get_assignment_graph(assignment.id).await {
        Ok(Some(graph)) => Ok(HttpResponse::Created()
            .json(AssignmentView::from_graph(&graph, SerializeDepth::Full))),
        Ok(None) => Ok(ErrorResponse::not_found("Assignment not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
