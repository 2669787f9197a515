use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::debug;

use super::CourseService;
use crate::models::{
    ErrorResponse, SerializeDepth,
    courses::{entities::CourseRole, requests::AddCourseMemberRequest, responses::CourseView},
};

pub async fn add_member(
    service: &CourseService,
    course_id: i64,
    member_data: AddCourseMemberRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("Course not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }

    let (Some(user_id), Some(role)) = (member_data.user_id, member_data.role) else {
        return Ok(ErrorResponse::bad_request("Incomplete member information"));
    };
    let role = match role.parse::<CourseRole>() {
        Ok(role) => role,
        Err(msg) => return Ok(ErrorResponse::bad_request(msg)),
    };

    match storage.get_user_by_id(user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("User not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }

    match storage.add_course_member(course_id, user_id, role).await {
        Ok(true) => debug!("用户 {} 以 {} 身份加入课程 {}", user_id, role, course_id),
        Ok(false) => debug!("用户 {} 已是课程 {} 的 {}", user_id, course_id, role),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }

    match storage.get_course_graph(course_id).await {
        Ok(Some(graph)) => {
            Ok(HttpResponse::Ok().json(CourseView::from_graph(&graph, SerializeDepth::Full)))
        }
        Ok(None) => Ok(ErrorResponse::not_found("Course not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
