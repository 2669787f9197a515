use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::UserService;
use crate::models::{
    ErrorResponse, SerializeDepth,
    users::{requests::UpdateUserRequest, responses::UserView},
};
use crate::utils::validate::validate_name;

pub async fn update_user(
    service: &UserService,
    user_id: i64,
    update_data: UpdateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_user_by_id(user_id).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("User not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }

    let Some(name) = update_data.name else {
        return Ok(ErrorResponse::bad_request("Incomplete user information"));
    };
    if let Err(e) = validate_name(&name) {
        return Ok(ErrorResponse::from_error(&e));
    }

    match storage.update_user_name(user_id, name.trim()).await {
        Ok(Some(_)) => {}
        Ok(None) => return Ok(ErrorResponse::not_found("User not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    }

    match storage.get_user_graph(user_id).await {
        Ok(Some(graph)) => {
            Ok(HttpResponse::Ok().json(UserView::from_graph(&graph, SerializeDepth::Full)))
        }
        Ok(None) => Ok(ErrorResponse::not_found("User not found")),
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
