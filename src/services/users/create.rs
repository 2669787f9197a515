use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::models::{
    ErrorResponse, SerializeDepth,
    users::{entities::UserGraph, requests::CreateUserRequest, responses::UserView},
};
use crate::utils::validate::{validate_name, validate_netid};

pub async fn create_user(
    service: &UserService,
    user_data: CreateUserRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(name), Some(netid)) = (user_data.name, user_data.netid) else {
        return Ok(ErrorResponse::bad_request("Incomplete user information"));
    };

    // 验证姓名
    if let Err(e) = validate_name(&name) {
        return Ok(ErrorResponse::from_error(&e));
    }

    // 验证 netid
    if let Err(e) = validate_netid(&netid) {
        return Ok(ErrorResponse::from_error(&e));
    }

    let storage = service.get_storage(request);

    match storage.create_user(name.trim(), &netid).await {
        Ok(user) => {
            info!("用户已创建: {} ({})", user.netid, user.id);
            let graph = UserGraph {
                user,
                instructing: Vec::new(),
                attending: Vec::new(),
                goods: Vec::new(),
                sales: Vec::new(),
                purchases: Vec::new(),
            };
            Ok(HttpResponse::Created().json(UserView::from_graph(&graph, SerializeDepth::Full)))
        }
        // netid 重复时为 Conflict，映射为 400
        Err(e) => Ok(ErrorResponse::from_error(&e)),
    }
}
