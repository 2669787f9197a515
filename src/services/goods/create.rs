use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{GoodService, image};
use crate::config::AppConfig;
use crate::models::{
    ErrorResponse, SerializeDepth,
    goods::{entities::GoodGraph, requests::CreateGoodRequest, responses::GoodView},
};
use crate::utils::validate::{validate_name, validate_price};

pub async fn create_good(
    service: &GoodService,
    good_data: CreateGoodRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let (Some(good_name), Some(image_uri), Some(price), Some(seller_id)) = (
        good_data.good_name,
        good_data.image,
        good_data.price,
        good_data.seller_id,
    ) else {
        return Ok(ErrorResponse::bad_request("Incomplete good information"));
    };

    if let Err(e) = validate_name(&good_name) {
        return Ok(ErrorResponse::from_error(&e));
    }
    if let Err(e) = validate_price(price) {
        return Ok(ErrorResponse::from_error(&e));
    }

    let storage = service.get_storage(request);

    let seller = match storage.get_user_by_id(seller_id).await {
        Ok(Some(seller)) => seller,
        Ok(None) => return Ok(ErrorResponse::not_found("Seller not found")),
        Err(e) => return Ok(ErrorResponse::from_error(&e)),
    };

    let object_store = service.get_object_store(request);
    let image =
        match image::store_image(&image_uri, object_store.as_ref(), &AppConfig::get().upload).await
        {
            Ok(image) => image,
            Err(e) => {
                warn!("商品图片处理失败: {}", e);
                return Ok(ErrorResponse::from_error(&e));
            }
        };

    match storage
        .create_good(good_name.trim(), &image.url, price, seller_id)
        .await
    {
        Ok(good) => {
            info!("商品已发布: {} (卖家 {})", good.id, seller_id);
            let graph = GoodGraph {
                good,
                seller: Some(seller),
            };
            Ok(HttpResponse::Created().json(GoodView::from_graph(&graph, SerializeDepth::Full)))
        }
        Err(e) => {
            // 商品未写入，删除刚上传的图片
            if let Err(cleanup) = object_store.delete(&image.object_name).await {
                warn!("删除孤立图片失败 {}: {}", image.object_name, cleanup);
            }
            Ok(ErrorResponse::from_error(&e))
        }
    }
}
