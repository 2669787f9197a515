use serde::Serialize;

use super::entities::{Good, GoodGraph};
use crate::models::{SerializeDepth, users::responses::UserView};

// 商品视图
//
// - Simple: id, good_name, image_url, price
// - Public/Full: + seller（卖家不存在时为 null）
#[derive(Debug, Serialize)]
pub struct GoodView {
    pub id: i64,
    pub good_name: String,
    pub image_url: String,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seller: Option<Option<UserView>>,
}

impl GoodView {
    pub fn simple(good: &Good) -> Self {
        Self {
            id: good.id,
            good_name: good.good_name.clone(),
            image_url: good.image_url.clone(),
            price: good.price,
            seller: None,
        }
    }

    pub fn from_graph(graph: &GoodGraph, depth: SerializeDepth) -> Self {
        let mut view = Self::simple(&graph.good);
        if depth.includes_relations() {
            view.seller = Some(graph.seller.as_ref().map(UserView::simple));
        }
        view
    }
}

// 商品列表响应
#[derive(Debug, Serialize)]
pub struct GoodListResponse {
    pub goods: Vec<GoodView>,
}
