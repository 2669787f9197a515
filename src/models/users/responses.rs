use serde::Serialize;

use super::entities::{User, UserGraph};
use crate::models::{
    SerializeDepth, courses::responses::CourseView, goods::responses::GoodView,
    transactions::responses::TransactionView,
};

// 用户视图
//
// - Simple: id, name, netid
// - Public: + rating, courses, goods
// - Full:   + transactions
#[derive(Debug, Serialize)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub netid: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<CourseView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goods: Option<Vec<GoodView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transactions: Option<Vec<TransactionView>>,
}

impl UserView {
    pub fn simple(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            netid: user.netid.clone(),
            rating: None,
            courses: None,
            goods: None,
            transactions: None,
        }
    }

    pub fn from_graph(graph: &UserGraph, depth: SerializeDepth) -> Self {
        let mut view = Self::simple(&graph.user);

        if depth.includes_relations() {
            view.rating = Some(graph.displayed_rating());
            view.courses = Some(
                graph
                    .instructing
                    .iter()
                    .chain(graph.attending.iter())
                    .map(CourseView::simple)
                    .collect(),
            );
            view.goods = Some(graph.goods.iter().map(GoodView::simple).collect());
        }

        if depth.includes_history() {
            view.transactions = Some(
                graph
                    .history()
                    .into_iter()
                    .map(TransactionView::simple)
                    .collect(),
            );
        }

        view
    }
}

// 用户评分响应
#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub rating: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        courses::entities::Course, goods::entities::Good, transactions::entities::Transaction,
    };
    use chrono::DateTime;

    fn user(id: i64, netid: &str) -> User {
        User {
            id,
            name: format!("User {id}"),
            netid: netid.to_string(),
            rating: 5.0,
            created_at: DateTime::default(),
        }
    }

    fn transaction(id: i64, buyer: i64, seller: i64, rating: Option<f64>) -> Transaction {
        Transaction {
            id,
            good_id: Some(1),
            buyer_id: Some(buyer),
            seller_id: Some(seller),
            amount: 100,
            rating,
            timestamp: DateTime::default(),
        }
    }

    fn graph() -> UserGraph {
        UserGraph {
            user: user(1, "ab123"),
            instructing: vec![Course {
                id: 2,
                code: "CS 1998".to_string(),
                name: "Intro to Backend".to_string(),
                created_at: DateTime::default(),
            }],
            attending: vec![],
            goods: vec![Good {
                id: 5,
                good_name: "Textbook".to_string(),
                image_url: "https://example.com/T.png".to_string(),
                price: 2500,
                seller_id: 1,
                created_at: DateTime::default(),
            }],
            sales: vec![transaction(4, 2, 1, Some(3.0))],
            purchases: vec![transaction(2, 1, 3, None)],
        }
    }

    #[test]
    fn test_simple_has_identity_only() {
        let value = serde_json::to_value(UserView::from_graph(&graph(), SerializeDepth::Simple))
            .unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "id": 1, "name": "User 1", "netid": "ab123" })
        );
    }

    #[test]
    fn test_public_uses_derived_rating_and_hides_history() {
        let value = serde_json::to_value(UserView::from_graph(&graph(), SerializeDepth::Public))
            .unwrap();
        assert_eq!(value["rating"], serde_json::json!(4.0));
        assert_eq!(value["courses"][0]["code"], "CS 1998");
        assert_eq!(value["goods"][0]["price"], 2500);
        assert!(value.get("transactions").is_none());
    }

    #[test]
    fn test_full_lists_history_by_id() {
        let value = serde_json::to_value(UserView::from_graph(&graph(), SerializeDepth::Full))
            .unwrap();
        let ids: Vec<i64> = value["transactions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_i64().unwrap())
            .collect();
        assert_eq!(ids, vec![2, 4]);
    }

    #[test]
    fn test_self_dealing_appears_once() {
        let mut g = graph();
        let both = transaction(9, 1, 1, None);
        g.sales.push(both.clone());
        g.purchases.push(both);
        assert_eq!(g.history().len(), 3);
    }
}
