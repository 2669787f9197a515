use serde::Deserialize;

use crate::models::common::serde_helpers::deserialize_optional_i64;

// 创建交易请求
#[derive(Debug, Deserialize)]
pub struct CreateTransactionRequest {
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub amount: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub good_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub buyer_id: Option<i64>,
    #[serde(default, deserialize_with = "deserialize_optional_i64")]
    pub seller_id: Option<i64>,
    pub rating: Option<f64>,
}

// 更新交易评分请求
#[derive(Debug, Deserialize)]
pub struct UpdateTransactionRequest {
    pub rating: Option<f64>,
}

// 已校验的新交易（用于存储层）
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub good_id: i64,
    pub buyer_id: i64,
    pub seller_id: i64,
    pub amount: i64,
    pub rating: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_fields_share_lenient_parsing() {
        let request: CreateTransactionRequest = serde_json::from_str(
            r#"{"amount": "500", "good_id": 1.0, "buyer_id": 2, "seller_id": "3", "rating": 4.5}"#,
        )
        .unwrap();
        assert_eq!(request.amount, Some(500));
        assert_eq!(request.good_id, Some(1));
        assert_eq!(request.buyer_id, Some(2));
        assert_eq!(request.seller_id, Some(3));
        assert_eq!(request.rating, Some(4.5));
    }

    #[test]
    fn test_missing_ids_stay_none() {
        let request: CreateTransactionRequest =
            serde_json::from_str(r#"{"amount": 10, "seller_id": null}"#).unwrap();
        assert_eq!(request.good_id, None);
        assert_eq!(request.seller_id, None);
        assert!(serde_json::from_str::<CreateTransactionRequest>(r#"{"amount": 1.5}"#).is_err());
    }
}
