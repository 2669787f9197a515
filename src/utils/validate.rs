use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{CampusError, Result};

static NETID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("Invalid netid regex"));

/// 评分上限
pub const MAX_RATING: f64 = 5.0;

pub fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CampusError::validation("Name must not be empty"));
    }
    if trimmed.chars().count() > 100 {
        return Err(CampusError::validation("Name must be at most 100 characters"));
    }
    Ok(())
}

pub fn validate_netid(netid: &str) -> Result<()> {
    // netid 长度校验：1 <= x <= 32
    if netid.is_empty() || netid.len() > 32 {
        return Err(CampusError::validation(
            "NetID length must be between 1 and 32 characters",
        ));
    }
    // 只能包含字母、数字、下划线或连字符
    if !NETID_RE.is_match(netid) {
        return Err(CampusError::validation(
            "NetID must contain only letters, numbers, underscores or hyphens",
        ));
    }
    Ok(())
}

pub fn validate_rating(rating: f64) -> Result<()> {
    if !rating.is_finite() || !(0.0..=MAX_RATING).contains(&rating) {
        return Err(CampusError::validation("Rating must be between 0 and 5"));
    }
    Ok(())
}

pub fn validate_price(price: i64) -> Result<()> {
    if price < 0 {
        return Err(CampusError::validation("Price must not be negative"));
    }
    Ok(())
}

pub fn validate_amount(amount: i64) -> Result<()> {
    if amount < 0 {
        return Err(CampusError::validation("Amount must not be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert!(validate_name("Alice").is_ok());
        assert!(validate_name("   ").is_err());
        assert!(validate_name(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_netids() {
        assert!(validate_netid("abc123").is_ok());
        assert!(validate_netid("ab_c-1").is_ok());
        assert!(validate_netid("").is_err());
        assert!(validate_netid("has space").is_err());
        assert!(validate_netid("a@b").is_err());
    }

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(0.0).is_ok());
        assert!(validate_rating(5.0).is_ok());
        assert!(validate_rating(3.5).is_ok());
        assert!(validate_rating(-0.5).is_err());
        assert!(validate_rating(5.1).is_err());
        assert!(validate_rating(f64::NAN).is_err());
    }

    #[test]
    fn test_price() {
        assert!(validate_price(0).is_ok());
        assert!(validate_price(500).is_ok());
        assert!(validate_price(-1).is_err());
    }

    #[test]
    fn test_failures_are_validation_errors() {
        let err = validate_amount(-5).unwrap_err();
        assert!(matches!(err, CampusError::Validation(_)));
        assert_eq!(err.message(), "Amount must not be negative");
        assert!(err.is_client_error());
        assert!(validate_amount(0).is_ok());
    }
}
