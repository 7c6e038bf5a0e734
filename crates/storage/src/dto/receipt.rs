use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::models::{Item, Receipt};

/// Request payload for scoring a receipt
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    #[validate(custom(function = "validate_retailer"))]
    #[schema(example = "M&M Corner Market")]
    pub retailer: String,

    #[validate(custom(function = "validate_purchase_date"))]
    #[schema(example = "2022-01-01")]
    pub purchase_date: String,

    #[validate(custom(function = "validate_purchase_time"))]
    #[schema(example = "13:01")]
    pub purchase_time: String,

    #[validate(length(min = 1, message = "At least one item is required"))]
    #[validate(nested)]
    pub items: Vec<ReceiptItemRequest>,

    #[validate(length(min = 1, message = "Total is required"))]
    #[schema(example = "6.49")]
    pub total: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptItemRequest {
    #[validate(custom(function = "validate_short_description"))]
    #[schema(example = "Mountain Dew 12PK")]
    pub short_description: String,

    #[validate(custom(function = "validate_price"))]
    #[schema(example = "6.49")]
    pub price: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProcessReceiptResponse {
    pub id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointsResponse {
    pub points: u64,
}

fn format_error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

/// Letters, digits, spaces, `-`, `'` and `&`
fn validate_retailer(retailer: &str) -> Result<(), ValidationError> {
    let valid = !retailer.is_empty()
        && retailer
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '-' | '\'' | '&'));

    if valid {
        Ok(())
    } else {
        Err(format_error("invalid_retailer", "Invalid retailer format"))
    }
}

/// Word characters, whitespace and `-`
fn validate_short_description(description: &str) -> Result<(), ValidationError> {
    let valid = !description.is_empty()
        && description
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c.is_ascii_whitespace());

    if valid {
        Ok(())
    } else {
        Err(format_error(
            "invalid_short_description",
            "Invalid item description format",
        ))
    }
}

/// One or more digits, a dot, then exactly two digits
fn validate_price(price: &str) -> Result<(), ValidationError> {
    let valid = match price.split_once('.') {
        Some((dollars, cents)) => {
            !dollars.is_empty() && all_digits(dollars) && cents.len() == 2 && all_digits(cents)
        }
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(format_error("invalid_price", "Invalid item price format"))
    }
}

/// `YYYY-MM-DD` with month in 01-12 and day in 01-31
fn validate_purchase_date(date: &str) -> Result<(), ValidationError> {
    let valid = match date.split('-').collect::<Vec<_>>().as_slice() {
        [year, month, day] => {
            year.len() == 4
                && all_digits(year)
                && two_digits_in(month, 1..=12)
                && two_digits_in(day, 1..=31)
        }
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(format_error("invalid_purchase_date", "Invalid purchase date format"))
    }
}

/// `HH:MM` on a 24-hour clock
fn validate_purchase_time(time: &str) -> Result<(), ValidationError> {
    let valid = match time.split_once(':') {
        Some((hour, minute)) => two_digits_in(hour, 0..=23) && two_digits_in(minute, 0..=59),
        None => false,
    };

    if valid {
        Ok(())
    } else {
        Err(format_error("invalid_purchase_time", "Invalid purchase time format"))
    }
}

fn all_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

fn two_digits_in(s: &str, range: std::ops::RangeInclusive<u32>) -> bool {
    s.len() == 2 && all_digits(s) && s.parse::<u32>().is_ok_and(|n| range.contains(&n))
}

impl From<ReceiptItemRequest> for Item {
    fn from(item: ReceiptItemRequest) -> Self {
        Self {
            short_description: item.short_description,
            price: item.price,
        }
    }
}

impl From<ProcessReceiptRequest> for Receipt {
    fn from(request: ProcessReceiptRequest) -> Self {
        Self {
            retailer: request.retailer,
            purchase_date: request.purchase_date,
            purchase_time: request.purchase_time,
            total: request.total,
            items: request.items.into_iter().map(Item::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request() -> ProcessReceiptRequest {
        serde_json::from_value(json!({
            "retailer": "M&M Corner Market",
            "purchaseDate": "2022-03-20",
            "purchaseTime": "14:33",
            "items": [
                { "shortDescription": "Gatorade", "price": "2.25" },
                { "shortDescription": "Klarbrunn 12-PK 12 FL OZ", "price": "12.00" }
            ],
            "total": "14.25"
        }))
        .unwrap()
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(request().validate().is_ok());
    }

    #[test]
    fn test_request_converts_to_receipt() {
        let receipt = Receipt::from(request());

        assert_eq!(receipt.retailer, "M&M Corner Market");
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.items[1], Item::new("Klarbrunn 12-PK 12 FL OZ", "12.00"));
    }

    #[test]
    fn test_missing_field_fails_to_deserialize() {
        let result = serde_json::from_value::<ProcessReceiptRequest>(json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "items": [],
            "total": "1.00"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_items_fail_validation() {
        let mut req = request();
        req.items.clear();

        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("items"));
    }

    #[test]
    fn test_invalid_item_fails_validation() {
        let mut req = request();
        req.items[0].price = "2.5".to_string();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_retailer_format() {
        assert!(validate_retailer("M&M Corner Market").is_ok());
        assert!(validate_retailer("Joe's Bar-B-Q").is_ok());
        assert!(validate_retailer("").is_err());
        assert!(validate_retailer("Shop!").is_err());
        assert!(validate_retailer("Walmart_1").is_err());
    }

    #[test]
    fn test_short_description_format() {
        assert!(validate_short_description("   Klarbrunn 12-PK 12 FL OZ  ").is_ok());
        assert!(validate_short_description("snake_case").is_ok());
        assert!(validate_short_description("").is_err());
        assert!(validate_short_description("Pizza & Wings").is_err());
    }

    #[test]
    fn test_price_format() {
        assert!(validate_price("6.49").is_ok());
        assert!(validate_price("0.00").is_ok());
        assert!(validate_price("6.4").is_err());
        assert!(validate_price(".49").is_err());
        assert!(validate_price("6").is_err());
        assert!(validate_price("-6.49").is_err());
        assert!(validate_price("6.490").is_err());
    }

    #[test]
    fn test_purchase_date_format() {
        assert!(validate_purchase_date("2022-01-01").is_ok());
        assert!(validate_purchase_date("2022-12-31").is_ok());
        assert!(validate_purchase_date("2022-13-01").is_err());
        assert!(validate_purchase_date("2022-00-10").is_err());
        assert!(validate_purchase_date("2022-01-32").is_err());
        assert!(validate_purchase_date("22-01-01").is_err());
        assert!(validate_purchase_date("2022/01/01").is_err());
    }

    #[test]
    fn test_purchase_time_format() {
        assert!(validate_purchase_time("00:00").is_ok());
        assert!(validate_purchase_time("23:59").is_ok());
        assert!(validate_purchase_time("24:00").is_err());
        assert!(validate_purchase_time("12:60").is_err());
        assert!(validate_purchase_time("9:30").is_err());
        assert!(validate_purchase_time("0930").is_err());
    }
}
