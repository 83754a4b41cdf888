//! 产品请求体校验
//!
//! 按固定顺序检查五个字段，遇到第一个失败即返回。

use serde_json::Value;

use super::model::ProductInput;
use crate::core::{error::CoreError, extract::Validate};

pub const NAME_INVALID: &str = "Name is required and must be a non-empty string";
pub const DESCRIPTION_INVALID: &str = "Description is required and must be a non-empty string";
pub const PRICE_INVALID: &str = "Price is required and must be a positive number";
pub const CATEGORY_INVALID: &str = "Category is required and must be a non-empty string";
pub const IN_STOCK_INVALID: &str = "inStock is required and must be a boolean";

pub fn validate_product(payload: &Value) -> Result<ProductInput, CoreError> {
    let name = non_empty_string(payload, "name", NAME_INVALID)?;
    let description = non_empty_string(payload, "description", DESCRIPTION_INVALID)?;

    let price = match payload.get("price") {
        Some(Value::Number(n)) if n.as_f64().is_some_and(|v| v > 0.0) => n.clone(),
        _ => return Err(invalid(PRICE_INVALID)),
    };

    let category = non_empty_string(payload, "category", CATEGORY_INVALID)?;

    let in_stock = payload
        .get("inStock")
        .and_then(Value::as_bool)
        .ok_or_else(|| invalid(IN_STOCK_INVALID))?;

    Ok(ProductInput {
        name,
        description,
        price,
        category,
        in_stock,
    })
}

impl Validate for ProductInput {
    fn validate(payload: &Value) -> Result<Self, CoreError> {
        validate_product(payload)
    }
}

fn non_empty_string(payload: &Value, field: &str, message: &str) -> Result<String, CoreError> {
    match payload.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(invalid(message)),
    }
}

fn invalid(message: &str) -> CoreError {
    CoreError::Validation(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_payload() -> Value {
        json!({
            "name": "Mouse",
            "description": "Wireless",
            "price": 25,
            "category": "electronics",
            "inStock": true
        })
    }

    fn message_for(payload: &Value) -> String {
        match validate_product(payload) {
            Err(CoreError::Validation(msg)) => msg,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_payload_passes() {
        let input = validate_product(&valid_payload()).unwrap();
        assert_eq!(input.name, "Mouse");
        assert_eq!(input.price, serde_json::Number::from(25));
        assert!(input.in_stock);
    }

    #[test]
    fn test_each_field_rule() {
        let cases = [
            ("name", json!("   "), NAME_INVALID),
            ("name", json!(42), NAME_INVALID),
            ("description", json!(""), DESCRIPTION_INVALID),
            ("price", json!(0), PRICE_INVALID),
            ("price", json!(-3.5), PRICE_INVALID),
            ("price", json!("25"), PRICE_INVALID),
            ("category", json!(null), CATEGORY_INVALID),
            ("inStock", json!("true"), IN_STOCK_INVALID),
        ];

        for (field, value, expected) in cases {
            let mut payload = valid_payload();
            payload[field] = value;
            assert_eq!(message_for(&payload), expected, "field {}", field);
        }
    }

    #[test]
    fn test_missing_fields_report_first_failure() {
        assert_eq!(message_for(&json!({})), NAME_INVALID);
        assert_eq!(
            message_for(&json!({ "name": "Mouse", "inStock": 1 })),
            DESCRIPTION_INVALID
        );
        assert_eq!(message_for(&json!([1, 2, 3])), NAME_INVALID);
    }

    #[test]
    fn test_fractional_price_and_extra_fields() {
        let mut payload = valid_payload();
        payload["price"] = json!(0.5);
        payload["id"] = json!("client-id");
        let input = validate_product(&payload).unwrap();
        assert_eq!(input.price.as_f64(), Some(0.5));
    }
}
