use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Body of `PUT /api/user/order`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CheckoutRequest {
    /// Discount code; empty or missing means no discount.
    #[serde(default)]
    #[schema(example = "SPRING10")]
    pub code: Option<String>,

    #[validate(length(min = 1, message = "Shipping address is required"))]
    #[schema(example = "Main St 1")]
    pub address: String,

    #[validate(length(min = 1, message = "Shipping city is required"))]
    #[schema(example = "Springfield")]
    pub city: String,
}

impl CheckoutRequest {
    /// Discount code with surrounding whitespace removed, `None` when blank.
    pub fn discount_code(&self) -> Option<&str> {
        self.code
            .as_deref()
            .map(str::trim)
            .filter(|code| !code.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(code: Option<&str>) -> CheckoutRequest {
        CheckoutRequest {
            code: code.map(str::to_string),
            address: "Main St".into(),
            city: "Springfield".into(),
        }
    }

    #[test]
    fn blank_codes_mean_no_discount() {
        assert_eq!(request(None).discount_code(), None);
        assert_eq!(request(Some("")).discount_code(), None);
        assert_eq!(request(Some("   ")).discount_code(), None);
        assert_eq!(request(Some(" SPRING10 ")).discount_code(), Some("SPRING10"));
    }

    #[test]
    fn address_and_city_are_required() {
        let mut req = request(None);
        req.city.clear();
        assert!(req.validate().is_err());
    }
}
