use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Identifier of a product, assigned by the remote collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<i64>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid product id: {}", e))
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// A product record as returned by the remote collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: f64,
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of a create or update request. The id is never part of it: the
/// remote collection assigns identifiers, the client only echoes them in
/// the request path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
}

impl ProductInput {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Name must not be empty".into());
        }
        if !self.price.is_finite() {
            return Err("Price must be a number".into());
        }
        if self.price < 0.0 {
            return Err("Price must not be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_matches_wire_shape() {
        let json = r#"{"id":1,"name":"Pen","description":"Blue pen","price":1.5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, ProductId::new(1));
        assert_eq!(product.name, "Pen");
        assert_eq!(product.description, "Blue pen");
        assert_eq!(product.price, 1.5);
    }

    #[test]
    fn input_serializes_without_id() {
        let input = ProductInput {
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: 1.5,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"name": "Pen", "description": "Blue pen", "price": 1.5})
        );
        assert!(json.get("id").is_none());
    }

    #[test]
    fn validate_rejects_blank_name() {
        let input = ProductInput {
            name: "   ".to_string(),
            description: String::new(),
            price: 1.0,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn validate_rejects_negative_price() {
        let input = ProductInput {
            name: "Pen".to_string(),
            description: String::new(),
            price: -0.01,
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn validate_accepts_zero_price() {
        let input = ProductInput {
            name: "Pen".to_string(),
            description: String::new(),
            price: 0.0,
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn id_round_trips_through_string() {
        let id = ProductId::from_string("42").unwrap();
        assert_eq!(id.as_string(), "42");
        assert!(ProductId::from_string("abc").is_err());
    }
}
