use contracts::domain::product::{Product, ProductId, ProductInput};
use leptos::prelude::*;

/// Working copy of the form fields. Price stays as the raw text the user
/// typed until submission, where it is parsed explicitly.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductDraft {
    pub id: Option<ProductId>,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl ProductDraft {
    /// Draft populated from a record fetched for editing. Every field is
    /// overwritten, so nothing from a prior edit can leak through.
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.to_string(),
        }
    }

    /// Parse and validate into a request body. No request may be issued
    /// from a draft that fails here.
    pub fn to_input(&self) -> Result<ProductInput, String> {
        let input = ProductInput {
            name: self.name.clone(),
            description: self.description.clone(),
            price: parse_price(&self.price)?,
        };
        input.validate()?;
        Ok(input)
    }
}

fn parse_price(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("Price is required".to_string());
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("Price is not a number: {}", trimmed))
}

/// Form state machine. Create mode while no identifier is held; Edit mode
/// once a fetched record's identifier is loaded into the draft. The held
/// identifier only ever comes from the remote collection.
#[derive(Clone, Copy)]
pub struct ProductFormViewModel {
    pub draft: RwSignal<ProductDraft>,
    pub error: RwSignal<Option<String>>,
}

impl ProductFormViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(ProductDraft::default()),
            error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.draft.get().id.is_some()
    }

    pub fn editing_id(&self) -> Option<ProductId> {
        self.draft.get_untracked().id
    }

    /// Create -> Edit: load every field from the fetched record.
    pub fn begin_edit(&self, product: &Product) {
        self.error.set(None);
        self.draft.set(ProductDraft::from_product(product));
    }

    /// Back to Create: clear all fields including the held identifier.
    pub fn reset(&self) {
        self.error.set(None);
        self.draft.set(ProductDraft::default());
    }

    /// Validated request body for the current draft, or an inline form
    /// error and no request.
    pub fn submit_input(&self) -> Option<ProductInput> {
        match self.draft.get_untracked().to_input() {
            Ok(input) => {
                self.error.set(None);
                Some(input)
            }
            Err(e) => {
                self.error.set(Some(e));
                None
            }
        }
    }
}

impl Default for ProductFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pen() -> Product {
        Product {
            id: ProductId::new(3),
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: 1.5,
        }
    }

    #[test]
    fn draft_from_product_fills_every_field() {
        let draft = ProductDraft::from_product(&pen());
        assert_eq!(draft.id, Some(ProductId::new(3)));
        assert_eq!(draft.name, "Pen");
        assert_eq!(draft.description, "Blue pen");
        assert_eq!(draft.price, "1.5");
    }

    #[test]
    fn default_draft_holds_no_identifier() {
        let draft = ProductDraft::default();
        assert_eq!(draft.id, None);
        assert!(draft.name.is_empty());
        assert!(draft.description.is_empty());
        assert!(draft.price.is_empty());
    }

    #[test]
    fn to_input_maps_exact_body() {
        let draft = ProductDraft {
            id: None,
            name: "Pen".to_string(),
            description: "Blue pen".to_string(),
            price: "1.5".to_string(),
        };
        let input = draft.to_input().unwrap();
        assert_eq!(
            input,
            ProductInput {
                name: "Pen".to_string(),
                description: "Blue pen".to_string(),
                price: 1.5,
            }
        );
    }

    #[test]
    fn to_input_rejects_non_numeric_price() {
        let draft = ProductDraft {
            id: None,
            name: "Pen".to_string(),
            description: String::new(),
            price: "cheap".to_string(),
        };
        assert!(draft.to_input().is_err());
    }

    #[test]
    fn to_input_rejects_empty_price() {
        let draft = ProductDraft {
            id: None,
            name: "Pen".to_string(),
            description: String::new(),
            price: "  ".to_string(),
        };
        assert!(draft.to_input().is_err());
    }

    #[test]
    fn to_input_rejects_negative_price() {
        let draft = ProductDraft {
            id: None,
            name: "Pen".to_string(),
            description: String::new(),
            price: "-1".to_string(),
        };
        assert!(draft.to_input().is_err());
    }

    #[test]
    fn to_input_rejects_blank_name() {
        let draft = ProductDraft {
            id: None,
            name: " ".to_string(),
            description: String::new(),
            price: "1".to_string(),
        };
        assert!(draft.to_input().is_err());
    }
}
