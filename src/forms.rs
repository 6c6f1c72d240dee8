//! Form State
//!
//! Raw text as typed into the modals, plus parsing into request payloads.
//! Numeric fields are checked here so bad input never reaches the API.

use crate::error::FormErrors;
use crate::models::{Category, CategoryDraft, Credentials, Product, ProductDraft, ProductStatus};

/// Create or edit, decided by whether the form carries an id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(u32),
}

impl FormMode {
    fn from_id(id: &str) -> Self {
        id.trim().parse().map(FormMode::Edit).unwrap_or(FormMode::Create)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    /// Hidden identity field; empty for a new product
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: String,
    pub stock: String,
    pub status: ProductStatus,
}

impl ProductForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_record(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            description: product.description.clone().unwrap_or_default(),
            price: product.price.map(|p| p.to_string()).unwrap_or_default(),
            stock: product.stock.to_string(),
            status: product.status,
        }
    }

    pub fn mode(&self) -> FormMode {
        FormMode::from_id(&self.id)
    }

    pub fn parse(&self) -> Result<(FormMode, ProductDraft), FormErrors> {
        let mut errors = FormErrors::default();

        let title = self.title.trim();
        if title.is_empty() {
            errors.add("title", "Title is required");
        }

        let price = match self.price.trim().parse::<f64>() {
            Ok(p) if p.is_finite() && p >= 0.0 => p,
            _ => {
                errors.add("price", "Price must be a non-negative number");
                0.0
            }
        };

        let stock = match self.stock.trim().parse::<i64>() {
            Ok(s) if s >= 0 => s,
            _ => {
                errors.add("stock", "Stock must be a whole number of zero or more");
                0
            }
        };

        let draft = ProductDraft {
            title: title.to_string(),
            description: self.description.clone(),
            price,
            stock,
            status: self.status,
        };
        errors.into_result((self.mode(), draft))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub id: String,
    pub name: String,
    /// Selected parent id; empty means "no parent"
    pub parent_id: String,
}

impl CategoryForm {
    pub fn blank() -> Self {
        Self::default()
    }

    pub fn from_record(category: &Category) -> Self {
        Self {
            id: category.id.to_string(),
            name: category.name.clone(),
            parent_id: category.parent_id.map(|p| p.to_string()).unwrap_or_default(),
        }
    }

    pub fn mode(&self) -> FormMode {
        FormMode::from_id(&self.id)
    }

    pub fn parse(&self) -> Result<(FormMode, CategoryDraft), FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", "Name is required");
        }

        let parent_id = match self.parent_id.trim() {
            "" => None,
            raw => match raw.parse::<u32>() {
                Ok(pid) => Some(pid),
                Err(_) => {
                    errors.add("parent_id", "Unknown parent category");
                    None
                }
            },
        };

        let draft = CategoryDraft { name: name.to_string(), parent_id };
        errors.into_result((self.mode(), draft))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub api_key: String,
    pub secret_key: String,
    pub salt_key: String,
}

impl AuthForm {
    pub fn credentials(&self) -> Credentials {
        Credentials {
            api_key: self.api_key.clone(),
            secret_key: self.secret_key.clone(),
            salt_key: self.salt_key.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            id: String::new(),
            title: "Widget".into(),
            description: String::new(),
            price: "9.99".into(),
            stock: "5".into(),
            status: ProductStatus::Online,
        }
    }

    #[test]
    fn test_product_form_mode_follows_id() {
        assert_eq!(filled().parse().unwrap().0, FormMode::Create);
        let edit = ProductForm { id: "7".into(), ..filled() };
        assert_eq!(edit.parse().unwrap().0, FormMode::Edit(7));
    }

    #[test]
    fn test_non_numeric_fields_are_rejected() {
        let form = ProductForm { price: "abc".into(), stock: "2.5".into(), ..filled() };
        let errors = form.parse().unwrap_err();
        assert!(errors.get("price").is_some());
        assert!(errors.get("stock").is_some());
        assert!(errors.get("title").is_none());
    }

    #[test]
    fn test_negative_and_blank_rejected() {
        let form = ProductForm { title: "  ".into(), price: "-1".into(), ..filled() };
        let errors = form.parse().unwrap_err();
        assert!(errors.get("title").is_some());
        assert!(errors.get("price").is_some());
    }

    #[test]
    fn test_from_record_round_trips_fields() {
        let product = Product {
            id: 3,
            title: "Lamp".into(),
            description: Some("Warm".into()),
            price: Some(12.5),
            stock: 4,
            status: ProductStatus::Offline,
            created_at: None,
        };
        let form = ProductForm::from_record(&product);
        assert_eq!(form.id, "3");
        assert_eq!(form.price, "12.5");
        let (mode, draft) = form.parse().unwrap();
        assert_eq!(mode, FormMode::Edit(3));
        assert_eq!(draft.description, "Warm");
        assert_eq!(draft.stock, 4);
    }

    #[test]
    fn test_category_form_parent() {
        let form = CategoryForm { id: String::new(), name: "Kitchen".into(), parent_id: "1".into() };
        let (_, draft) = form.parse().unwrap();
        assert_eq!(draft.parent_id, Some(1));

        let form = CategoryForm { parent_id: String::new(), ..form };
        assert_eq!(form.parse().unwrap().1.parent_id, None);
    }

    #[test]
    fn test_non_numeric_parent_is_field_error() {
        let form = CategoryForm { id: String::new(), name: "Kitchen".into(), parent_id: "abc".into() };
        let errors = form.parse().unwrap_err();
        assert_eq!(errors.get("parent_id"), Some("Unknown parent category"));
        assert!(errors.get("name").is_none());
    }
}
