//! The product create/edit form.

use thiserror::Error;

use crate::catalog::{format_price_input, parse_price_input, Product, ProductInput};

/// Form values as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub title: String,
    pub price: String,
    pub category: String,
    pub description: String,
    pub image: String,
}

/// A form rule that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter Product Title!")]
    MissingTitle,

    #[error("Please enter Product Price!")]
    MissingPrice,

    #[error("Product Price must be a number!")]
    InvalidPrice,

    #[error("Product Price must not be negative!")]
    NegativePrice,
}

impl ProductForm {
    /// Prefill the form from an existing record.
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.product_title.clone(),
            price: format_price_input(&product.product_price.to_string()),
            category: product.product_category.clone().unwrap_or_default(),
            description: product.product_description.clone().unwrap_or_default(),
            image: product.product_image.clone().unwrap_or_default(),
        }
    }

    /// Check the form rules and build the payload. Blank optional fields are omitted.
    pub fn validate(&self) -> Result<ProductInput, FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::MissingTitle);
        }

        if self.price.trim().is_empty() {
            return Err(FormError::MissingPrice);
        }

        let price = parse_price_input(&self.price).ok_or(FormError::InvalidPrice)?;
        if price.is_sign_negative() && !price.is_zero() {
            return Err(FormError::NegativePrice);
        }

        Ok(ProductInput {
            product_title: self.title.clone(),
            product_price: price,
            product_description: optional(&self.description),
            product_image: optional(&self.image),
            product_category: optional(&self.category),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn form(title: &str, price: &str) -> ProductForm {
        ProductForm {
            title: title.into(),
            price: price.into(),
            ..ProductForm::default()
        }
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(form("", "10").validate(), Err(FormError::MissingTitle));
        assert_eq!(form("Lamp", " ").validate(), Err(FormError::MissingPrice));
        assert_eq!(form("Lamp", "ten").validate(), Err(FormError::InvalidPrice));
        assert_eq!(form("Lamp", "-3").validate(), Err(FormError::NegativePrice));
    }

    #[test]
    fn test_validate_builds_input() {
        let mut values = form("Lamp", "$1,250.00");
        values.category = "lighting".into();

        let input = values.validate().unwrap();
        assert_eq!(input.product_price, Decimal::new(125000, 2));
        assert_eq!(input.product_category.as_deref(), Some("lighting"));
        assert!(input.product_description.is_none());
        assert!(input.product_image.is_none());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::MissingTitle.to_string(), "Please enter Product Title!");
        assert_eq!(FormError::MissingPrice.to_string(), "Please enter Product Price!");
    }

    #[test]
    fn test_prefill_from_product() {
        let product = Product {
            product_id: "p-1".into(),
            product_title: "Sofa".into(),
            product_price: Decimal::new(129999, 2),
            product_description: Some("Three seats".into()),
            product_image: None,
            product_category: None,
            created_timestamp: String::new(),
            updated_timestamp: String::new(),
        };

        let values = ProductForm::from_product(&product);
        assert_eq!(values.price, "1,299.99");
        assert_eq!(values.description, "Three seats");
        assert_eq!(values.validate().unwrap().product_price, product.product_price);
    }
}
