pub mod create_product;
pub mod delete_product;
pub mod get_product;
pub mod list_products;
pub mod update_product;

pub use create_product::create_product;
pub use delete_product::delete_product;
pub use get_product::get_product;
pub use list_products::list_products;
pub use update_product::update_product;

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::category::models::CategoryId;
use crate::domain::product::errors::ProductError;
use crate::domain::product::models::Price;
use crate::domain::product::models::Product;
use crate::domain::product::models::ProductDetails;
use crate::domain::product::models::ProductName;
use crate::domain::product::models::Quantity;

/// HTTP request body for creating or replacing a product (raw JSON)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductRequest {
    name: String,
    #[serde(rename = "shortDescription", default)]
    short_description: String,
    #[serde(default)]
    description: String,
    price: f64,
    quantity: i64,
    category_id: i64,
}

impl ProductRequest {
    fn try_into_details(self) -> Result<ProductDetails, ProductError> {
        Ok(ProductDetails {
            name: ProductName::new(self.name)?,
            short_description: self.short_description,
            description: self.description,
            price: Price::new(self.price)?,
            quantity: Quantity::new(self.quantity)?,
            category_id: CategoryId::new(self.category_id)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductData {
    pub id: i64,
    pub name: String,
    #[serde(rename = "shortDescription")]
    pub short_description: String,
    pub description: String,
    pub price: f64,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
    pub quantity: i64,
    pub category_id: i64,
}

impl From<&Product> for ProductData {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.0,
            name: product.name.as_str().to_string(),
            short_description: product.short_description.clone(),
            description: product.description.clone(),
            price: product.price.value(),
            created: product.created,
            updated: product.updated,
            quantity: product.quantity.value(),
            category_id: product.category_id.0,
        }
    }
}
