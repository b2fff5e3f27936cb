//! Typed models for each shop resource
//!
//! Records are stored as plain JSON, but every write goes through one of
//! these structs first so malformed or invalid bodies never reach the data
//! file. The models cover client-writable fields only; `id` and the
//! timestamps belong to the server and fields a model does not name are
//! carried through untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

fn default_true() -> bool {
    true
}

fn default_role() -> String {
    "customer".to_string()
}

/// Identifier of a referenced record
///
/// Seeded data files may use numeric ids; records created here get UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Text(String),
    Number(i64),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Text(id) => f.write_str(id),
            RecordId::Number(id) => write!(f, "{}", id),
        }
    }
}

fn validate_record_id(id: &RecordId) -> Result<(), ValidationError> {
    match id {
        RecordId::Text(text) if text.trim().is_empty() => Err(ValidationError::new("empty_id")),
        _ => Ok(()),
    }
}

/// Hook run after deserialization and before validation
pub trait Model: Serialize + for<'de> Deserialize<'de> + Validate {
    /// Fill derived fields
    fn finalize(&mut self) {}
}

/// Minimal reference to a category embedded in a product
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CategoryRef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Product {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[serde(default)]
    pub stock: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<RecordId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Model for Product {}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Category {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl Model for Category {
    fn finalize(&mut self) {
        if self.slug.as_deref().is_none_or(str::is_empty) {
            self.slug = Some(slugify(&self.name));
        }
    }
}

/// Lower-case, dash-separated form of a name ("Baby Blankets" → "baby-blankets")
pub fn slugify(name: &str) -> String {
    name.split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Customer {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItem {
    #[validate(custom(function = "validate_record_id"))]
    pub product_id: RecordId,
    #[serde(default)]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Order {
    #[validate(nested)]
    pub customer: Customer,
    #[validate(length(min = 1), nested)]
    pub items: Vec<OrderItem>,
    /// Sum of `price * quantity` when the client leaves it out
    #[serde(default)]
    pub total: Option<f64>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Order {
    pub fn items_total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.price * f64::from(item.quantity))
            .sum()
    }
}

impl Model for Order {
    fn finalize(&mut self) {
        if self.total.is_none() {
            self.total = Some(self.items_total());
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReviewAuthor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[validate(length(min = 1))]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Review {
    #[validate(custom(function = "validate_record_id"))]
    pub product_id: RecordId,
    #[validate(nested)]
    pub user: ReviewAuthor,
    #[validate(range(min = 1, max = 5))]
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub approved: bool,
}

impl Model for Review {}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct User {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[serde(default = "default_role")]
    pub role: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Model for User {}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Role {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl Model for Role {}
