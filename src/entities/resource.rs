//! The resources exposed by the shop API

use crate::core::error::EntityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every collection stored in the shop's data file
///
/// The string form doubles as the URL segment (`/api/products`) and the
/// key of the collection in the JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Products,
    Categories,
    Orders,
    Reviews,
    Users,
    Roles,
}

impl ResourceKind {
    pub fn all() -> &'static [ResourceKind] {
        use ResourceKind::*;
        &[Products, Categories, Orders, Reviews, Users, Roles]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Products => "products",
            ResourceKind::Categories => "categories",
            ResourceKind::Orders => "orders",
            ResourceKind::Reviews => "reviews",
            ResourceKind::Users => "users",
            ResourceKind::Roles => "roles",
        }
    }

    /// Fields the admin table's search box looks at when not configured
    pub fn default_search_fields(&self) -> &'static [&'static str] {
        match self {
            ResourceKind::Products => &["name", "description", "category.name"],
            ResourceKind::Categories => &["name", "description"],
            ResourceKind::Orders => &["customer.name", "customer.email", "status"],
            ResourceKind::Reviews => &["user.name", "comment"],
            ResourceKind::Users => &["name", "email", "role"],
            ResourceKind::Roles => &["name", "description"],
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = EntityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResourceKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| EntityError::UnknownResource {
                resource: s.to_string(),
            })
    }
}
