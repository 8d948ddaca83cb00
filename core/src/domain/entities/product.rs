//! Product aggregate: a rentable item and its photo references.

use serde::{Deserialize, Serialize};

use super::user::{User, UserId};

pub type ProductId = i64;

/// A product with its photos
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub owner_id: UserId,
    pub name: String,
    pub per_hour: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub photos: Vec<String>,
}

/// Product aggregate to be written in one transaction
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub owner_id: UserId,
    pub name: String,
    pub per_hour: f64,
    pub description: Option<String>,
    pub photos: Vec<String>,
}

/// Product fields supplied by a caller; the owner comes from the identity
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    pub name: String,
    pub per_hour: f64,
    pub description: Option<String>,
    pub photos: Vec<String>,
}

impl ProductDraft {
    pub fn owned_by(self, owner_id: UserId) -> NewProduct {
        NewProduct {
            owner_id,
            name: self.name,
            per_hour: self.per_hour,
            description: self.description,
            photos: self.photos,
        }
    }
}

/// A product together with the profile of its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductWithOwner {
    pub product: Product,
    pub user: User,
}
