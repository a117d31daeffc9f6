//! Wire types for the merchandising API.
//!
//! These mirror the remote contract exactly; the client computes no
//! derived fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User role in the merchandising organization.
///
/// Fixed closed set, serialized in SCREAMING_CASE on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Merchandiser,
    Supervisor,
    Admin,
}

impl Role {
    /// Returns the wire identifier for this role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Merchandiser => "MERCHANDISER",
            Role::Supervisor => "SUPERVISOR",
            Role::Admin => "ADMIN",
        }
    }

    /// Returns the human-readable label for this role.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Merchandiser => "Merchandiser",
            Role::Supervisor => "Supervisor",
            Role::Admin => "Admin",
        }
    }

    /// Returns all roles for iteration (e.g., in the register form picker).
    pub fn all() -> &'static [Role] {
        &[Role::Merchandiser, Role::Supervisor, Role::Admin]
    }

    /// Parses a wire identifier (case-insensitive).
    pub fn parse(value: &str) -> Option<Role> {
        match value.trim().to_ascii_uppercase().as_str() {
            "MERCHANDISER" => Some(Role::Merchandiser),
            "SUPERVISOR" => Some(Role::Supervisor),
            "ADMIN" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable user snapshot returned by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

impl UserRecord {
    /// Returns "First Last" for display.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Body for POST /auth/login/.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Response of POST /auth/login/.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub user: UserRecord,
    pub token: String,
}

/// Body for POST /auth/register/.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
}

/// Response of POST /auth/register/ and GET/PUT /auth/profile/.
#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: UserRecord,
}

/// Body for PUT /auth/profile/ (partial update; unset fields are omitted).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

impl ProfileUpdate {
    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.first_name.is_none() && self.last_name.is_none()
    }
}

/// Body for POST /auth/change-password/.
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest<'a> {
    pub old_password: &'a str,
    pub new_password: &'a str,
}

/// Product record as returned by the server.
///
/// `price` is a decimal serialized as a string; the client never does
/// arithmetic on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub sku: String,
    #[serde(default)]
    pub barcode: String,
    pub price: String,
    pub stock_quantity: i64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_by: Option<i64>,
    #[serde(default)]
    pub created_by_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Writable product fields for create/update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductInput {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub barcode: Option<String>,
    pub price: String,
    pub stock_quantity: i64,
}

/// Sort orders accepted by the product list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrdering {
    Name,
    NameDesc,
    Price,
    PriceDesc,
    CreatedAt,
    CreatedAtDesc,
}

impl ProductOrdering {
    /// Returns the query-string value for this ordering.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductOrdering::Name => "name",
            ProductOrdering::NameDesc => "-name",
            ProductOrdering::Price => "price",
            ProductOrdering::PriceDesc => "-price",
            ProductOrdering::CreatedAt => "created_at",
            ProductOrdering::CreatedAtDesc => "-created_at",
        }
    }

    /// Parses a query-string value ("name", "-price", ...).
    pub fn parse(value: &str) -> Option<ProductOrdering> {
        match value.trim() {
            "name" => Some(ProductOrdering::Name),
            "-name" => Some(ProductOrdering::NameDesc),
            "price" => Some(ProductOrdering::Price),
            "-price" => Some(ProductOrdering::PriceDesc),
            "created_at" => Some(ProductOrdering::CreatedAt),
            "-created_at" => Some(ProductOrdering::CreatedAtDesc),
            _ => None,
        }
    }
}

/// Query parameters for GET /products/.
///
/// `search` matches name/description/sku/barcode on the server; `sku` and
/// `created_by` are exact filters.
#[derive(Debug, Clone, Default)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub sku: Option<String>,
    pub created_by: Option<i64>,
    pub ordering: Option<ProductOrdering>,
}

impl ProductQuery {
    /// Returns the query pairs to append to the request URL.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(sku) = &self.sku {
            pairs.push(("sku", sku.clone()));
        }
        if let Some(created_by) = self.created_by {
            pairs.push(("created_by", created_by.to_string()));
        }
        if let Some(ordering) = self.ordering {
            pairs.push(("ordering", ordering.as_str().to_string()));
        }
        pairs
    }
}

/// Response of GET /products/.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
}

/// Response of GET/POST/PUT /products/{id}/.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductResponse {
    pub product: Product,
}
