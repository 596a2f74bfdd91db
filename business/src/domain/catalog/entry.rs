use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::product::model::{Product, ProductDetails};

/// Client-side key for list operations (selection, checkboxes).
///
/// Exists before the server assigns an identity and never reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LocalKey(u64);

impl LocalKey {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LocalKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identity {
    Draft(LocalKey),
    Persisted { server: Uuid, local: LocalKey },
}

impl Identity {
    pub fn local(&self) -> LocalKey {
        match self {
            Identity::Draft(local) => *local,
            Identity::Persisted { local, .. } => *local,
        }
    }

    pub fn server(&self) -> Option<Uuid> {
        match self {
            Identity::Draft(_) => None,
            Identity::Persisted { server, .. } => Some(*server),
        }
    }

    /// Draft -> Persisted once the store has assigned `server`.
    pub fn persist(self, server: Uuid) -> Self {
        Identity::Persisted {
            server,
            local: self.local(),
        }
    }
}

/// One product of the client working set.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub identity: Identity,
    pub details: ProductDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CatalogEntry {
    pub fn from_product(product: Product, local: LocalKey) -> Self {
        Self {
            identity: Identity::Persisted {
                server: product.id,
                local,
            },
            details: product.details,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }

    pub fn key(&self) -> LocalKey {
        self.identity.local()
    }
}

/// Read access the query engine and summary need from a product-like record.
pub trait CatalogItem {
    fn details(&self) -> &ProductDetails;
    fn created_at(&self) -> DateTime<Utc>;
}

impl CatalogItem for Product {
    fn details(&self) -> &ProductDetails {
        &self.details
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

impl CatalogItem for CatalogEntry {
    fn details(&self) -> &ProductDetails {
        &self.details
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
