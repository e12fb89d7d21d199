use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, ProductId};

/// Immutable product record.
///
/// Products are never edited in place; to change one, delete it from the
/// catalog and add a replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    producer: String,
}

impl Product {
    /// Build a product record.
    ///
    /// Rejects blank id, name or producer: a record with a blank name or
    /// producer could never be found or rendered by the search queries.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        producer: impl Into<String>,
    ) -> DomainResult<Self> {
        let id = id.into();
        let name = name.into();
        let producer = producer.into();

        if id.as_str().trim().is_empty() {
            return Err(DomainError::invalid_id("ProductId: blank"));
        }
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if producer.trim().is_empty() {
            return Err(DomainError::validation("producer cannot be empty"));
        }

        Ok(Self { id, name, producer })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn producer(&self) -> &str {
        &self.producer
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
