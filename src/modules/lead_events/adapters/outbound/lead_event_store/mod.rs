use async_trait::async_trait;
use thiserror::Error;

use crate::modules::lead_events::core::lead_event::{LeadEvent, NewLeadEvent};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadEventStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Ordered collection of lead events.
///
/// Ids are assigned by the store on append and are never reused, even after the
/// record holding them is deleted.
#[async_trait]
pub trait LeadEventStore: Send + Sync {
    async fn append(&self, new_event: NewLeadEvent) -> Result<LeadEvent, LeadEventStoreError>;

    /// All records in insertion order.
    async fn list(&self) -> Result<Vec<LeadEvent>, LeadEventStoreError>;

    /// Removes the record with `id`, returning it, or `None` when no record matches.
    async fn delete(&self, id: u64) -> Result<Option<LeadEvent>, LeadEventStoreError>;
}

pub mod in_memory;
