use crate::modules::lead_events::core::lead_event::{LeadEvent, NewLeadEvent};
use crate::modules::lead_events::adapters::outbound::lead_event_store::{LeadEventStore, LeadEventStoreError};
use tokio::sync::RwLock;

#[derive(Default)]
struct LeadEventLog {
    events: Vec<LeadEvent>,
    appended: u64,
}

#[derive(Default)]
pub struct InMemoryLeadEventStore {
    inner: RwLock<LeadEventLog>,
    is_offline: bool,
}

impl InMemoryLeadEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), LeadEventStoreError> {
        if self.is_offline {
            return Err(LeadEventStoreError::Backend(
                "Lead event store offline".into(),
            ));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl LeadEventStore for InMemoryLeadEventStore {
    async fn append(&self, new_event: NewLeadEvent) -> Result<LeadEvent, LeadEventStoreError> {
        self.ensure_online()?;
        let mut log = self.inner.write().await;
        // The counter and the push share one write guard, so ids cannot collide.
        log.appended += 1;
        let event = new_event.into_lead_event(log.appended);
        log.events.push(event.clone());
        Ok(event)
    }

    async fn list(&self) -> Result<Vec<LeadEvent>, LeadEventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.events.clone())
    }

    async fn delete(&self, id: u64) -> Result<Option<LeadEvent>, LeadEventStoreError> {
        self.ensure_online()?;
        let mut log = self.inner.write().await;
        Ok(log
            .events
            .iter()
            .position(|event| event.id == id)
            .map(|index| log.events.remove(index)))
    }
}
