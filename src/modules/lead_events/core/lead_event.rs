use serde::{Deserialize, Serialize};

use crate::modules::lead_events::core::errors::DecideError;

/// A scheduled interaction with a sales or contact lead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeadEvent {
    pub id: u64,
    pub lead_name: String,
    pub event_type: String,
    pub date_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_sent: Option<bool>,
}

/// A validated lead event that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLeadEvent {
    pub lead_name: String,
    pub event_type: String,
    pub date_time: String,
    pub reminder_sent: Option<bool>,
}

impl NewLeadEvent {
    pub fn into_lead_event(self, id: u64) -> LeadEvent {
        LeadEvent {
            id,
            lead_name: self.lead_name,
            event_type: self.event_type,
            date_time: self.date_time,
            reminder_sent: self.reminder_sent,
        }
    }
}

fn required(value: Option<String>) -> Result<String, DecideError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(DecideError::MissingRequiredFields),
    }
}

pub fn decide_new_lead_event(
    lead_name: Option<String>,
    event_type: Option<String>,
    date_time: Option<String>,
    reminder_sent: Option<bool>,
) -> Result<NewLeadEvent, DecideError> {
    Ok(NewLeadEvent {
        lead_name: required(lead_name)?,
        event_type: required(event_type)?,
        date_time: required(date_time)?,
        reminder_sent,
    })
}
