#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateLeadEvent {
    pub lead_name: Option<String>,
    pub event_type: Option<String>,
    pub date_time: Option<String>,
    pub reminder_sent: Option<bool>,
}
