use super::value_object::SubmissionId;
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactDomainEvent {
    SubmissionStarted,
    Delivered,
    HandedOff,
    Failed { reason: String },
    Abandoned,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactEventEnvelope {
    pub submission_id: SubmissionId,
    pub occurred_at: DateTime<Utc>,
    pub event: ContactDomainEvent,
}

impl ContactEventEnvelope {
    pub fn new(submission_id: SubmissionId, event: ContactDomainEvent) -> Self {
        Self {
            submission_id,
            occurred_at: Utc::now(),
            event,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_records_timestamp() {
        let id = SubmissionId::new();
        let envelope = ContactEventEnvelope::new(id.clone(), ContactDomainEvent::Delivered);
        assert_eq!(id, envelope.submission_id);
        assert!(envelope.occurred_at <= Utc::now());
    }
}
