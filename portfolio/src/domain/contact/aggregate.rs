use super::events::{ContactDomainEvent, ContactEventEnvelope};
use super::value_object::{ContactField, ContactFields, ContactSubmission, SubmissionId};
use std::fmt;

pub const DELIVERED_NOTICE: &str = "Thanks for reaching out! Your message has been sent.";
pub const HANDED_OFF_NOTICE: &str = "Your mail app should open with the message ready to send.";
pub const FAILED_NOTICE: &str = "Something went wrong while sending your message. Please try again.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormStatus {
    Editing,
    Sending,
    Delivered,
    HandedOff,
    Failed { reason: String },
}

impl FormStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormStatus::Editing => "editing",
            FormStatus::Sending => "sending",
            FormStatus::Delivered => "delivered",
            FormStatus::HandedOff => "handed_off",
            FormStatus::Failed { .. } => "failed",
        }
    }
}

impl fmt::Display for FormStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The contact form as the visitor sees it: current field values plus the
/// outcome of the last submit.
#[derive(Clone, Debug)]
pub struct ContactForm {
    fields: ContactFields,
    status: FormStatus,
    in_flight: Option<SubmissionId>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::with_fields(ContactFields::default())
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            status: FormStatus::Editing,
            in_flight: None,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) -> Result<(), String> {
        if self.in_flight.is_some() {
            return Err("form is locked while a submission is in flight".into());
        }
        self.fields.set(field, value);
        if !matches!(self.status, FormStatus::Editing) {
            self.status = FormStatus::Editing;
        }
        Ok(())
    }

    pub fn begin_submit(&mut self) -> Result<(ContactSubmission, ContactEventEnvelope), String> {
        if self.in_flight.is_some() {
            return Err("a submission is already in flight".into());
        }
        let submission = ContactSubmission::from_fields(&self.fields)?;
        self.in_flight = Some(submission.id().clone());
        self.status = FormStatus::Sending;
        let event = ContactEventEnvelope::new(
            submission.id().clone(),
            ContactDomainEvent::SubmissionStarted,
        );
        Ok((submission, event))
    }

    /// Relay accepted the message: acknowledge and clear the form.
    pub fn complete_delivered(&mut self) -> Result<ContactEventEnvelope, String> {
        let id = self.take_in_flight()?;
        self.fields = ContactFields::default();
        self.status = FormStatus::Delivered;
        Ok(ContactEventEnvelope::new(id, ContactDomainEvent::Delivered))
    }

    /// Mail client took over. The app cannot tell whether the mail was sent,
    /// so the fields stay as typed.
    pub fn complete_handed_off(&mut self) -> Result<ContactEventEnvelope, String> {
        let id = self.take_in_flight()?;
        self.status = FormStatus::HandedOff;
        Ok(ContactEventEnvelope::new(id, ContactDomainEvent::HandedOff))
    }

    pub fn fail(&mut self, reason: impl Into<String>) -> Result<ContactEventEnvelope, String> {
        let id = self.take_in_flight()?;
        let reason = reason.into();
        self.status = FormStatus::Failed {
            reason: reason.clone(),
        };
        Ok(ContactEventEnvelope::new(
            id,
            ContactDomainEvent::Failed { reason },
        ))
    }

    /// The submit was cancelled before the dispatcher answered. Unlocks the
    /// form with the fields untouched so the visitor can edit and retry.
    pub fn abandon(&mut self) -> Result<ContactEventEnvelope, String> {
        let id = self.take_in_flight()?;
        self.status = FormStatus::Editing;
        Ok(ContactEventEnvelope::new(id, ContactDomainEvent::Abandoned))
    }

    fn take_in_flight(&mut self) -> Result<SubmissionId, String> {
        self.in_flight
            .take()
            .ok_or_else(|| "no submission in flight".to_string())
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// User-facing acknowledgment or retry prompt for the last submit.
    pub fn notice(&self) -> Option<&'static str> {
        match self.status {
            FormStatus::Delivered => Some(DELIVERED_NOTICE),
            FormStatus::HandedOff => Some(HANDED_OFF_NOTICE),
            FormStatus::Failed { .. } => Some(FAILED_NOTICE),
            FormStatus::Editing | FormStatus::Sending => None,
        }
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(ContactField::Name, "Grace").unwrap();
        form.set_field(ContactField::Email, "grace@navy.mil").unwrap();
        form.set_field(ContactField::Message, "COBOL?").unwrap();
        form
    }

    #[test]
    fn delivered_clears_fields() {
        let mut form = filled();
        let (_submission, event) = form.begin_submit().unwrap();
        assert_eq!(event.event, ContactDomainEvent::SubmissionStarted);
        assert!(form.is_sending());
        let event = form.complete_delivered().unwrap();
        assert_eq!(event.event, ContactDomainEvent::Delivered);
        assert!(form.fields().is_blank());
        assert_eq!(form.notice(), Some(DELIVERED_NOTICE));
    }

    #[test]
    fn failure_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.fail("relay returned 500").unwrap();
        assert_eq!(form.fields().name, "Grace");
        assert!(matches!(form.status(), FormStatus::Failed { .. }));
        assert_eq!(form.notice(), Some(FAILED_NOTICE));
    }

    #[test]
    fn handoff_keeps_fields() {
        let mut form = filled();
        form.begin_submit().unwrap();
        form.complete_handed_off().unwrap();
        assert_eq!(form.fields().message, "COBOL?");
        assert_eq!(form.status(), &FormStatus::HandedOff);
    }

    #[test]
    fn invalid_fields_do_not_start_submission() {
        let mut form = ContactForm::new();
        assert!(form.begin_submit().is_err());
        assert_eq!(form.status(), &FormStatus::Editing);
        assert!(!form.is_sending());
    }

    #[test]
    fn in_flight_submission_locks_form() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(form.begin_submit().is_err());
        assert!(form.set_field(ContactField::Name, "Someone else").is_err());
        form.fail("offline").unwrap();
        form.set_field(ContactField::Name, "Grace Hopper").unwrap();
        assert_eq!(form.status(), &FormStatus::Editing);
    }

    #[test]
    fn completion_requires_in_flight_submission() {
        let mut form = filled();
        assert!(form.complete_delivered().is_err());
        assert!(form.fail("nothing to fail").is_err());
        assert!(form.abandon().is_err());
    }

    #[test]
    fn abandoned_submission_unlocks_form() {
        let mut form = filled();
        form.begin_submit().unwrap();
        let event = form.abandon().unwrap();
        assert_eq!(event.event, ContactDomainEvent::Abandoned);
        assert!(!form.is_sending());
        assert_eq!(form.status(), &FormStatus::Editing);
        assert_eq!(form.fields().name, "Grace");
        assert_eq!(form.notice(), None);
        form.begin_submit().unwrap();
    }
}
