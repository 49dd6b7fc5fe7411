use crate::domain::contact::events::ContactEventEnvelope;
use crate::domain::contact::{ContactField, ContactFields, ContactForm, FormStatus};
use crate::ports::contact::{ContactDispatchPort, DispatchReceipt, DispatchStrategy};
use crate::telemetry::SiteMetrics;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use thiserror::Error;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

#[derive(Debug, Error)]
pub enum ContactServiceError {
    #[error("invalid submission: {0}")]
    Invalid(String),
    #[error("a submission is already in flight")]
    Busy,
    #[error("contact view is no longer mounted")]
    Detached,
    #[error("internal error: {0}")]
    Internal(String),
}

pub type ContactServiceResult<T> = Result<T, ContactServiceError>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered { notice: &'static str },
    HandedOff { uri: String, notice: &'static str },
    Failed { reason: String, notice: &'static str },
    /// The view went away while the dispatch was running; its result was dropped.
    Discarded,
}

impl SubmitOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmitOutcome::Delivered { .. } => "delivered",
            SubmitOutcome::HandedOff { .. } => "handed_off",
            SubmitOutcome::Failed { .. } => "failed",
            SubmitOutcome::Discarded => "discarded",
        }
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            SubmitOutcome::Delivered { notice }
            | SubmitOutcome::HandedOff { notice, .. }
            | SubmitOutcome::Failed { notice, .. } => Some(notice),
            SubmitOutcome::Discarded => None,
        }
    }
}

/// Application service behind the contact section: holds the form, validates
/// on submit and hands the message to the configured dispatcher.
pub struct ContactService {
    dispatcher: Arc<dyn ContactDispatchPort>,
    form: Mutex<ContactForm>,
    view: CancellationToken,
    metrics: Option<Arc<SiteMetrics>>,
}

impl ContactService {
    pub fn new(dispatcher: Arc<dyn ContactDispatchPort>, metrics: Option<Arc<SiteMetrics>>) -> Self {
        Self {
            dispatcher,
            form: Mutex::new(ContactForm::new()),
            view: CancellationToken::new(),
            metrics,
        }
    }

    pub fn strategy(&self) -> DispatchStrategy {
        self.dispatcher.strategy()
    }

    pub async fn update_field(
        &self,
        field: ContactField,
        value: impl Into<String>,
    ) -> ContactServiceResult<()> {
        self.ensure_mounted()?;
        let mut form = self.lock_form();
        form.set_field(field, value)
            .map_err(|_| ContactServiceError::Busy)
    }

    pub async fn fill(&self, fields: ContactFields) -> ContactServiceResult<()> {
        self.ensure_mounted()?;
        let mut form = self.lock_form();
        for field in [
            ContactField::Name,
            ContactField::Email,
            ContactField::Phone,
            ContactField::Message,
        ] {
            form.set_field(field, fields.get(field))
                .map_err(|_| ContactServiceError::Busy)?;
        }
        Ok(())
    }

    pub async fn form(&self) -> ContactForm {
        self.lock_form().clone()
    }

    pub async fn status(&self) -> FormStatus {
        self.lock_form().status().clone()
    }

    /// Validates and dispatches the current fields. Dropping the returned
    /// future before it resolves unlocks the form again as long as the view
    /// is still mounted.
    pub async fn submit(&self) -> ContactServiceResult<SubmitOutcome> {
        self.ensure_mounted()?;
        let (submission, started) = {
            let mut form = self.lock_form();
            if form.is_sending() {
                return Err(ContactServiceError::Busy);
            }
            form.begin_submit().map_err(ContactServiceError::Invalid)?
        };
        let mut in_flight = InFlightGuard {
            service: self,
            armed: true,
        };
        let strategy = self.dispatcher.strategy();
        log_event(&started);
        info!(submission = %submission.id(), %strategy, "dispatching contact submission");

        let started_at = Instant::now();
        let result = tokio::select! {
            biased;
            _ = self.view.cancelled() => None,
            result = self.dispatcher.dispatch(&submission) => Some(result),
        };
        let elapsed_ms = started_at.elapsed().as_secs_f64() * 1000.0;

        in_flight.disarm();

        let Some(result) = result.filter(|_| !self.view.is_cancelled()) else {
            debug!(submission = %submission.id(), "contact view unmounted, dropping dispatch result");
            self.record(strategy, "discarded", elapsed_ms);
            return Ok(SubmitOutcome::Discarded);
        };

        let mut form = self.lock_form();
        let (outcome, event) = match result {
            Ok(DispatchReceipt::Delivered { status }) => {
                debug!(status, "relay delivered contact submission");
                let event = form.complete_delivered().map_err(ContactServiceError::Internal)?;
                (SubmitOutcome::Delivered { notice: notice_of(&form) }, event)
            }
            Ok(DispatchReceipt::HandedOff { uri }) => {
                let event = form.complete_handed_off().map_err(ContactServiceError::Internal)?;
                (
                    SubmitOutcome::HandedOff {
                        uri,
                        notice: notice_of(&form),
                    },
                    event,
                )
            }
            Err(err) => {
                warn!(submission = %submission.id(), %strategy, "contact dispatch failed: {err}");
                let reason = err.to_string();
                let event = form.fail(reason.clone()).map_err(ContactServiceError::Internal)?;
                (
                    SubmitOutcome::Failed {
                        reason,
                        notice: notice_of(&form),
                    },
                    event,
                )
            }
        };
        log_event(&event);
        self.record(strategy, outcome.as_str(), elapsed_ms);
        Ok(outcome)
    }

    /// Detaches the view. A dispatch still running is left to finish on its
    /// own but its result never reaches the form.
    pub fn unmount(&self) {
        if !self.view.is_cancelled() {
            info!("contact view unmounted");
        }
        self.view.cancel();
    }

    pub fn is_mounted(&self) -> bool {
        !self.view.is_cancelled()
    }

    fn ensure_mounted(&self) -> ContactServiceResult<()> {
        if self.view.is_cancelled() {
            return Err(ContactServiceError::Detached);
        }
        Ok(())
    }

    fn lock_form(&self) -> MutexGuard<'_, ContactForm> {
        self.form.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, strategy: DispatchStrategy, outcome: &str, elapsed_ms: f64) {
        if let Some(metrics) = &self.metrics {
            metrics.record_contact_dispatch(strategy.as_str(), outcome, elapsed_ms);
        }
    }
}

/// Armed between `begin_submit` and the dispatcher's answer. If the submit
/// future is dropped in that window the form would otherwise stay `Sending`.
struct InFlightGuard<'a> {
    service: &'a ContactService,
    armed: bool,
}

impl InFlightGuard<'_> {
    fn disarm(&mut self) {
        self.armed = false;
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        // after unmount the form belongs to nobody
        if !self.armed || !self.service.is_mounted() {
            return;
        }
        match self.service.lock_form().abandon() {
            Ok(event) => {
                warn!(submission = %event.submission_id, "contact submit cancelled before dispatch finished");
                log_event(&event);
            }
            Err(err) => debug!("nothing to abandon: {err}"),
        }
    }
}

fn notice_of(form: &ContactForm) -> &'static str {
    form.notice().unwrap_or_default()
}

fn log_event(envelope: &ContactEventEnvelope) {
    debug!(
        submission = %envelope.submission_id,
        at = %envelope.occurred_at,
        event = ?envelope.event,
        "contact event"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::contact::aggregate::{DELIVERED_NOTICE, FAILED_NOTICE, HANDED_OFF_NOTICE};
    use crate::domain::contact::ContactSubmission;
    use crate::ports::contact::DispatchError;
    use async_trait::async_trait;
    use std::sync::Mutex as StdMutex;
    use tokio::sync::Notify;

    enum Reply {
        Deliver,
        HandOff,
        Reject,
    }

    struct StubDispatcher {
        reply: Reply,
        gate: Option<Arc<Notify>>,
        seen: StdMutex<Vec<ContactSubmission>>,
    }

    impl StubDispatcher {
        fn new(reply: Reply) -> Self {
            Self {
                reply,
                gate: None,
                seen: StdMutex::new(Vec::new()),
            }
        }

        fn gated(reply: Reply, gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::new(reply)
            }
        }
    }

    #[async_trait]
    impl ContactDispatchPort for StubDispatcher {
        fn strategy(&self) -> DispatchStrategy {
            match self.reply {
                Reply::HandOff => DispatchStrategy::MailHandoff,
                _ => DispatchStrategy::HostedRelay,
            }
        }

        async fn dispatch(
            &self,
            submission: &ContactSubmission,
        ) -> Result<DispatchReceipt, DispatchError> {
            self.seen.lock().unwrap().push(submission.clone());
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match self.reply {
                Reply::Deliver => Ok(DispatchReceipt::Delivered { status: 200 }),
                Reply::HandOff => Ok(DispatchReceipt::HandedOff {
                    uri: "mailto:owner%40example.com".into(),
                }),
                Reply::Reject => Err(DispatchError::Rejected {
                    status: 500,
                    body: "quota exceeded".into(),
                }),
            }
        }
    }

    fn fields() -> ContactFields {
        ContactFields {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: String::new(),
            message: "Hello there".into(),
        }
    }

    #[tokio::test]
    async fn delivered_submission_clears_form() {
        let stub = Arc::new(StubDispatcher::new(Reply::Deliver));
        let service = ContactService::new(stub.clone(), None);
        service.fill(fields()).await.unwrap();

        let outcome = service.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Delivered { notice: DELIVERED_NOTICE });
        assert_eq!(service.form().await.fields(), &ContactFields::default());
        assert_eq!(service.status().await, FormStatus::Delivered);

        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].name(), "Ada");
        assert_eq!(seen[0].phone(), None);
    }

    #[tokio::test]
    async fn failed_submission_keeps_fields() {
        let service = ContactService::new(Arc::new(StubDispatcher::new(Reply::Reject)), None);
        service.fill(fields()).await.unwrap();

        let outcome = service.submit().await.unwrap();
        match &outcome {
            SubmitOutcome::Failed { reason, notice } => {
                assert!(reason.contains("500"));
                assert_eq!(*notice, FAILED_NOTICE);
            }
            other => panic!("unexpected outcome {other:?}"),
        }
        assert_eq!(service.form().await.fields(), &fields());
        assert_eq!(service.status().await.as_str(), "failed");

        // editing after a failure returns the form to editing
        service
            .update_field(ContactField::Message, "Second try")
            .await
            .unwrap();
        assert_eq!(service.status().await, FormStatus::Editing);
    }

    #[tokio::test]
    async fn handoff_keeps_fields_and_returns_uri() {
        let service = ContactService::new(Arc::new(StubDispatcher::new(Reply::HandOff)), None);
        service.fill(fields()).await.unwrap();

        let outcome = service.submit().await.unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::HandedOff {
                uri: "mailto:owner%40example.com".into(),
                notice: HANDED_OFF_NOTICE,
            }
        );
        assert_eq!(service.form().await.fields(), &fields());
        assert_eq!(service.strategy(), DispatchStrategy::MailHandoff);
    }

    #[tokio::test]
    async fn missing_required_field_never_dispatches() {
        let stub = Arc::new(StubDispatcher::new(Reply::Deliver));
        let service = ContactService::new(stub.clone(), None);
        let mut partial = fields();
        partial.email = "  ".into();
        service.fill(partial).await.unwrap();

        let err = service.submit().await.unwrap_err();
        assert!(matches!(err, ContactServiceError::Invalid(ref msg) if msg.contains("email")));
        assert!(stub.seen.lock().unwrap().is_empty());
        assert_eq!(service.status().await, FormStatus::Editing);
    }

    #[tokio::test]
    async fn in_flight_submission_locks_form() {
        let gate = Arc::new(Notify::new());
        let stub = Arc::new(StubDispatcher::gated(Reply::Deliver, gate.clone()));
        let service = Arc::new(ContactService::new(stub.clone(), None));
        service.fill(fields()).await.unwrap();

        let task = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit().await }
        });
        while stub.seen.lock().unwrap().is_empty() {
            tokio::task::yield_now().await;
        }

        assert_eq!(service.status().await, FormStatus::Sending);
        assert!(matches!(service.submit().await, Err(ContactServiceError::Busy)));
        assert!(matches!(
            service.update_field(ContactField::Name, "Grace").await,
            Err(ContactServiceError::Busy)
        ));

        gate.notify_one();
        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome.as_str(), "delivered");
    }

    #[tokio::test]
    async fn dropped_submit_unlocks_form_for_retry() {
        let gate = Arc::new(Notify::new());
        let stub = Arc::new(StubDispatcher::gated(Reply::Deliver, gate.clone()));
        let service = ContactService::new(stub.clone(), None);
        service.fill(fields()).await.unwrap();

        // caller gives up while the dispatcher is still waiting
        let timed_out =
            tokio::time::timeout(std::time::Duration::from_millis(20), service.submit()).await;
        assert!(timed_out.is_err());
        assert_eq!(stub.seen.lock().unwrap().len(), 1);
        assert!(service.is_mounted());
        assert_eq!(service.status().await, FormStatus::Editing);
        assert_eq!(service.form().await.fields(), &fields());

        service
            .update_field(ContactField::Message, "Hello again")
            .await
            .unwrap();
        // permit is stored for the next dispatch
        gate.notify_one();
        let outcome = service.submit().await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Delivered { notice: DELIVERED_NOTICE });
        let seen = stub.seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[1].message(), "Hello again");
    }

    #[tokio::test]
    async fn dropped_submit_after_unmount_leaves_form_alone() {
        let gate = Arc::new(Notify::new());
        let stub = Arc::new(StubDispatcher::gated(Reply::Deliver, gate));
        let service = ContactService::new(stub.clone(), None);
        service.fill(fields()).await.unwrap();

        let submit = service.submit();
        tokio::pin!(submit);
        let pending =
            tokio::time::timeout(std::time::Duration::from_millis(5), submit.as_mut()).await;
        assert!(pending.is_err());
        service.unmount();
        drop(submit);
        assert_eq!(service.status().await, FormStatus::Sending);
    }

    #[tokio::test]
    async fn unmount_discards_pending_result() {
        let gate = Arc::new(Notify::new());
        let stub = Arc::new(StubDispatcher::gated(Reply::Deliver, gate.clone()));
        let service = Arc::new(ContactService::new(stub.clone(), None));
        service.fill(fields()).await.unwrap();

        let task = tokio::spawn({
            let service = Arc::clone(&service);
            async move { service.submit().await }
        });
        while stub.seen.lock().unwrap().is_empty() {
            tokio::task::yield_now().await;
        }

        service.unmount();
        assert!(!service.is_mounted());
        let outcome = task.await.unwrap().unwrap();
        assert_eq!(outcome, SubmitOutcome::Discarded);
        assert_eq!(outcome.notice(), None);
        // form was never resolved
        assert_eq!(service.status().await, FormStatus::Sending);
        assert!(matches!(service.submit().await, Err(ContactServiceError::Detached)));
    }
}
