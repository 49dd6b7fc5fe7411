use crate::domain::contact::ContactSubmission;
use crate::ports::contact::{
    ContactDispatchPort, DispatchError, DispatchReceipt, DispatchStrategy, UrlOpenerPort,
};
use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::sync::Arc;
use tracing::info;

/// Characters left alone by `encodeURIComponent`; everything else is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn compose_mailto_uri(recipient: &str, submission: &ContactSubmission) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        encode_component(recipient),
        encode_component(&submission.subject()),
        encode_component(&submission.plain_text_body())
    )
}

/// Dispatch by handing a prefilled `mailto:` URI to the system mail client.
pub struct MailtoDispatcher {
    recipient: String,
    opener: Arc<dyn UrlOpenerPort>,
}

impl MailtoDispatcher {
    pub fn new(recipient: impl Into<String>, opener: Arc<dyn UrlOpenerPort>) -> Self {
        Self {
            recipient: recipient.into(),
            opener,
        }
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }
}

#[async_trait]
impl ContactDispatchPort for MailtoDispatcher {
    fn strategy(&self) -> DispatchStrategy {
        DispatchStrategy::MailHandoff
    }

    async fn dispatch(
        &self,
        submission: &ContactSubmission,
    ) -> Result<DispatchReceipt, DispatchError> {
        let uri = compose_mailto_uri(&self.recipient, submission);
        self.opener
            .open(&uri)
            .map_err(|err| DispatchError::Handoff(format!("{err:#}")))?;
        info!(submission = %submission.id(), "contact handed off to mail client");
        Ok(DispatchReceipt::HandedOff { uri })
    }
}
