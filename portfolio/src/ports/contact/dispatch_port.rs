use crate::domain::contact::ContactSubmission;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DispatchStrategy {
    MailHandoff,
    HostedRelay,
}

impl DispatchStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchStrategy::MailHandoff => "mail_handoff",
            DispatchStrategy::HostedRelay => "hosted_relay",
        }
    }
}

impl fmt::Display for DispatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchReceipt {
    /// Handed to the system mail client; delivery is not observable.
    HandedOff { uri: String },
    /// Accepted by the relay.
    Delivered { status: u16 },
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("relay rejected submission with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("relay unreachable: {0}")]
    Transport(String),
    #[error("mail client handoff failed: {0}")]
    Handoff(String),
}

#[async_trait]
pub trait ContactDispatchPort: Send + Sync {
    fn strategy(&self) -> DispatchStrategy;
    async fn dispatch(&self, submission: &ContactSubmission)
        -> Result<DispatchReceipt, DispatchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_labels_match_config_tags() {
        assert_eq!(DispatchStrategy::MailHandoff.to_string(), "mail_handoff");
        assert_eq!(DispatchStrategy::HostedRelay.as_str(), "hosted_relay");
        let rejected = DispatchError::Rejected {
            status: 429,
            body: "slow down".into(),
        };
        assert_eq!(
            rejected.to_string(),
            "relay rejected submission with status 429: slow down"
        );
    }
}
