use crate::domain::contact::ContactSubmission;
use crate::ports::contact::{ContactDispatchPort, DispatchError, DispatchReceipt, DispatchStrategy};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// The three opaque identifiers the hosted relay routes a message by.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayCredentials {
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("service_id", &self.service_id),
            ("template_id", &self.template_id),
            ("public_key", &self.public_key),
        ] {
            if value.trim().is_empty() {
                return Err(format!("relay {name} cannot be empty"));
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    message: &'a str,
}

/// Sends the form fields to a hosted transactional-email relay.
pub struct HostedRelayDispatcher {
    client: reqwest::Client,
    endpoint: String,
    credentials: RelayCredentials,
}

impl HostedRelayDispatcher {
    pub fn new(endpoint: impl Into<String>, credentials: RelayCredentials) -> Result<Self, String> {
        credentials.validate()?;
        let endpoint = endpoint.into();
        reqwest::Url::parse(&endpoint)
            .map_err(|err| format!("invalid relay endpoint '{endpoint}': {err}"))?;
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint,
            credentials,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ContactDispatchPort for HostedRelayDispatcher {
    fn strategy(&self) -> DispatchStrategy {
        DispatchStrategy::HostedRelay
    }

    async fn dispatch(
        &self,
        submission: &ContactSubmission,
    ) -> Result<DispatchReceipt, DispatchError> {
        let request = RelayRequest {
            service_id: &self.credentials.service_id,
            template_id: &self.credentials.template_id,
            user_id: &self.credentials.public_key,
            template_params: TemplateParams {
                name: submission.name(),
                email: submission.email().as_str(),
                phone: submission.phone().unwrap_or(""),
                message: submission.message(),
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|err| DispatchError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            info!(submission = %submission.id(), status = status.as_u16(), "relay accepted contact");
            return Ok(DispatchReceipt::Delivered {
                status: status.as_u16(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(err) => {
                debug!(submission = %submission.id(), status = status.as_u16(), "failed to read relay error body: {err}");
                String::new()
            }
        };
        warn!(submission = %submission.id(), status = status.as_u16(), %body, "relay rejected contact");
        Err(DispatchError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
