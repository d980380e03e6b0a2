use std::sync::Arc;

use relay_core_contact_contracts::{
    ContactSendMessageError, ContactService, DeliveryReceipt, DeliverySettingsStatus,
};
use relay_email_contracts::{Email, EmailService, SmtpRelay};
use relay_models::{
    contact::{ContactMessage, ContactSubmission, ContactSubmissionError},
    email_address::EmailAddress,
    smtp::SmtpTls,
    stats::DeliveryStats,
    Sensitive,
};
use relay_shared_contracts::{metrics::DeliveryMetricsService, time::TimeService};
use tracing::{debug, error, info};

#[derive(Debug, Clone)]
pub struct ContactServiceImpl<Email, Time, Metrics> {
    email: Email,
    time: Time,
    metrics: Metrics,
    config: ContactServiceConfig,
}

#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
    pub delivery: Arc<DeliverySettings>,
    /// Address the emails are sent from. Defaults to the recipient.
    pub sender: Option<Arc<EmailAddress>>,
    /// Value of the `X-Mailer` header
    pub mailer: Arc<str>,
}

/// Delivery settings as they were configured. Missing values are only
/// reported when a submission is about to be sent.
#[derive(Debug, Clone, Default)]
pub struct DeliverySettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub user: Option<String>,
    pub password: Option<Sensitive<String>>,
    pub recipient: Option<EmailAddress>,
    pub tls: SmtpTls,
    pub accept_invalid_certs: bool,
}

impl<EmailS, Time, Metrics> ContactServiceImpl<EmailS, Time, Metrics> {
    pub fn new(email: EmailS, time: Time, metrics: Metrics, config: ContactServiceConfig) -> Self {
        Self {
            email,
            time,
            metrics,
            config,
        }
    }
}

impl<EmailS, Time, Metrics> ContactService for ContactServiceImpl<EmailS, Time, Metrics>
where
    EmailS: EmailService,
    Time: TimeService,
    Metrics: DeliveryMetricsService,
{
    async fn send_message(
        &self,
        submission: ContactSubmission,
    ) -> Result<DeliveryReceipt, ContactSendMessageError> {
        self.metrics.record_attempt();

        let (message, reply_to) = validate(submission)
            .inspect_err(|err| debug!("rejected contact form submission: {err}"))?;

        let (relay, recipient) = self.config.delivery.resolve().map_err(|missing| {
            error!(?missing, "email configuration missing");
            self.metrics.record_failure();
            ContactSendMessageError::Config(missing)
        })?;

        let email = self.compose(&message, reply_to, recipient);

        debug!(host = %relay.host, port = relay.port, "forwarding contact form submission");
        match self.email.send(relay, email).await {
            Ok(sent) => {
                self.metrics.record_success();
                info!(message_id = %sent.message_id, "contact form submission delivered");
                Ok(DeliveryReceipt {
                    message_id: sent.message_id,
                })
            }
            Err(err) => {
                self.metrics.record_failure();
                error!("Failed to send contact form submission: {err:#}");
                Err(ContactSendMessageError::Delivery(err))
            }
        }
    }

    fn get_stats(&self) -> DeliveryStats {
        self.metrics.snapshot()
    }

    fn get_delivery_settings(&self) -> DeliverySettingsStatus {
        self.config.delivery.status()
    }
}

impl<EmailS, Time, Metrics> ContactServiceImpl<EmailS, Time, Metrics>
where
    Time: TimeService,
{
    fn compose(
        &self,
        message: &ContactMessage,
        reply_to: EmailAddress,
        recipient: EmailAddress,
    ) -> Email {
        let full_name = message.full_name();
        let timestamp = self.time.now().format("%Y-%m-%d %H:%M:%S UTC");

        let sender = self
            .config
            .sender
            .as_deref()
            .unwrap_or(&recipient)
            .clone()
            .with_name(full_name.clone());

        Email {
            sender,
            recipient: recipient.into(),
            reply_to: Some(reply_to.into()),
            subject: format!("Contact Form: New Message from {full_name}"),
            body: format!(
                "New Contact Form Submission\n\nName: {full_name}\nEmail: {}\nMessage: {}\n\n\
                 Timestamp: {timestamp}",
                *message.email, *message.content
            ),
            mailer: Some(self.config.mailer.to_string()),
        }
    }
}

/// Addresses that pass the form's pattern may still be rejected by the mail
/// builder. Both cases are reported as an invalid address.
fn validate(
    submission: ContactSubmission,
) -> Result<(ContactMessage, EmailAddress), ContactSubmissionError> {
    let message = ContactMessage::try_from(submission)?;
    let reply_to = message
        .email
        .parse()
        .map_err(|_| ContactSubmissionError::InvalidEmail)?;
    Ok((message, reply_to))
}

impl DeliverySettings {
    /// Return the relay and recipient, or the names of all missing settings.
    pub fn resolve(&self) -> Result<(SmtpRelay, EmailAddress), Vec<&'static str>> {
        fn present(value: &Option<String>) -> Option<&String> {
            value.as_ref().filter(|x| !x.is_empty())
        }

        let host = present(&self.host);
        let user = present(&self.user);
        let password = self.password.as_ref().filter(|x| !x.is_empty());

        match (host, self.port, user, password, &self.recipient) {
            (Some(host), Some(port), Some(user), Some(password), Some(recipient)) => Ok((
                SmtpRelay {
                    host: host.clone(),
                    port,
                    username: user.clone(),
                    password: password.clone(),
                    tls: self.tls,
                    accept_invalid_certs: self.accept_invalid_certs,
                },
                recipient.clone(),
            )),
            (host, port, user, password, recipient) => Err([
                ("host", host.is_none()),
                ("port", port.is_none()),
                ("user", user.is_none()),
                ("password", password.is_none()),
                ("recipient", recipient.is_none()),
            ]
            .into_iter()
            .filter_map(|(name, missing)| missing.then_some(name))
            .collect()),
        }
    }

    pub fn status(&self) -> DeliverySettingsStatus {
        DeliverySettingsStatus {
            host: self.host.clone().filter(|x| !x.is_empty()),
            port: self.port,
            user: self.user.as_ref().is_some_and(|x| !x.is_empty()),
            password: self.password.as_ref().is_some_and(|x| !x.is_empty()),
            recipient: self.recipient.is_some(),
        }
    }
}
