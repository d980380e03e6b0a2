use std::future::Future;

use relay_models::{email_address::EmailAddressWithName, smtp::SmtpTls, Sensitive};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait EmailService: Send + Sync + 'static {
    /// Open a connection to `relay`, deliver `email` and close the
    /// connection again.
    fn send(
        &self,
        relay: SmtpRelay,
        email: Email,
    ) -> impl Future<Output = anyhow::Result<SentEmail>> + Send;

    /// Check that `relay` accepts connections and credentials.
    fn ping(&self, relay: SmtpRelay) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// Connection settings for the upstream smtp server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmtpRelay {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Sensitive<String>,
    pub tls: SmtpTls,
    pub accept_invalid_certs: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    pub sender: EmailAddressWithName,
    pub recipient: EmailAddressWithName,
    pub reply_to: Option<EmailAddressWithName>,
    pub subject: String,
    /// Sent as `text/plain`
    pub body: String,
    /// Value of the `X-Mailer` header
    pub mailer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    /// The `Message-ID` the email was sent with
    pub message_id: String,
}

#[cfg(feature = "mock")]
impl MockEmailService {
    pub fn with_send(mut self, relay: SmtpRelay, email: Email, message_id: &str) -> Self {
        let sent = SentEmail {
            message_id: message_id.into(),
        };
        self.expect_send()
            .once()
            .with(
                mockall::predicate::eq(relay),
                mockall::predicate::eq(email),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Ok(sent))));
        self
    }

    pub fn with_send_error(mut self, relay: SmtpRelay, email: Email, error: &str) -> Self {
        let error = anyhow::anyhow!("{error}");
        self.expect_send()
            .once()
            .with(
                mockall::predicate::eq(relay),
                mockall::predicate::eq(email),
            )
            .return_once(move |_, _| Box::pin(std::future::ready(Err(error))));
        self
    }
}
