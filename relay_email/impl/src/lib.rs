use anyhow::{anyhow, ensure};
use lettre::{
    message::header::{self, Header, HeaderName, HeaderValue},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use relay_email_contracts::{Email, EmailService, SentEmail, SmtpRelay};
use relay_models::smtp::SmtpTls;
use tracing::{debug, trace};
use uuid::Uuid;

/// Sends every email over its own smtp connection.
///
/// A transport is built for each call and dropped when the call returns, so
/// no connection state is carried over from one message to the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailServiceImpl;

impl EmailServiceImpl {
    pub fn new() -> Self {
        Self
    }
}

impl EmailService for EmailServiceImpl {
    async fn send(&self, relay: SmtpRelay, email: Email) -> anyhow::Result<SentEmail> {
        let message_id = generate_message_id(&email);
        let message = build_message(email, message_id.clone())?;

        let transport = transport(&relay)?;
        debug!(host = %relay.host, port = relay.port, %message_id, "sending email");
        let response = transport.send(message).await?;
        trace!(code = %response.code(), "smtp relay responded");

        ensure!(
            response.is_positive(),
            "smtp relay rejected the message with code {}",
            response.code()
        );

        Ok(SentEmail { message_id })
    }

    async fn ping(&self, relay: SmtpRelay) -> anyhow::Result<()> {
        transport(&relay)?
            .test_connection()
            .await?
            .then_some(())
            .ok_or_else(|| anyhow!("Failed to ping smtp server"))
    }
}

fn transport(relay: &SmtpRelay) -> anyhow::Result<AsyncSmtpTransport<Tokio1Executor>> {
    let tls_parameters = || {
        TlsParameters::builder(relay.host.clone())
            .dangerous_accept_invalid_certs(relay.accept_invalid_certs)
            .build_rustls()
    };

    let tls = match relay.tls {
        SmtpTls::None => Tls::None,
        SmtpTls::Opportunistic => Tls::Opportunistic(tls_parameters()?),
        SmtpTls::Required => Tls::Required(tls_parameters()?),
        SmtpTls::Wrapper => Tls::Wrapper(tls_parameters()?),
    };

    let credentials = Credentials::new(relay.username.clone(), relay.password.0.clone());

    Ok(
        AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&relay.host)
            .port(relay.port)
            .tls(tls)
            .credentials(credentials)
            .build(),
    )
}

fn generate_message_id(email: &Email) -> String {
    format!("<{}@{}>", Uuid::new_v4(), email.sender.0.email.domain())
}

fn build_message(email: Email, message_id: String) -> anyhow::Result<Message> {
    let mut builder = Message::builder()
        .message_id(Some(message_id))
        .from(email.sender.0)
        .to(email.recipient.0);

    if let Some(reply_to) = email.reply_to {
        builder = builder.reply_to(reply_to.0);
    }

    if let Some(mailer) = email.mailer {
        builder = builder.header(XMailer(mailer));
    }

    builder
        .subject(email.subject)
        .header(header::ContentType::TEXT_PLAIN)
        .body(email.body)
        .map_err(Into::into)
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct XMailer(String);

impl Header for XMailer {
    fn name() -> HeaderName {
        HeaderName::new_from_ascii_str("X-Mailer")
    }

    fn parse(s: &str) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        Ok(Self(s.into()))
    }

    fn display(&self) -> HeaderValue {
        HeaderValue::new(Self::name(), self.0.clone())
    }
}
