use anyhow::anyhow;
use clap::Subcommand;
use relay_config::Config;
use relay_email_contracts::{Email, EmailService, SmtpRelay};
use relay_email_impl::EmailServiceImpl;
use relay_models::email_address::{EmailAddress, EmailAddressWithName};
use tracing::info;

use crate::environment;

#[derive(Debug, Subcommand)]
pub enum EmailCommand {
    /// Send a test email using the configured smtp relay
    Test {
        /// Defaults to the configured recipient
        recipient: Option<EmailAddressWithName>,
    },
    /// Check that the configured smtp relay accepts the credentials
    Ping,
}

impl EmailCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        match self {
            EmailCommand::Test { recipient } => test(config, recipient).await,
            EmailCommand::Ping => ping(config).await,
        }
    }
}

async fn test(config: Config, recipient: Option<EmailAddressWithName>) -> anyhow::Result<()> {
    let (relay, configured_recipient) = relay(&config)?;
    let sender = config
        .contact
        .sender
        .clone()
        .unwrap_or_else(|| configured_recipient.clone());

    let sent = EmailServiceImpl::new()
        .send(
            relay,
            Email {
                sender: sender.with_name(config.contact.service_name.clone()),
                recipient: recipient.unwrap_or_else(|| configured_recipient.into()),
                reply_to: None,
                subject: "Email Deliverability Test".into(),
                body: "Email deliverability seems to be working!".into(),
                mailer: Some(config.contact.service_name),
            },
        )
        .await?;

    info!(message_id = %sent.message_id, "Test email sent");

    Ok(())
}

async fn ping(config: Config) -> anyhow::Result<()> {
    let (relay, _) = relay(&config)?;
    EmailServiceImpl::new().ping(relay).await?;
    info!("Smtp relay is reachable");
    Ok(())
}

fn relay(config: &Config) -> anyhow::Result<(SmtpRelay, EmailAddress)> {
    environment::delivery_settings(config)
        .resolve()
        .map_err(|missing| anyhow!("Email configuration missing: {}", missing.join(", ")))
}
