//! Wiring of the concrete service implementations

use std::sync::Arc;

use relay_api_rest::RestServerConfig;
use relay_config::{Config, Mode};
use relay_core_contact_impl::{ContactServiceConfig, ContactServiceImpl, DeliverySettings};
use relay_core_health_impl::HealthServiceImpl;
use relay_email_impl::EmailServiceImpl;
use relay_shared_impl::{metrics::DeliveryMetricsServiceImpl, time::TimeServiceImpl};

pub type Health = HealthServiceImpl<TimeServiceImpl>;
pub type Contact = ContactServiceImpl<EmailServiceImpl, TimeServiceImpl, DeliveryMetricsServiceImpl>;
pub type RestServer = relay_api_rest::RestServer<Health, Contact>;

pub fn rest_server(config: &Config) -> RestServer {
    let time = TimeServiceImpl;

    let health = HealthServiceImpl::new(time);
    let contact = ContactServiceImpl::new(
        EmailServiceImpl::new(),
        time,
        DeliveryMetricsServiceImpl::default(),
        contact_service_config(config),
    );

    RestServer::new(health, contact, rest_server_config(config))
}

pub fn rest_server_config(config: &Config) -> RestServerConfig {
    RestServerConfig {
        service_name: config.contact.service_name.as_str().into(),
        development: config.mode == Mode::Development,
        cors: config.http.cors,
    }
}

pub fn contact_service_config(config: &Config) -> ContactServiceConfig {
    ContactServiceConfig {
        delivery: delivery_settings(config).into(),
        sender: config.contact.sender.clone().map(Arc::new),
        mailer: config.contact.service_name.as_str().into(),
    }
}

pub fn delivery_settings(config: &Config) -> DeliverySettings {
    let email = &config.email;
    DeliverySettings {
        host: email.host.clone(),
        port: email.port,
        user: email.user.clone(),
        password: email.password.clone(),
        recipient: email.recipient.clone(),
        tls: email.tls,
        accept_invalid_certs: email.accept_invalid_certs,
    }
}
