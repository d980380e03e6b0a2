use serde::{Deserialize, Serialize};

/// How the connection to the smtp relay is secured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmtpTls {
    /// Plain text only
    None,
    /// Upgrade with STARTTLS when the relay offers it
    #[default]
    Opportunistic,
    /// Fail unless the relay supports STARTTLS
    Required,
    /// Implicit TLS from the first byte (usually port 465)
    Wrapper,
}
