use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A bare email address like `ada@example.com`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

/// An email address together with an optional display name, like
/// `"Ada Lovelace" <ada@example.com>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    pub fn domain(&self) -> &str {
        self.0.domain()
    }

    pub fn with_name(self, name: impl Into<String>) -> EmailAddressWithName {
        EmailAddressWithName(lettre::message::Mailbox::new(Some(name.into()), self.0))
    }
}

impl From<EmailAddress> for EmailAddressWithName {
    fn from(value: EmailAddress) -> Self {
        Self(lettre::message::Mailbox::new(None, value.0))
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}
