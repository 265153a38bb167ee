use serde::Serialize;
use std::fmt;

/// The normalized answer of one provider check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VpnStatus {
    pub ip: String,
    /// True when the provider confirms the observed IP is one of its exits.
    pub status: bool,
    pub location: String,
    /// Display name of the provider, fixed per adapter.
    pub name: String,
}

impl VpnStatus {
    pub fn new(
        name: &str,
        ip: impl Into<String>,
        status: bool,
        location: impl Into<String>,
    ) -> Self {
        Self {
            ip: ip.into(),
            status,
            location: location.into(),
            name: name.to_string(),
        }
    }
}

impl fmt::Display for VpnStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.status {
            "PROTECTED"
        } else {
            "NOT PROTECTED"
        };
        write!(f, "{}: {} - {} ({})", self.name, state, self.ip, self.location)
    }
}
