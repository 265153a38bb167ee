pub mod expressvpn;
pub mod mullvad;
pub mod nordvpn;
pub mod private_internet_access;
pub mod surfshark;

use crate::error::{ProbeError, Result};
use serde::de::DeserializeOwned;

/// Decodes a JSON body into the provider's raw response type.
///
/// Required fields missing from the body fail the whole probe.
pub(crate) fn decode<T: DeserializeOwned>(provider: &'static str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|source| ProbeError::Decode { provider, source })
}
