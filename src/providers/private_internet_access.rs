use super::decode;
use crate::error::Result;
use crate::status::VpnStatus;
use crate::transport::Transport;
use log::debug;
use serde::Deserialize;
use serde_json::json;

pub const NAME: &str = "Private Internet Access";
pub const LOCATION_URL: &str = "https://www.privateinternetaccess.com/site-api/get-location-info";
pub const EXPOSED_URL: &str = "https://www.privateinternetaccess.com/site-api/exposed-check";

#[derive(Debug, Deserialize)]
struct LocationInfo {
    ip: String,
    cn: String,
    cty: String,
    rgn: String,
}

#[derive(Debug, Deserialize)]
struct ExposedCheck {
    /// True when the address is exposed, i.e. not behind PIA.
    #[serde(default)]
    status: Option<bool>,
}

/// Looks up the current address, then asks PIA whether that address is
/// exposed. The second request is only sent once the first one decoded.
pub async fn probe(transport: &dyn Transport) -> Result<VpnStatus> {
    let info = fetch_location(transport).await?;
    debug!("{}: checking exposure of {}", NAME, info.ip);
    let exposed = fetch_exposed(transport, &info.ip).await?;
    Ok(into_status(info, exposed))
}

async fn fetch_location(transport: &dyn Transport) -> Result<LocationInfo> {
    let body = transport.get(LOCATION_URL).await?;
    decode(NAME, &body)
}

async fn fetch_exposed(transport: &dyn Transport, ip: &str) -> Result<ExposedCheck> {
    let body = transport
        .post_json(EXPOSED_URL, &json!({ "ipAddress": ip }))
        .await?;
    decode(NAME, &body)
}

fn into_status(info: LocationInfo, exposed: ExposedCheck) -> VpnStatus {
    let location = format!("{}, {}, {}", info.cn, info.rgn, info.cty);
    let protected = exposed.status.is_some_and(|exposed| !exposed);
    VpnStatus::new(NAME, info.ip, protected, location)
}
