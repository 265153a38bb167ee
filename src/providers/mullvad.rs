use super::decode;
use crate::error::Result;
use crate::status::VpnStatus;
use crate::transport::Transport;
use serde::Deserialize;

pub const NAME: &str = "Mullvad";
pub const URL: &str = "https://ipv4.am.i.mullvad.net/json";

#[derive(Debug, Deserialize)]
struct MullvadResponse {
    ip: String,
    country: String,
    city: String,
    mullvad_exit_ip: bool,
    #[serde(default)]
    mullvad_exit_ip_hostname: Option<String>,
}

pub async fn probe(transport: &dyn Transport) -> Result<VpnStatus> {
    let body = transport.get(URL).await?;
    parse(&body)
}

pub fn parse(body: &str) -> Result<VpnStatus> {
    let resp: MullvadResponse = decode(NAME, body)?;

    let mut location = format!("{}, {}", resp.country, resp.city);
    if let Some(host) = resp.mullvad_exit_ip_hostname.filter(|h| !h.is_empty()) {
        location.push_str(&format!(" ({})", host));
    }

    Ok(VpnStatus::new(NAME, resp.ip, resp.mullvad_exit_ip, location))
}
