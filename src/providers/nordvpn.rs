use super::decode;
use crate::error::Result;
use crate::status::VpnStatus;
use crate::transport::Transport;
use serde::Deserialize;

pub const NAME: &str = "NordVPN";
pub const URL: &str = "https://nordvpn.com/wp-admin/admin-ajax.php?action=get_user_info_data";

// NordVPN already formats the location, so everything passes through.
#[derive(Debug, Deserialize)]
struct NordResponse {
    ip: String,
    status: bool,
    location: String,
}

pub async fn probe(transport: &dyn Transport) -> Result<VpnStatus> {
    let body = transport.get(URL).await?;
    parse(&body)
}

pub fn parse(body: &str) -> Result<VpnStatus> {
    let resp: NordResponse = decode(NAME, body)?;
    Ok(VpnStatus::new(NAME, resp.ip, resp.status, resp.location))
}
