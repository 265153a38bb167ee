use super::decode;
use crate::error::Result;
use crate::status::VpnStatus;
use crate::transport::Transport;
use serde::Deserialize;

pub const NAME: &str = "Surfshark";
pub const URL: &str = "https://surfshark.com/api/v1/server/user";

#[derive(Debug, Deserialize)]
struct SurfsharkResponse {
    ip: String,
    secured: bool,
    city: String,
    region: String,
    country: String,
}

pub async fn probe(transport: &dyn Transport) -> Result<VpnStatus> {
    let body = transport.get(URL).await?;
    parse(&body)
}

pub fn parse(body: &str) -> Result<VpnStatus> {
    let resp: SurfsharkResponse = decode(NAME, body)?;
    let location = format!("{}, {}, {}", resp.country, resp.region, resp.city);
    Ok(VpnStatus::new(NAME, resp.ip, resp.secured, location))
}
