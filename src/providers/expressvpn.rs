use crate::error::Result;
use crate::scrape::{self, Page};
use crate::status::VpnStatus;
use crate::transport::Transport;

pub const NAME: &str = "ExpressVPN";
pub const URL: &str = "https://www.expressvpn.com/what-is-my-ip";

const UNKNOWN: &str = "Unknown";
const IP_SELECTOR: &str = ".ip-address > span";
const LOCATION_LABEL: &str = "Location";

pub async fn probe(transport: &dyn Transport) -> Result<VpnStatus> {
    let body = transport.get(URL).await?;
    parse(&body)
}

/// Scrapes the "what is my ip" page.
///
/// Unlike the JSON providers, missing markup never fails the probe: the IP
/// and location fall back to `"Unknown"` and the status to `false`.
pub fn parse(body: &str) -> Result<VpnStatus> {
    let page = Page::parse(body);

    let ip_el = page.select_first(IP_SELECTOR)?;
    let ip = ip_el
        .as_ref()
        .map(scrape::trimmed_text)
        .unwrap_or_else(|| UNKNOWN.to_string());
    // The badge is styled green only when the IP belongs to ExpressVPN.
    let status = ip_el
        .as_ref()
        .is_some_and(|el| scrape::class_list(el).contains("green"));

    let location = location(&page)?.unwrap_or_else(|| UNKNOWN.to_string());

    Ok(VpnStatus::new(NAME, ip, status, location))
}

// The value sits in an h4 next to an h6 labelled "Location" inside the same
// card, so only the first such label is considered.
fn location(page: &Page) -> Result<Option<String>> {
    let h4 = scrape::selector_for("h4")?;
    let label = page
        .select_all("h6")?
        .into_iter()
        .find(|h| scrape::text(h) == LOCATION_LABEL);

    Ok(label
        .and_then(|h| scrape::find_in_parent(&h, &h4))
        .map(|el| scrape::trimmed_text(&el)))
}
