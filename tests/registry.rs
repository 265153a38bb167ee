use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use vpnstatus::providers::{expressvpn, mullvad, nordvpn, private_internet_access, surfshark};
use vpnstatus::registry::KEYS;
use vpnstatus::transport::Transport;
use vpnstatus::{ProbeError, Registry, VpnStatus};

/// Serves canned bodies after a small delay so probes overlap.
#[derive(Default)]
struct SlowTransport {
    bodies: HashMap<&'static str, &'static str>,
    seen: Mutex<Vec<String>>,
}

impl SlowTransport {
    fn answer(&self, url: &str) -> vpnstatus::error::Result<String> {
        self.seen.lock().unwrap().push(url.to_string());
        match self.bodies.get(url) {
            Some(body) => Ok(body.to_string()),
            None => Err(ProbeError::Transport(
                reqwest::Client::new().get("::").build().unwrap_err(),
            )),
        }
    }
}

#[async_trait]
impl Transport for SlowTransport {
    async fn get(&self, url: &str) -> vpnstatus::error::Result<String> {
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.answer(url)
    }

    async fn post_json(
        &self,
        url: &str,
        _body: &serde_json::Value,
    ) -> vpnstatus::error::Result<String> {
        tokio::time::sleep(Duration::from_millis(20)).await;
        self.answer(url)
    }
}

fn everything_up() -> SlowTransport {
    let mut bodies = HashMap::new();
    bodies.insert(
        mullvad::URL,
        r#"{"ip":"1.2.3.4","country":"Sweden","city":"Stockholm","mullvad_exit_ip":true,"mullvad_exit_ip_hostname":"se-sto-wg-001"}"#,
    );
    bodies.insert(
        nordvpn::URL,
        r#"{"ip":"2.2.2.2","status":false,"location":"Poland, Warsaw"}"#,
    );
    bodies.insert(
        expressvpn::URL,
        r#"<div class="ip-address"><span class="ip-address-green">3.3.3.3</span></div>
           <section><h6>Location</h6><h4>Japan, Tokyo</h4></section>"#,
    );
    bodies.insert(
        surfshark::URL,
        r#"{"ip":"5.6.7.8","secured":false,"city":"Oslo","region":"Oslo","country":"Norway"}"#,
    );
    bodies.insert(
        private_internet_access::LOCATION_URL,
        r#"{"ip":"7.7.7.7","cn":"US","cty":"Dallas","rgn":"Texas"}"#,
    );
    bodies.insert(private_internet_access::EXPOSED_URL, r#"{"status":false}"#);
    SlowTransport {
        bodies,
        ..Default::default()
    }
}

#[tokio::test]
async fn all_providers_concurrently() {
    let registry = Registry::new(Arc::new(everything_up()));
    let results = registry.probe_all().await;

    let keys: Vec<_> = results.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, KEYS.to_vec());

    let statuses: Vec<VpnStatus> = results.into_iter().map(|(_, r)| r.unwrap()).collect();
    assert_eq!(
        statuses,
        vec![
            VpnStatus::new("Mullvad", "1.2.3.4", true, "Sweden, Stockholm (se-sto-wg-001)"),
            VpnStatus::new("NordVPN", "2.2.2.2", false, "Poland, Warsaw"),
            VpnStatus::new("ExpressVPN", "3.3.3.3", true, "Japan, Tokyo"),
            VpnStatus::new("Surfshark", "5.6.7.8", false, "Norway, Oslo, Oslo"),
            VpnStatus::new("Private Internet Access", "7.7.7.7", true, "US, Texas, Dallas"),
        ]
    );
}

#[tokio::test]
async fn repeated_probes_do_not_share_state() {
    let registry = Registry::new(Arc::new(everything_up()));
    let probe = registry.get("surfshark").unwrap().clone();

    let (a, b) = tokio::join!(probe(), probe());
    assert_eq!(a.unwrap(), b.unwrap());
}

#[tokio::test]
async fn pia_stops_after_failed_lookup() {
    let mut transport = everything_up();
    transport.bodies.remove(private_internet_access::LOCATION_URL);
    let transport = Arc::new(transport);
    let registry = Registry::new(transport.clone());

    let err = registry.probe("privateinternetaccess").await.unwrap_err();
    assert!(matches!(err, ProbeError::Transport(_)));

    let seen = transport.seen.lock().unwrap();
    assert!(!seen.iter().any(|u| u == private_internet_access::EXPOSED_URL));
}

#[tokio::test]
async fn selected_keys_keep_request_order() {
    let registry = Registry::new(Arc::new(everything_up()));
    let results = registry.probe_many(&["surfshark", "nope", "mullvad"]).await;

    assert_eq!(results[0].0, "surfshark");
    assert_eq!(results[0].1.as_ref().unwrap().name, "Surfshark");
    assert!(matches!(results[1].1, Err(ProbeError::UnknownProvider(_))));
    assert_eq!(results[2].1.as_ref().unwrap().name, "Mullvad");
}
