use crate::configuration::ClientSettings;
use crate::error::{ProbeError, Result};
use crate::providers::{expressvpn, mullvad, nordvpn, private_internet_access, surfshark};
use crate::status::VpnStatus;
use crate::transport::{HttpTransport, Transport};

use futures::future::{join_all, BoxFuture};
use futures::FutureExt;
use log::{error, info};
use std::collections::HashMap;
use std::sync::Arc;

/// A ready-to-call check for one provider. Every call is a fresh request.
pub type Probe = Arc<dyn Fn() -> BoxFuture<'static, Result<VpnStatus>> + Send + Sync>;

type Adapter = for<'a> fn(&'a dyn Transport) -> BoxFuture<'a, Result<VpnStatus>>;

/// Registry keys, in the order results are reported.
pub const KEYS: [&str; 5] = [
    "mullvad",
    "nordvpn",
    "expressvpn",
    "surfshark",
    "privateinternetaccess",
];

fn mullvad_adapter(t: &dyn Transport) -> BoxFuture<'_, Result<VpnStatus>> {
    mullvad::probe(t).boxed()
}

fn nordvpn_adapter(t: &dyn Transport) -> BoxFuture<'_, Result<VpnStatus>> {
    nordvpn::probe(t).boxed()
}

fn expressvpn_adapter(t: &dyn Transport) -> BoxFuture<'_, Result<VpnStatus>> {
    expressvpn::probe(t).boxed()
}

fn surfshark_adapter(t: &dyn Transport) -> BoxFuture<'_, Result<VpnStatus>> {
    surfshark::probe(t).boxed()
}

fn pia_adapter(t: &dyn Transport) -> BoxFuture<'_, Result<VpnStatus>> {
    private_internet_access::probe(t).boxed()
}

fn adapter(key: &str) -> Option<(&'static str, Adapter)> {
    match key {
        "mullvad" => Some((mullvad::NAME, mullvad_adapter as Adapter)),
        "nordvpn" => Some((nordvpn::NAME, nordvpn_adapter as Adapter)),
        "expressvpn" => Some((expressvpn::NAME, expressvpn_adapter as Adapter)),
        "surfshark" => Some((surfshark::NAME, surfshark_adapter as Adapter)),
        "privateinternetaccess" => Some((private_internet_access::NAME, pia_adapter as Adapter)),
        _ => None,
    }
}

/// Display name for a registry key.
pub fn display_name(key: &str) -> Option<&'static str> {
    adapter(key).map(|(name, _)| name)
}

fn bind(transport: &Arc<dyn Transport>, adapter: Adapter) -> Probe {
    let transport = Arc::clone(transport);
    Arc::new(move || {
        let transport = Arc::clone(&transport);
        async move { adapter(transport.as_ref()).await }.boxed()
    })
}

/// Maps each provider key to its probe. The set of keys is fixed.
pub struct Registry {
    probes: HashMap<&'static str, Probe>,
}

impl Registry {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        let probes = KEYS
            .iter()
            .filter_map(|key| adapter(key).map(|(_, a)| (*key, bind(&transport, a))))
            .collect();
        Self { probes }
    }

    /// A registry backed by a real HTTP client.
    pub fn http(settings: &ClientSettings) -> Result<Self> {
        Ok(Self::new(Arc::new(HttpTransport::new(settings)?)))
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        KEYS.iter().copied().filter(|k| self.probes.contains_key(k))
    }

    pub fn get(&self, key: &str) -> Option<&Probe> {
        self.probes.get(key)
    }

    pub async fn probe(&self, key: &str) -> Result<VpnStatus> {
        let probe = self
            .get(key)
            .ok_or_else(|| ProbeError::UnknownProvider(key.to_string()))?;
        probe().await
    }

    /// Probes `keys` concurrently. Results come back in the order asked,
    /// each paired with its key; one failure never affects another result.
    pub async fn probe_many<S: AsRef<str>>(&self, keys: &[S]) -> Vec<(String, Result<VpnStatus>)> {
        let checks = keys.iter().map(|key| async move {
            let key = key.as_ref();
            let res = self.probe(key).await;
            match &res {
                Ok(status) => info!("{} -> {}", key, status),
                Err(e) => error!("cannot probe {} err:{}", key, e),
            }
            (key.to_string(), res)
        });
        join_all(checks).await
    }

    pub async fn probe_all(&self) -> Vec<(String, Result<VpnStatus>)> {
        let keys: Vec<&str> = self.keys().collect();
        self.probe_many(&keys).await
    }
}
