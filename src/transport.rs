use crate::configuration::ClientSettings;
use crate::error::Result;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

/// The network side of a probe: fetch a URL and hand back the body.
///
/// Adapters only see this trait, so any deadline or proxy lives in the
/// implementation, never in the adapters themselves.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String>;

    /// POSTs `body` as JSON (`Content-Type: application/json`).
    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String>;
}

pub fn new_client(settings: &ClientSettings) -> Result<Client> {
    let mut builder = Client::builder()
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.as_str());

    if let Some(p) = settings.proxy.as_deref() {
        if !p.is_empty() {
            let proxy_url = reqwest::Proxy::all(format!("http://{}", p))?;
            builder = builder.proxy(proxy_url);
        }
    }

    Ok(builder.build()?)
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        Ok(Self {
            client: new_client(settings)?,
        })
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?;
        debug!("GET {} -> {}", url, resp.status());
        Ok(resp.text().await?)
    }

    async fn post_json(&self, url: &str, body: &serde_json::Value) -> Result<String> {
        let resp = self.client.post(url).json(body).send().await?;
        debug!("POST {} -> {}", url, resp.status());
        Ok(resp.text().await?)
    }
}
