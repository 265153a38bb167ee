use thiserror::Error;

/// Why a probe produced no [`VpnStatus`](crate::status::VpnStatus).
///
/// A probe that fails is never reported as "not protected": callers get an
/// `Err` and decide for themselves what to show.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("cannot decode {provider} response: {source}")]
    Decode {
        provider: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid selector: {0}")]
    Selector(String),

    #[error("unknown provider `{0}`")]
    UnknownProvider(String),
}

pub type Result<T> = std::result::Result<T, ProbeError>;
