pub mod configuration;
pub mod error;
pub mod providers;
pub mod registry;
pub mod scrape;
pub mod status;
pub mod transport;

pub use error::ProbeError;
pub use registry::{Probe, Registry};
pub use status::VpnStatus;
