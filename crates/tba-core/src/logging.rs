use tracing_subscriber::{fmt, EnvFilter};

use crate::{errors::Error, Result};

/// Initialize tracing for a binary embedding the client.
///
/// Default: info everywhere, spelled out for our crates so that a broader
/// `RUST_LOG` can be layered on top. Fails if a global subscriber is already
/// installed.
pub fn init(service_name: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(service_name)));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| Error::External(format!("logging init: {e}")))
}

fn default_filter(service_name: &str) -> String {
    format!(
        "info,tba=info,tba_core=info,tba_client=info,{}=info",
        service_name.replace('-', "_")
    )
}
