use tracing::{info, warn};

use super::types::SessionReadiness;
use crate::services::client::SessionProbe;

/// Work out the readiness handed to the registration workflow.
///
/// An unreachable session endpoint is treated as signed out: the form stays
/// usable and the registrar remains the judge of whether sign-up is allowed.
pub async fn resolve_readiness(probe: &dyn SessionProbe) -> SessionReadiness {
    match probe.session_readiness().await {
        Ok(readiness) => {
            info!("Session readiness resolved: {:?}", readiness);
            readiness
        }
        Err(e) => {
            warn!("Session lookup failed, treating visitor as signed out: {}", e);
            SessionReadiness::Anonymous
        }
    }
}
