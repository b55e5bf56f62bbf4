use tracing::{info, warn};

use super::types::{RegistrationAction, UserCount};
use super::workflow::MountGuard;
use crate::services::client::UserCountOracle;

/// Display-only hint; never consulted by the workflow
pub fn is_likely_first_user(count: UserCount) -> bool {
    count == 0
}

/// Fetch the advisory user count once for a freshly mounted form.
///
/// A failed fetch only leaves the hint off. Results arriving after the form
/// was torn down are dropped.
pub async fn load_advisory_count(
    oracle: &dyn UserCountOracle,
    guard: &MountGuard,
    dispatch: impl Fn(RegistrationAction),
) -> Option<UserCount> {
    let count = match oracle.user_count().await {
        Ok(count) => count,
        Err(e) => {
            warn!("Advisory user count unavailable: {}", e);
            return None;
        }
    };

    if !guard.is_live() {
        info!("Form torn down before user count arrived; ignoring it");
        return None;
    }

    dispatch(RegistrationAction::SetUserCount(count));
    Some(count)
}
