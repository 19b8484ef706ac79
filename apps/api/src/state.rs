use std::sync::Arc;

use crate::analysis::allowlist::Allowlist;
use crate::config::Config;
use crate::spellcheck::SpellCorrector;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is read-only after startup, so concurrent uploads share it
/// without coordination.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Known-correct terms exempt from the spelling check.
    pub allowlist: Arc<Allowlist>,
    /// Pluggable spell corrector. Default: `EditDistanceCorrector` over the
    /// embedded frequency dictionary.
    pub corrector: Arc<dyn SpellCorrector>,
}
