//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! only shared piece is the lead relay, which is `None` when the email
//! credentials are not configured; submissions then fail with a server error
//! instead of keeping the site from starting.

use std::sync::Arc;

use crate::relay::LeadRelay;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Email relay. `None` if the relay env vars are not configured.
    pub relay: Option<Arc<dyn LeadRelay>>,
}

impl AppState {
    #[must_use]
    pub fn new(relay: Option<Arc<dyn LeadRelay>>) -> Self {
        Self { relay }
    }
}
