//! Liveness flag shared between a session and its background tasks.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Set while the session that spawned a task is still current.
///
/// Tasks capture a clone when they are spawned and check it before every
/// mutation they would cause. Restarting the session revokes the flag, so
/// late loader steps and timer fires from the old session become no-ops.
#[derive(Debug, Clone)]
pub struct Liveness(Arc<AtomicBool>);

impl Liveness {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    pub fn revoke(&self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revoke_is_seen_by_clones() {
        let liveness = Liveness::new();
        let captured = liveness.clone();
        assert!(captured.is_alive());

        liveness.revoke();
        assert!(!captured.is_alive());
    }
}
