//! # Rotation Tracker
//!
//! Picks tips without repetition until the whole catalog has been shown, then starts a new cycle.
//! The used-id set and the random source live behind one mutex so the
//! size-check, the lazy reset and the insert happen as a single step.
//! Scheduled posts and chat commands share the same `Arc<TipTracker>`.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use crate::domain::catalog::Catalog;
use crate::domain::traits::RandomSource;
use crate::domain::types::{Tip, TipStatus};

struct RotationState {
    used: HashSet<u32>,
    rng: Box<dyn RandomSource>,
}

pub struct TipTracker {
    catalog: Catalog,
    state: Mutex<RotationState>,
}

impl TipTracker {
    pub fn new(catalog: Catalog, rng: Box<dyn RandomSource>) -> Self {
        Self {
            catalog,
            state: Mutex::new(RotationState {
                used: HashSet::new(),
                rng,
            }),
        }
    }

    // Every mutation is a single insert or clear, so a poisoned set is still consistent.
    fn lock(&self) -> MutexGuard<'_, RotationState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Returns a tip not yet shown in the current cycle.
    /// When every tip has been used, the cycle is cleared first.
    pub fn pick_unused(&self) -> Tip {
        let mut state = self.lock();
        let total = self.catalog.len();

        if state.used.len() >= total {
            state.used.clear();
            tracing::info!("{}", crate::strings::logs::CYCLE_RESET);
        }

        let available: Vec<&Tip> = self
            .catalog
            .tips()
            .iter()
            .filter(|tip| !state.used.contains(&tip.id))
            .collect();

        let index = state.rng.pick_index(available.len()).min(available.len() - 1);
        let tip = available[index].clone();
        state.used.insert(tip.id);

        tracing::debug!("Picked tip #{} ({}/{} used)", tip.id, state.used.len(), total);
        tip
    }

    pub fn reset(&self) {
        self.lock().used.clear();
        tracing::info!("{}", crate::strings::logs::CYCLE_RESET_MANUAL);
    }

    pub fn status(&self) -> TipStatus {
        TipStatus::new(self.lock().used.len(), self.catalog.len())
    }
}
