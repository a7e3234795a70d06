//! Fetch-lifecycle state machine for the paste view.
//!
//! A machine is mounted for one identifier and re-armed whenever the
//! identifier changes. Each arming draws a fresh generation from a
//! process-wide counter; only a settlement carrying the latest generation is
//! applied, so responses for superseded or unmounted views are dropped.

use crate::error::FetchError;
use crate::models::paste::Paste;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, warn};

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Observable state of the view. Exactly one variant is live at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Loading,
    Success(Paste),
    Failure(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn paste(&self) -> Option<&Paste> {
        match self {
            Self::Success(paste) => Some(paste),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failure(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

/// One outstanding request produced by arming the machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub generation: u64,
    pub id: String,
}

/// Outcome of offering a result to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The result replaced `Loading`.
    Applied,
    /// The result belongs to an older arming and was discarded.
    Stale { generation: u64, current: u64 },
    /// The current arming already settled; the repeat was discarded.
    AlreadySettled,
}

/// Loading → Success | Failure, re-armed per identifier.
#[derive(Debug)]
pub struct FetchMachine {
    id: String,
    generation: u64,
    state: FetchState,
}

impl FetchMachine {
    /// Mount a machine for `id` and arm its first request.
    ///
    /// # Returns
    /// The machine in `Loading` plus the request the caller must dispatch.
    pub fn mount(id: impl Into<String>) -> (Self, FetchRequest) {
        let mut machine = Self {
            id: id.into(),
            generation: 0,
            state: FetchState::Loading,
        };
        let request = machine.arm();
        (machine, request)
    }

    fn arm(&mut self) -> FetchRequest {
        self.generation = next_generation();
        self.state = FetchState::Loading;
        debug!(
            "armed fetch generation {} for '{}'",
            self.generation, self.id
        );
        FetchRequest {
            generation: self.generation,
            id: self.id.clone(),
        }
    }

    /// Point the machine at `id`, re-arming only when it actually changed.
    ///
    /// # Returns
    /// `Some(request)` to dispatch when re-armed, `None` when `id` is the
    /// identifier already mounted.
    pub fn set_identifier(&mut self, id: &str) -> Option<FetchRequest> {
        if self.id == id {
            return None;
        }
        self.id = id.to_string();
        Some(self.arm())
    }

    /// Offer the result of request `generation`.
    pub fn settle(&mut self, generation: u64, result: Result<Paste, FetchError>) -> Settlement {
        if generation != self.generation {
            warn!(
                "discarding stale fetch result (generation {}, current {})",
                generation, self.generation
            );
            return Settlement::Stale {
                generation,
                current: self.generation,
            };
        }
        if !self.state.is_loading() {
            return Settlement::AlreadySettled;
        }
        self.state = match result {
            Ok(paste) => FetchState::Success(paste),
            Err(err) => FetchState::Failure(err.user_message()),
        };
        Settlement::Applied
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn identifier(&self) -> &str {
        &self.id
    }

    /// Generation of the most recently issued request.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
