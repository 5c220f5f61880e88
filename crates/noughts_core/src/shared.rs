//! Thread-safe handle around a single engine.

use crate::action::MoveRejected;
use crate::engine::GameEngine;
use crate::types::{GameState, Outcome};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{instrument, warn};

/// Cloneable handle that serialises every engine operation behind one mutex.
///
/// Clones share the same session. Reads return owned snapshots so no lock
/// is held by the caller.
#[derive(Debug, Clone, Default)]
pub struct SharedEngine {
    inner: Arc<Mutex<GameEngine>>,
}

impl SharedEngine {
    /// Creates a handle to a fresh session.
    pub fn new() -> Self {
        Self::from_engine(GameEngine::new())
    }

    /// Wraps an existing engine.
    pub fn from_engine(engine: GameEngine) -> Self {
        Self {
            inner: Arc::new(Mutex::new(engine)),
        }
    }

    // Guards run before any mutation, so a poisoned engine is still consistent.
    fn lock(&self) -> MutexGuard<'_, GameEngine> {
        self.inner.lock().unwrap_or_else(|poisoned| {
            warn!("Engine lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    /// See [`GameEngine::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> Result<Outcome, MoveRejected> {
        self.lock().apply_move(index)
    }

    /// See [`GameEngine::reset`].
    pub fn reset(&self) {
        self.lock().reset();
    }

    /// Owned copy of the current state.
    pub fn snapshot(&self) -> GameState {
        self.lock().snapshot()
    }

    /// See [`GameEngine::has_moves`].
    pub fn has_moves(&self) -> bool {
        self.lock().has_moves()
    }
}
