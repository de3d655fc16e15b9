//! Server state management
//!
//! Session registry and the random source handed to AI requests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use raumschach_core::GameState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One game owned by the registry
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    pub game: GameState,
}

/// Server-wide shared state
pub struct ServerState {
    games: RwLock<HashMap<String, GameSession>>,
    seed: Option<u64>,
    requests: AtomicU64,
}

impl ServerState {
    pub fn new() -> Self {
        Self::with_seed(None)
    }

    /// With a seed, every AI request gets a deterministic generator
    /// (seed + request counter); without one, fresh entropy.
    pub fn with_seed(seed: Option<u64>) -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            seed,
            requests: AtomicU64::new(0),
        }
    }

    /// Register a new opening-position game and return its id
    pub fn create_game(&self) -> (String, GameSession) {
        let id = uuid::Uuid::new_v4().to_string();
        let session = GameSession::default();
        self.games_mut().insert(id.clone(), session.clone());
        (id, session)
    }

    pub fn games(&self) -> RwLockReadGuard<'_, HashMap<String, GameSession>> {
        self.games.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Holding this guard serialises all mutation of sessions
    pub fn games_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, GameSession>> {
        self.games.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Request-scoped random source
    pub fn request_rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => {
                let n = self.requests.fetch_add(1, Ordering::Relaxed);
                ChaCha8Rng::seed_from_u64(seed.wrapping_add(n))
            }
            None => ChaCha8Rng::from_entropy(),
        }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
