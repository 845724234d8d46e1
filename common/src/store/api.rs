use std::time::Duration;

use chrono::Local;

use super::error::ApiError;
use super::memory_store::InMemoryStore;
use super::models::{Credentials, LeaderboardEntry, User};
use crate::games::snake::{BoardMode, LivePlayer, SessionGate};
use crate::id_generator::generate_id;
use crate::{EntryId, LivePlayerId, UserId, log};

/// Async facade over [`InMemoryStore`] shaped like a remote backend.
#[derive(Debug, Clone)]
pub struct ArcadeApi {
    store: InMemoryStore,
    latency: Duration,
}

impl ArcadeApi {
    pub fn new(store: InMemoryStore, latency: Duration) -> Self {
        Self { store, latency }
    }

    pub fn store(&self) -> &InMemoryStore {
        &self.store
    }

    /// Gate that follows this API's sign-in state.
    pub fn session(&self) -> AuthSession {
        AuthSession {
            store: self.store.clone(),
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.simulate_latency().await;

        let user = self
            .store
            .verify_user(&credentials.email, &credentials.password)
            .ok_or(ApiError::InvalidCredentials)?;
        self.store.set_session(Some(user.email.clone()));
        log!("{} logged in", user.username);
        Ok(user)
    }

    pub async fn signup(&self, credentials: &Credentials) -> Result<User, ApiError> {
        self.simulate_latency().await;

        if self.store.has_user(&credentials.email) {
            return Err(ApiError::EmailTaken);
        }
        let username = match credentials.username.as_deref() {
            Some(username) if !username.is_empty() => username,
            _ => return Err(ApiError::UsernameRequired),
        };

        let user = User {
            id: UserId::new(generate_id()),
            username: username.to_string(),
            email: credentials.email.clone(),
            high_score: 0,
            created_at: Local::now().date_naive(),
        };
        self.store.create_user(user.clone(), credentials.password.clone());
        self.store.set_session(Some(user.email.clone()));
        log!("Signed up {}", user.username);
        Ok(user)
    }

    pub async fn logout(&self) {
        self.simulate_latency().await;
        self.store.set_session(None);
    }

    pub async fn current_user(&self) -> Result<User, ApiError> {
        self.simulate_latency().await;
        self.store.session_user().ok_or(ApiError::NotAuthenticated)
    }

    pub async fn leaderboard(&self, mode: Option<BoardMode>) -> Vec<LeaderboardEntry> {
        self.simulate_latency().await;
        self.store.leaderboard(mode)
    }

    pub async fn submit_score(
        &self,
        score: u32,
        mode: BoardMode,
    ) -> Result<LeaderboardEntry, ApiError> {
        self.simulate_latency().await;

        let user = self.store.session_user().ok_or(ApiError::LoginRequired)?;
        let entry = LeaderboardEntry {
            id: EntryId::new(generate_id()),
            username: user.username,
            score,
            mode,
            date: Local::now().date_naive(),
        };
        self.store.add_leaderboard_entry(entry.clone());
        Ok(entry)
    }

    pub async fn live_players(&self) -> Vec<LivePlayer> {
        self.simulate_latency().await;
        self.store.live_players()
    }

    pub async fn live_player(&self, id: &LivePlayerId) -> Result<LivePlayer, ApiError> {
        self.simulate_latency().await;
        self.store.live_player(id).ok_or(ApiError::PlayerNotFound)
    }
}

/// Allows score recording while someone is signed in.
#[derive(Debug, Clone)]
pub struct AuthSession {
    store: InMemoryStore,
}

impl SessionGate for AuthSession {
    fn is_recording_allowed(&self) -> bool {
        self.store.session_user().is_some()
    }
}
