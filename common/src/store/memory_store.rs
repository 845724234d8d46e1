use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::NaiveDate;
use rand::Rng;

use super::models::{LeaderboardEntry, User};
use crate::games::snake::{BoardMode, LivePlayer, Position};
use crate::{EntryId, LivePlayerId, UserId};

const DEMO_PASSWORD: &str = "password123";

#[derive(Debug, Clone)]
struct UserRecord {
    user: User,
    password: String,
}

#[derive(Debug, Default)]
struct StoreData {
    users: HashMap<String, UserRecord>,
    leaderboard: Vec<LeaderboardEntry>,
    live_players: Vec<LivePlayer>,
    /// Email of the signed-in user.
    session: Option<String>,
}

/// Shared in-process backing store for the mock API.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    data: Arc<Mutex<StoreData>>,
}

impl InMemoryStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Store preloaded with demo users, leaderboard and live players.
    pub fn seeded() -> Self {
        let store = Self::empty();
        {
            let mut data = store.lock();
            for (id, username, email, high_score, created_at) in [
                ("1", "SnakeMaster", "player1@example.com", 1500, day(2024, 1, 15)),
                ("2", "VenomStrike", "player2@example.com", 1200, day(2024, 2, 20)),
            ] {
                data.users.insert(
                    email.to_string(),
                    UserRecord {
                        user: User {
                            id: UserId::new(id),
                            username: username.to_string(),
                            email: email.to_string(),
                            high_score,
                            created_at,
                        },
                        password: DEMO_PASSWORD.to_string(),
                    },
                );
            }

            data.leaderboard = [
                ("SnakeMaster", 1500, BoardMode::Walls, 1),
                ("VenomStrike", 1200, BoardMode::Passthrough, 2),
                ("SlitherKing", 980, BoardMode::Walls, 3),
                ("CobraCommander", 850, BoardMode::Passthrough, 4),
                ("PythonPro", 720, BoardMode::Walls, 5),
                ("ViperVenom", 650, BoardMode::Passthrough, 6),
                ("MambaMax", 580, BoardMode::Walls, 7),
                ("RattleSnake", 520, BoardMode::Passthrough, 8),
                ("SerpentSam", 450, BoardMode::Walls, 8),
                ("BoaBlaster", 400, BoardMode::Passthrough, 8),
            ]
            .into_iter()
            .enumerate()
            .map(|(index, (username, score, mode, dec_day))| LeaderboardEntry {
                id: EntryId::new((index + 1).to_string()),
                username: username.to_string(),
                score,
                mode,
                date: day(2024, 12, dec_day),
            })
            .collect();

            let mut rng = rand::rng();
            data.live_players = vec![
                LivePlayer::new(
                    LivePlayerId::new("live1"),
                    "GhostPlayer",
                    BoardMode::Passthrough,
                    [Position::new(5, 5), Position::new(4, 5), Position::new(3, 5)],
                    Position::new(10, 10),
                    rng.random_range(100..600),
                ),
                LivePlayer::new(
                    LivePlayerId::new("live2"),
                    "ArcadeHero",
                    BoardMode::Walls,
                    [Position::new(10, 10), Position::new(9, 10), Position::new(8, 10)],
                    Position::new(15, 15),
                    rng.random_range(100..600),
                ),
                LivePlayer::new(
                    LivePlayerId::new("live3"),
                    "PixelNinja",
                    BoardMode::Passthrough,
                    [Position::new(15, 8), Position::new(14, 8), Position::new(13, 8)],
                    Position::new(5, 12),
                    rng.random_range(100..600),
                ),
            ];
        }
        store
    }

    fn lock(&self) -> MutexGuard<'_, StoreData> {
        self.data.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn has_user(&self, email: &str) -> bool {
        self.lock().users.contains_key(email)
    }

    /// Returns the user when `password` matches.
    pub fn verify_user(&self, email: &str, password: &str) -> Option<User> {
        self.lock()
            .users
            .get(email)
            .filter(|record| record.password == password)
            .map(|record| record.user.clone())
    }

    pub fn create_user(&self, user: User, password: impl Into<String>) {
        self.lock().users.insert(
            user.email.clone(),
            UserRecord {
                user,
                password: password.into(),
            },
        );
    }

    pub fn user_by_email(&self, email: &str) -> Option<User> {
        self.lock().users.get(email).map(|record| record.user.clone())
    }

    pub fn set_session(&self, email: Option<String>) {
        self.lock().session = email;
    }

    pub fn session_user(&self) -> Option<User> {
        let data = self.lock();
        let email = data.session.as_ref()?;
        data.users.get(email).map(|record| record.user.clone())
    }

    /// Entries for `mode` (all modes when `None`), best score first.
    pub fn leaderboard(&self, mode: Option<BoardMode>) -> Vec<LeaderboardEntry> {
        let mut entries: Vec<_> = self
            .lock()
            .leaderboard
            .iter()
            .filter(|entry| mode.is_none_or(|mode| entry.mode == mode))
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.score.cmp(&a.score));
        entries
    }

    /// Appends the entry and raises the high score of the matching user.
    pub fn add_leaderboard_entry(&self, entry: LeaderboardEntry) {
        let mut data = self.lock();
        for record in data.users.values_mut() {
            if record.user.username == entry.username && entry.score > record.user.high_score {
                record.user.high_score = entry.score;
            }
        }
        data.leaderboard.push(entry);
    }

    pub fn live_players(&self) -> Vec<LivePlayer> {
        self.lock().live_players.clone()
    }

    pub fn live_player(&self, id: &LivePlayerId) -> Option<LivePlayer> {
        self.lock()
            .live_players
            .iter()
            .find(|player| &player.id == id)
            .cloned()
    }
}

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}
