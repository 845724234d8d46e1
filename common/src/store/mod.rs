mod api;
mod error;
mod memory_store;
mod models;
mod score_channel;

pub use api::{ArcadeApi, AuthSession};
pub use error::ApiError;
pub use memory_store::InMemoryStore;
pub use models::{Credentials, LeaderboardEntry, User};
pub use score_channel::{ChannelScoreReporter, ScoreSubmission, run_score_submitter, score_channel};
