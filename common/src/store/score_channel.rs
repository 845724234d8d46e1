use tokio::sync::mpsc;

use super::api::ArcadeApi;
use crate::games::snake::{BoardMode, ScoreReporter, SessionGate};
use crate::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreSubmission {
    pub score: u32,
    pub mode: BoardMode,
}

/// Forwards finished scores to a background submitter when the gate allows.
pub struct ChannelScoreReporter<G: SessionGate> {
    gate: G,
    sender: mpsc::UnboundedSender<ScoreSubmission>,
}

impl<G: SessionGate> ChannelScoreReporter<G> {
    pub fn new(gate: G, sender: mpsc::UnboundedSender<ScoreSubmission>) -> Self {
        Self { gate, sender }
    }
}

impl<G: SessionGate> ScoreReporter for ChannelScoreReporter<G> {
    fn report(&mut self, score: u32, mode: BoardMode) {
        if !self.gate.is_recording_allowed() {
            log!("Not signed in, score {} not recorded", score);
            return;
        }
        if self.sender.send(ScoreSubmission { score, mode }).is_err() {
            log!("Score submitter is gone, dropping score {}", score);
        }
    }
}

pub fn score_channel<G: SessionGate>(
    gate: G,
) -> (ChannelScoreReporter<G>, mpsc::UnboundedReceiver<ScoreSubmission>) {
    let (sender, receiver) = mpsc::unbounded_channel();
    (ChannelScoreReporter::new(gate, sender), receiver)
}

/// Drains submissions into the API until every reporter is dropped.
/// Returns the number of scores that were recorded.
pub async fn run_score_submitter(
    api: ArcadeApi,
    mut receiver: mpsc::UnboundedReceiver<ScoreSubmission>,
) -> usize {
    let mut recorded = 0;
    while let Some(submission) = receiver.recv().await {
        match api.submit_score(submission.score, submission.mode).await {
            Ok(entry) => {
                log!(
                    "Recorded {} points in {} mode for {}",
                    entry.score,
                    entry.mode,
                    entry.username
                );
                recorded += 1;
            }
            Err(e) => log!("Failed to submit score: {}", e),
        }
    }
    recorded
}
