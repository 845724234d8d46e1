use std::time::Duration;

use common::LivePlayerId;
use common::config::ArcadeConfig;
use common::games::SessionRng;
use common::games::snake::{FrameOutcome, GridSize, MonotonicClock, WatchSession};
use common::log;
use common::store::ArcadeApi;

use crate::render::{render_board, status_line};

/// Animates one live player for `ticks` ticks, printing every frame.
pub async fn run_watch(
    config: &ArcadeConfig,
    api: &ArcadeApi,
    player: Option<LivePlayerId>,
    ticks: u64,
) -> Result<(), Box<dyn std::error::Error>> {
    let players = api.live_players().await;
    let id = match player {
        Some(id) => api.live_player(&id).await?.id,
        None => match players.first() {
            Some(first) => first.id.clone(),
            None => {
                log!("Nobody is playing right now");
                return Ok(());
            }
        },
    };

    let grid = GridSize::new(config.game.grid_size);
    let mut session = WatchSession::new(
        players,
        grid,
        Duration::from_millis(u64::from(config.watch.tick_interval_ms)),
        MonotonicClock::new(),
        SessionRng::from_optional_seed(config.game.seed),
    );
    session.select(&id);

    let mut frame_timer =
        tokio::time::interval(Duration::from_millis(u64::from(config.game.frame_interval_ms)));
    let mut seen = 0;

    while seen < ticks {
        let Some(handle) = session.pending_frame() else {
            break;
        };
        frame_timer.tick().await;

        if let FrameOutcome::Ticked(event) = session.on_frame(handle)
            && let Some(watched) = session.selected()
        {
            seen += 1;
            println!(
                "{} round {} | {} | last: {:?}",
                watched.username,
                watched.round,
                status_line(&watched.state),
                event
            );
            print!("{}", render_board(&watched.state, grid));
        }
    }
    session.teardown();
    Ok(())
}
