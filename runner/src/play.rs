use std::time::Duration;

use common::config::ArcadeConfig;
use common::games::SessionRng;
use common::games::snake::{
    BoardMode, BotController, FrameOutcome, GridSize, InputCommand, MonotonicClock, TickScheduler,
};
use common::log;
use common::store::{ArcadeApi, Credentials, run_score_submitter, score_channel};

use crate::render::{render_board, status_line};

pub struct PlayOptions {
    pub mode: BoardMode,
    pub max_ticks: Option<u64>,
    pub login: Option<(String, String)>,
}

pub struct PlaySummary {
    pub score: u32,
    pub ticks: u64,
    pub recorded: usize,
}

/// Runs one bot-driven game on a frame timer, the way a host UI would:
/// the bot only ever talks to the scheduler through input commands.
pub async fn run_play(
    config: &ArcadeConfig,
    api: &ArcadeApi,
    options: PlayOptions,
) -> Result<PlaySummary, Box<dyn std::error::Error>> {
    if let Some((email, password)) = options.login {
        api.login(&Credentials::login(email, password)).await?;
    }

    let (reporter, receiver) = score_channel(api.session());
    let submitter = tokio::spawn(run_score_submitter(api.clone(), receiver));

    let grid = GridSize::new(config.game.grid_size);
    let game_rng = SessionRng::from_optional_seed(config.game.seed);
    let mut bot_rng = SessionRng::new(game_rng.seed().wrapping_add(1));
    let mut scheduler = TickScheduler::new(options.mode, grid, MonotonicClock::new(), game_rng)
        .with_reporter(reporter);

    scheduler.handle(InputCommand::StartOrPause);

    let mut frame_timer =
        tokio::time::interval(Duration::from_millis(u64::from(config.game.frame_interval_ms)));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    while let Some(handle) = scheduler.pending_frame() {
        tokio::select! {
            _ = frame_timer.tick() => {}
            _ = &mut ctrl_c => {
                log!("Interrupted");
                break;
            }
        }

        let state = scheduler.snapshot();
        if let Some(direction) = BotController::choose_direction(&state.snake, state.food, &mut bot_rng) {
            scheduler.handle(InputCommand::Turn(direction));
        }

        if let FrameOutcome::Ticked(_) = scheduler.on_frame(handle)
            && options.max_ticks.is_some_and(|max| scheduler.tick_count() >= max)
        {
            log!("Tick limit reached");
            break;
        }
    }
    scheduler.teardown();

    let state = scheduler.snapshot().clone();
    let ticks = scheduler.tick_count();
    print!("{}", render_board(&state, grid));
    println!("{}", status_line(&state));

    // Dropping the scheduler drops the reporter, which lets the submitter finish.
    drop(scheduler);
    let recorded = submitter.await?;

    Ok(PlaySummary {
        score: state.score,
        ticks,
        recorded,
    })
}
