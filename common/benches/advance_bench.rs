use criterion::{criterion_group, criterion_main, Criterion, SamplingMode};
use std::hint::black_box;
use std::time::Duration;
use common::games::SessionRng;
use common::games::snake::{
    place_food, BoardMode, BotController, GameState, GameStatus, GridSize, Position, Snake,
};

fn bench_bot_game_1000_ticks() {
    let grid = GridSize::new(20);
    let mut session_rng = SessionRng::new(42);
    let mut state = GameState {
        status: GameStatus::Playing,
        ..GameState::initial(BoardMode::Passthrough)
    };

    for _ in 0..1000 {
        if let Some(direction) = BotController::choose_direction(&state.snake, state.food, &mut session_rng) {
            state.next_direction = direction;
        }
        let transition = state.advance(grid, &mut session_rng);
        state = if transition.event.ends_game() {
            GameState {
                status: GameStatus::Playing,
                ..GameState::initial(BoardMode::Passthrough)
            }
        } else {
            transition.state
        };
    }
    black_box(state);
}

fn serpentine_snake(grid: GridSize, free_cells: usize) -> Snake {
    let size = grid.get();
    let mut cells = Vec::new();
    for y in 0..size {
        for step in 0..size {
            let x = if y % 2 == 0 { step } else { size - 1 - step };
            cells.push(Position::new(x, y));
        }
    }
    cells.truncate(cells.len() - free_cells);
    cells.reverse();
    Snake::new(cells)
}

fn bench_place_food_nearly_full() {
    let grid = GridSize::new(30);
    let snake = serpentine_snake(grid, 3);
    let mut session_rng = SessionRng::from_random();
    black_box(place_food(&snake, grid, &mut session_rng));
}

fn advance_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("snake");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));

    group.bench_function("bot_game_1000_ticks", |b| {
        b.iter(bench_bot_game_1000_ticks)
    });

    group.bench_function("place_food_nearly_full", |b| {
        b.iter(bench_place_food_nearly_full)
    });

    group.finish();
}

criterion_group!(benches, advance_bench);
criterion_main!(benches);
