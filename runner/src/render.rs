use common::games::snake::{BoardMode, GameState, GridSize, Position};

/// Draws a snapshot as text: `@` head, `o` body, `*` food, `#` walls.
pub fn render_board(state: &GameState, grid: GridSize) -> String {
    let size = grid.get();
    let walled = state.mode == BoardMode::Walls;
    let border = "#".repeat(size as usize + 2);
    let mut out = String::new();

    if walled {
        out.push_str(&border);
        out.push('\n');
    }
    for y in 0..size {
        if walled {
            out.push('#');
        }
        for x in 0..size {
            out.push(cell_char(state, Position::new(x, y)));
        }
        if walled {
            out.push('#');
        }
        out.push('\n');
    }
    if walled {
        out.push_str(&border);
        out.push('\n');
    }
    out
}

fn cell_char(state: &GameState, position: Position) -> char {
    if state.snake.head() == position {
        '@'
    } else if state.snake.contains(&position) {
        'o'
    } else if state.food == position {
        '*'
    } else {
        '.'
    }
}

pub fn status_line(state: &GameState) -> String {
    format!(
        "score {} | speed {}ms | {:?} | {}",
        state.score, state.speed_ms, state.status, state.mode
    )
}
