use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::config::{
    GridSize, Theme, BORDER_HALF_BLOCK, GLYPH_FOOD, GLYPH_OBSTACLE, GLYPH_SNAKE_BODY,
    GLYPH_SNAKE_HEAD_DOWN, GLYPH_SNAKE_HEAD_LEFT, GLYPH_SNAKE_HEAD_RIGHT, GLYPH_SNAKE_HEAD_UP,
    GLYPH_SNAKE_TAIL,
};
use crate::game::GameStatus;
use crate::input::Direction;
use crate::snake::Position;
use crate::snapshot::Snapshot;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_start_menu};

/// Renders the full game frame from a snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, theme: &Theme) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, theme);

    let block = Block::bordered()
        .border_set(BORDER_HALF_BLOCK)
        .border_style(Style::new().fg(theme.border_fg).bg(theme.border_bg))
        .style(Style::new().bg(theme.play_bg));

    let inner = block.inner(play_area);
    frame.render_widget(block, play_area);

    render_obstacles(frame, inner, snapshot, theme);
    render_food(frame, inner, snapshot, theme);
    render_snake(frame, inner, snapshot, theme);

    match snapshot.status {
        GameStatus::Idle => {
            render_start_menu(frame, play_area, snapshot.obstacles.len(), theme);
        }
        GameStatus::GameOver => {
            render_game_over_menu(frame, play_area, snapshot.score, snapshot.death_reason);
        }
        GameStatus::Running => {}
    }
}

fn render_obstacles(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let buffer = frame.buffer_mut();
    for obstacle in &snapshot.obstacles {
        if let Some((x, y)) = logical_to_terminal(inner, snapshot.grid_size, *obstacle) {
            buffer.set_string(x, y, GLYPH_OBSTACLE, Style::new().fg(theme.obstacle));
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid_size, food) else {
        return;
    };

    frame
        .buffer_mut()
        .set_string(x, y, GLYPH_FOOD, Style::new().fg(theme.food));
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, theme: &Theme) {
    let last = snapshot.snake.len().saturating_sub(1);

    let buffer = frame.buffer_mut();
    for (index, segment) in snapshot.snake.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid_size, *segment) else {
            continue;
        };

        let (glyph, style) = if index == 0 {
            (
                head_glyph(snapshot.direction),
                Style::new()
                    .fg(theme.snake_head)
                    .add_modifier(Modifier::BOLD),
            )
        } else if index == last {
            (GLYPH_SNAKE_TAIL, Style::new().fg(theme.snake_tail))
        } else {
            (GLYPH_SNAKE_BODY, Style::new().fg(theme.snake_body))
        };

        buffer.set_string(x, y, glyph, style);
    }
}

fn head_glyph(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => GLYPH_SNAKE_HEAD_UP,
        Direction::Down => GLYPH_SNAKE_HEAD_DOWN,
        Direction::Left => GLYPH_SNAKE_HEAD_LEFT,
        Direction::Right => GLYPH_SNAKE_HEAD_RIGHT,
    }
}

fn logical_to_terminal(inner: Rect, bounds: GridSize, position: Position) -> Option<(u16, u16)> {
    if !position.is_within_bounds(bounds) {
        return None;
    }

    let x = inner.x.saturating_add(u16::try_from(position.x).ok()?);
    let y = inner.y.saturating_add(u16::try_from(position.y).ok()?);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    use crate::config::{
        EngineConfig, GridSize, GLYPH_FOOD, GLYPH_SNAKE_HEAD_RIGHT, THEME_CLASSIC,
    };
    use crate::game::{Engine, Layout};
    use crate::input::Direction;
    use crate::snake::{Position, Snake};

    use super::{logical_to_terminal, render};

    #[test]
    fn positions_outside_grid_or_area_are_skipped() {
        let inner = Rect::new(1, 1, 5, 5);

        assert_eq!(
            logical_to_terminal(inner, GridSize(10), Position::new(0, 0)),
            Some((1, 1))
        );
        assert_eq!(
            logical_to_terminal(inner, GridSize(10), Position::new(6, 0)),
            None
        );
        assert_eq!(
            logical_to_terminal(inner, GridSize(10), Position::new(-1, 0)),
            None
        );
    }

    #[test]
    fn render_draws_head_and_food_from_snapshot() {
        let engine = Engine::from_layout(
            EngineConfig {
                grid_size: GridSize(8),
                obstacle_count: 0,
                ..EngineConfig::default()
            },
            1,
            Layout {
                snake: Snake::new(Position::new(2, 3)),
                direction: Direction::Right,
                food: Some(Position::new(5, 3)),
                obstacles: Vec::new(),
            },
        );
        let snapshot = engine.snapshot();
        let mut terminal =
            Terminal::new(TestBackend::new(12, 12)).expect("test backend should initialise");

        terminal
            .draw(|frame| render(frame, &snapshot, &THEME_CLASSIC))
            .expect("draw should succeed");

        // Border is one cell wide, so logical (x, y) lands at (x + 1, y + 1).
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(3, 4)].symbol(), GLYPH_SNAKE_HEAD_RIGHT);
        assert_eq!(buffer[(6, 4)].symbol(), GLYPH_FOOD);
    }
}
