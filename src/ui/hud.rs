use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::config::Theme;
use crate::snapshot::Snapshot;

const HUD_MARGIN_X: u16 = 1;

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(snapshot, theme))
            .alignment(Alignment::Right)
            .style(Style::default().fg(theme.hud_label)),
        inset_horizontal(hud_area, HUD_MARGIN_X),
    );

    play_area
}

fn inset_horizontal(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x.saturating_add(margin),
        y: area.y,
        width: area.width.saturating_sub(margin.saturating_mul(2)),
        height: area.height,
    }
}

fn info_line(snapshot: &Snapshot, theme: &Theme) -> Line<'static> {
    let value = Style::default().fg(theme.hud_value);
    let sep = " │ ";

    Line::from(vec![
        Span::raw("Length: "),
        Span::styled(snapshot.snake.len().to_string(), value),
        Span::raw(sep),
        Span::raw("Speed: "),
        Span::styled(format!("{}ms", snapshot.speed.as_millis()), value),
        Span::raw(sep),
        Span::raw("Score: "),
        Span::styled(snapshot.score.to_string(), value),
    ])
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::config::{GridSize, THEME_CLASSIC};
    use crate::game::GameStatus;
    use crate::input::Direction;
    use crate::snake::Position;
    use crate::snapshot::Snapshot;

    use super::info_line;

    #[test]
    fn info_line_shows_length_speed_and_score() {
        let snapshot = Snapshot {
            grid_size: GridSize(10),
            snake: vec![Position::new(2, 2), Position::new(1, 2)],
            food: Some(Position::new(5, 5)),
            obstacles: Vec::new(),
            score: 7,
            speed: Duration::from_millis(115),
            direction: Direction::Right,
            status: GameStatus::Running,
            death_reason: None,
            tick_count: 30,
        };

        let text: String = info_line(&snapshot, &THEME_CLASSIC)
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();

        assert_eq!(text, "Length: 2 │ Speed: 115ms │ Score: 7");
    }
}
