use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Clear, Paragraph};
use ratatui::Frame;

use crate::config::Theme;
use crate::game::DeathReason;

const START_HINTS: [&str; 2] = ["Enter / Space  begin", "Q / Esc  leave"];
const GAME_OVER_HINTS: [&str; 2] = ["Enter / Space  new board", "Q / Esc  leave"];

/// Title card shown while the engine is idle.
pub fn render_start_menu(frame: &mut Frame<'_>, area: Rect, obstacles: usize, theme: &Theme) {
    let mut lines = vec![
        Line::styled(
            "S N A K E",
            Style::default()
                .fg(theme.menu_title)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::from(format!("{obstacles} obstacles on the board")),
        Line::from(""),
    ];
    lines.extend(START_HINTS.map(Line::from));
    lines.push(Line::from(""));
    lines.push(Line::styled(
        "steer with arrows, WASD or hjkl",
        Style::default().fg(theme.menu_footer),
    ));

    render_popup(frame, area, " ready ", lines, (60, 50));
}

/// Final score and cause, shown once the session has ended.
pub fn render_game_over_menu(
    frame: &mut Frame<'_>,
    area: Rect,
    score: u32,
    death_reason: Option<DeathReason>,
) {
    let mut lines = vec![
        Line::from(format!("You scored {score}")),
        Line::from(death_reason.map_or("", cause_text)),
        Line::from(""),
    ];
    lines.extend(GAME_OVER_HINTS.map(Line::from));

    render_popup(frame, area, " crashed ", lines, (60, 40));
}

fn cause_text(reason: DeathReason) -> &'static str {
    match reason {
        DeathReason::WallCollision => "ran into the wall",
        DeathReason::SelfCollision => "bit your own tail",
        DeathReason::ObstacleCollision => "struck an obstacle",
    }
}

fn render_popup(
    frame: &mut Frame<'_>,
    area: Rect,
    title: &'static str,
    lines: Vec<Line<'static>>,
    (width_percent, height_percent): (u16, u16),
) {
    let popup = popup_area(area, width_percent, height_percent);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::bordered().title(title)),
        popup,
    );
}

fn popup_area(area: Rect, width_percent: u16, height_percent: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(height_percent)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(width_percent)])
        .flex(Flex::Center)
        .areas(row);

    popup
}
