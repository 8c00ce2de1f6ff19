//! Achievement browser: the full catalog with unlock state.

use ironplan::achievements::ALL_ACHIEVEMENTS;
use ironplan::stats::PlayerStats;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_achievements_panel(frame: &mut Frame, area: Rect, stats: &PlayerStats) {
    let unlocked = stats.unlocked_achievements.len();
    let title = format!(" Achievements ({}/{}) ", unlocked, ALL_ACHIEVEMENTS.len());
    let block = Block::default().borders(Borders::ALL).title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let mut lines = Vec::with_capacity(ALL_ACHIEVEMENTS.len());
    for def in ALL_ACHIEVEMENTS {
        let is_unlocked = stats.has_achievement(def.id);
        let marker = if is_unlocked { "✓" } else { " " };
        let style = if is_unlocked {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!(
                "{} {} {:<14} {}  (+{} XP)",
                marker, def.icon, def.name, def.description, def.xp_reward
            ),
            style,
        )));
    }
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let controls = Paragraph::new("A/Esc back  Q quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(controls, chunks[1]);
}
