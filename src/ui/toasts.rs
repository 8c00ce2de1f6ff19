//! Transient overlays: the level-up flash and the achievement toast.

use ironplan::achievements::{def_for, AchievementId};
use ironplan::leveling::rank_for_level;
use ironplan::signals::TransientSignals;
use ironplan::stats::PlayerStats;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Instant;

/// Draws whichever signal overlays are active at `now` on top of the
/// current screen.
pub fn draw_overlays(
    frame: &mut Frame,
    signals: &TransientSignals,
    stats: &PlayerStats,
    now: Instant,
) {
    if signals.level_up_active(now) {
        draw_level_up_flash(frame, stats);
    }
    let toasted = signals.toasted_achievements(now);
    if !toasted.is_empty() {
        draw_achievement_toast(frame, toasted.len(), toasted);
    }
}

fn draw_level_up_flash(frame: &mut Frame, stats: &PlayerStats) {
    let size = frame.size();
    if size.width < 12 || size.height < 6 {
        return;
    }
    let width = 34.min(size.width);
    let area = Rect::new(size.width.saturating_sub(width) / 2, 1, width, 4);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let text = vec![
        Line::from(Span::styled(
            "LEVEL UP!",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Level {} — {}", stats.level, rank_for_level(stats.level)),
            Style::default().fg(Color::Cyan),
        )),
    ];
    frame.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        inner,
    );
}

fn draw_achievement_toast(frame: &mut Frame, count: usize, ids: &[AchievementId]) {
    let size = frame.size();
    let height = count as u16 + 3;
    if size.width < 12 || size.height < height + 2 {
        return;
    }
    let width = 44.min(size.width);
    let area = Rect::new(
        size.width.saturating_sub(width + 1),
        size.height.saturating_sub(height + 1),
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green))
        .title(" Achievement unlocked ");
    let inner = block.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(block, area);

    let mut lines = Vec::with_capacity(count + 1);
    for id in ids {
        if let Some(def) = def_for(*id) {
            lines.push(Line::from(Span::styled(
                format!("{} {}  +{} XP", def.icon, def.name, def.xp_reward),
                Style::default().fg(Color::Green),
            )));
        }
    }
    lines.push(Line::from(Span::styled(
        "Esc dismiss",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines), inner);
}
