//! Top-of-screen HUD: level, rank, XP progress, streak, counters.

use ironplan::leveling::{rank_for_level, xp_ceiling, xp_floor};
use ironplan::stats::PlayerStats;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

/// Draws the player HUD across the given area.
pub fn draw_player_hud(frame: &mut Frame, area: Rect, stats: &PlayerStats) {
    let block = Block::default().borders(Borders::ALL).title(" Progress ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Level / rank / streak line
            Constraint::Length(1), // XP gauge
            Constraint::Length(1), // Counters
        ])
        .split(inner);

    draw_header_line(frame, chunks[0], stats);
    draw_xp_gauge(frame, chunks[1], stats);
    draw_counters(frame, chunks[2], stats);
}

fn draw_header_line(frame: &mut Frame, area: Rect, stats: &PlayerStats) {
    let streak = if stats.current_streak > 0 {
        format!(
            "Streak: {} day{}",
            stats.current_streak,
            if stats.current_streak == 1 { "" } else { "s" }
        )
    } else {
        "No active streak".to_string()
    };

    let line = Line::from(vec![
        Span::styled(
            format!("Level {} {}", stats.level, rank_for_level(stats.level)),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(streak, Style::default().fg(Color::Red)),
        Span::raw(" | "),
        Span::styled(
            format!("Best streak: {}", stats.longest_streak),
            Style::default().fg(Color::Magenta),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_xp_gauge(frame: &mut Frame, area: Rect, stats: &PlayerStats) {
    let floor = xp_floor(stats.level);
    let ceiling = xp_ceiling(stats.level);
    let span = (ceiling - floor).max(1);
    let into_level = stats.xp.saturating_sub(floor).min(span);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Yellow).bg(Color::DarkGray))
        .ratio(into_level as f64 / span as f64)
        .label(format!("XP {} / {}", stats.xp, ceiling));
    frame.render_widget(gauge, area);
}

fn draw_counters(frame: &mut Frame, area: Rect, stats: &PlayerStats) {
    let line = Line::from(vec![
        Span::styled(
            format!("Workouts: {}", stats.total_workouts_completed),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Exercises: {}", stats.total_exercises_completed),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Plans: {}", stats.plans_generated),
            Style::default().fg(Color::Green),
        ),
        Span::raw("  "),
        Span::styled(
            format!("Achievements: {}", stats.unlocked_achievements.len()),
            Style::default().fg(Color::Green),
        ),
    ]);

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
