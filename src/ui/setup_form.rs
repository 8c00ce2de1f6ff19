//! Plan setup form: pick level, location, and training days per week.

use ironplan::constants::{MAX_TRAINING_DAYS, MIN_TRAINING_DAYS};
use ironplan::workouts::{FitnessLevel, Location};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_COUNT: usize = 3;

pub struct SetupFormScreen {
    pub field: usize,
    pub level_index: usize,
    pub location_index: usize,
    pub days: u8,
}

impl SetupFormScreen {
    pub fn new() -> Self {
        Self {
            field: 0,
            level_index: 0,
            location_index: 0,
            days: 3,
        }
    }

    pub fn level(&self) -> FitnessLevel {
        FitnessLevel::ALL[self.level_index]
    }

    pub fn location(&self) -> Location {
        Location::ALL[self.location_index]
    }

    pub fn next_field(&mut self) {
        self.field = (self.field + 1) % FIELD_COUNT;
    }

    pub fn prev_field(&mut self) {
        self.field = (self.field + FIELD_COUNT - 1) % FIELD_COUNT;
    }

    /// Cycle the focused field's value. `forward` is false for left.
    pub fn cycle(&mut self, forward: bool) {
        match self.field {
            0 => self.level_index = (self.level_index + 1) % FitnessLevel::ALL.len(),
            1 => self.location_index = (self.location_index + 1) % Location::ALL.len(),
            _ => {
                self.days = if forward {
                    if self.days >= MAX_TRAINING_DAYS {
                        MIN_TRAINING_DAYS
                    } else {
                        self.days + 1
                    }
                } else if self.days <= MIN_TRAINING_DAYS {
                    MAX_TRAINING_DAYS
                } else {
                    self.days - 1
                };
            }
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Length(2), // Level
                Constraint::Length(2), // Location
                Constraint::Length(2), // Days
                Constraint::Min(0),    // Spacer
                Constraint::Length(2), // Controls
            ])
            .split(area);

        let title = Paragraph::new("Build Your Week")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, chunks[0]);

        self.draw_field(frame, chunks[1], 0, "Experience", &self.level().to_string());
        self.draw_field(frame, chunks[2], 1, "Location", &self.location().to_string());
        self.draw_field(
            frame,
            chunks[3],
            2,
            "Days per week",
            &self.days.to_string(),
        );

        let controls = Paragraph::new("↑/↓ field  ←/→ change  Enter generate plan  Q quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(controls, chunks[5]);
    }

    fn draw_field(&self, frame: &mut Frame, area: Rect, index: usize, label: &str, value: &str) {
        let focused = self.field == index;
        let marker = if focused { "▸ " } else { "  " };
        let value_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{}{:<14}", marker, label),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(format!("< {} >", value), value_style),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let form = SetupFormScreen::new();
        assert_eq!(form.level(), FitnessLevel::Beginner);
        assert_eq!(form.location(), Location::Home);
        assert_eq!(form.days, 3);
    }

    #[test]
    fn test_field_navigation_wraps() {
        let mut form = SetupFormScreen::new();
        form.prev_field();
        assert_eq!(form.field, FIELD_COUNT - 1);
        form.next_field();
        assert_eq!(form.field, 0);
    }

    #[test]
    fn test_days_cycle_stays_in_range() {
        let mut form = SetupFormScreen::new();
        form.field = 2;
        for _ in 0..20 {
            form.cycle(true);
            assert!((MIN_TRAINING_DAYS..=MAX_TRAINING_DAYS).contains(&form.days));
        }
        for _ in 0..20 {
            form.cycle(false);
            assert!((MIN_TRAINING_DAYS..=MAX_TRAINING_DAYS).contains(&form.days));
        }
    }

    #[test]
    fn test_level_cycle_toggles() {
        let mut form = SetupFormScreen::new();
        form.cycle(true);
        assert_eq!(form.level(), FitnessLevel::Intermediate);
        form.cycle(true);
        assert_eq!(form.level(), FitnessLevel::Beginner);
    }
}
