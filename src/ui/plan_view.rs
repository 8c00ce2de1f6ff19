//! Weekly plan screen: day strip on the left, exercise checklist on the
//! right.

use ironplan::stats::PlayerStats;
use ironplan::workouts::WorkoutDay;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// True when a non-rest day has every exercise ticked.
pub fn day_complete(day: &WorkoutDay, day_index: usize, stats: &PlayerStats) -> bool {
    !day.exercises.is_empty()
        && day
            .exercises
            .iter()
            .enumerate()
            .all(|(i, _)| stats.exercise_completed(day_index as u32, i as u32))
}

pub struct PlanViewScreen {
    pub selected_day: usize,
    pub selected_exercise: usize,
}

impl PlanViewScreen {
    pub fn new() -> Self {
        Self {
            selected_day: 0,
            selected_exercise: 0,
        }
    }

    pub fn next_day(&mut self, plan: &[WorkoutDay]) {
        if self.selected_day + 1 < plan.len() {
            self.selected_day += 1;
            self.selected_exercise = 0;
        }
    }

    pub fn prev_day(&mut self) {
        if self.selected_day > 0 {
            self.selected_day -= 1;
            self.selected_exercise = 0;
        }
    }

    pub fn next_exercise(&mut self, plan: &[WorkoutDay]) {
        let count = plan[self.selected_day].exercises.len();
        if count > 0 && self.selected_exercise + 1 < count {
            self.selected_exercise += 1;
        }
    }

    pub fn prev_exercise(&mut self) {
        if self.selected_exercise > 0 {
            self.selected_exercise -= 1;
        }
    }

    pub fn draw(&self, frame: &mut Frame, area: Rect, plan: &[WorkoutDay], stats: &PlayerStats) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(26), Constraint::Min(0)])
            .split(area);

        self.draw_day_strip(frame, chunks[0], plan, stats);
        self.draw_day_detail(frame, chunks[1], plan, stats);
    }

    fn draw_day_strip(
        &self,
        frame: &mut Frame,
        area: Rect,
        plan: &[WorkoutDay],
        stats: &PlayerStats,
    ) {
        let mut lines = Vec::with_capacity(plan.len());
        for (i, day) in plan.iter().enumerate() {
            let marker = if day.is_rest() {
                "  "
            } else if day_complete(day, i, stats) {
                "✓ "
            } else {
                "· "
            };
            let style = if i == self.selected_day {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if day.is_rest() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(
                format!("{}{:<10}{}", marker, day.day, day.focus),
                style,
            )));
        }

        let strip = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title(" Week "));
        frame.render_widget(strip, area);
    }

    fn draw_day_detail(
        &self,
        frame: &mut Frame,
        area: Rect,
        plan: &[WorkoutDay],
        stats: &PlayerStats,
    ) {
        let day = &plan[self.selected_day];
        let title = format!(" {} — {} ", day.day, day.focus);
        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(inner);

        let mut lines = Vec::new();
        if day.is_rest() {
            lines.push(Line::from(Span::styled(
                "Rest day. Recover well.",
                Style::default().fg(Color::DarkGray),
            )));
        } else if day.exercises.is_empty() {
            lines.push(Line::from(Span::styled(
                "No exercises prescribed for this focus.",
                Style::default().fg(Color::DarkGray),
            )));
        } else {
            for (i, exercise) in day.exercises.iter().enumerate() {
                let ticked = stats.exercise_completed(self.selected_day as u32, i as u32);
                let checkbox = if ticked { "[x]" } else { "[ ]" };
                let mut style = if ticked {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                if i == self.selected_exercise {
                    style = style.add_modifier(Modifier::BOLD).bg(Color::DarkGray);
                }
                lines.push(Line::from(Span::styled(
                    format!(
                        "{} {}  {}x{}  rest {}",
                        checkbox, exercise.name, exercise.sets, exercise.reps, exercise.rest
                    ),
                    style,
                )));
            }
        }
        frame.render_widget(Paragraph::new(lines), chunks[0]);

        let hint = if day_complete(day, self.selected_day, stats) {
            "Space toggle  D claim day bonus  ←/→ day  N new plan  A achievements  Q quit"
        } else {
            "Space toggle  ←/→ day  N new plan  A achievements  Q quit"
        };
        let controls = Paragraph::new(hint)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(controls, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ironplan::workouts::{generate_plan, FitnessLevel, Location};

    #[test]
    fn test_day_complete_requires_every_exercise() {
        let plan = generate_plan(FitnessLevel::Beginner, Location::Gym, 3);
        let mut stats = PlayerStats::default();
        assert!(!day_complete(&plan[0], 0, &stats));

        for i in 0..plan[0].exercises.len() as u32 {
            stats.completed_exercises.insert((0, i));
        }
        assert!(day_complete(&plan[0], 0, &stats));
    }

    #[test]
    fn test_rest_day_is_never_complete() {
        let plan = generate_plan(FitnessLevel::Beginner, Location::Gym, 2);
        let stats = PlayerStats::default();
        assert!(plan[6].is_rest());
        assert!(!day_complete(&plan[6], 6, &stats));
    }

    #[test]
    fn test_navigation_clamps_to_plan() {
        let plan = generate_plan(FitnessLevel::Beginner, Location::Home, 3);
        let mut view = PlanViewScreen::new();
        view.prev_day();
        assert_eq!(view.selected_day, 0);
        for _ in 0..10 {
            view.next_day(&plan);
        }
        assert_eq!(view.selected_day, plan.len() - 1);
    }

    #[test]
    fn test_changing_day_resets_exercise_cursor() {
        let plan = generate_plan(FitnessLevel::Beginner, Location::Home, 3);
        let mut view = PlanViewScreen::new();
        view.next_exercise(&plan);
        assert_eq!(view.selected_exercise, 1);
        view.next_day(&plan);
        assert_eq!(view.selected_exercise, 0);
    }

    #[test]
    fn test_exercise_cursor_stops_at_list_end() {
        let plan = generate_plan(FitnessLevel::Beginner, Location::Home, 3);
        let count = plan[0].exercises.len();
        let mut view = PlanViewScreen::new();
        for _ in 0..20 {
            view.next_exercise(&plan);
        }
        assert_eq!(view.selected_exercise, count - 1);
    }
}
