// Binary-only UI module; the game logic lives in the ironplan library.
mod ui;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ironplan::build_info;
use ironplan::constants::POLL_INTERVAL_MS;
use ironplan::engine::ProgressEngine;
use ironplan::persistence;
use ironplan::workouts::{generate_plan, WorkoutDay};
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use ui::achievements_panel::draw_achievements_panel;
use ui::plan_view::{day_complete, PlanViewScreen};
use ui::player_hud::draw_player_hud;
use ui::setup_form::SetupFormScreen;
use ui::toasts::draw_overlays;

enum Screen {
    Setup,
    Plan,
    Achievements,
}

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "ironplan {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("IronPlan - Terminal Workout Planner\n");
                println!("Usage: ironplan [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'ironplan --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    // Load the progress record (zero-state on first run or corrupt save)
    let mut engine = ProgressEngine::new(persistence::load_stats());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut engine);

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    engine: &mut ProgressEngine,
) -> io::Result<()> {
    let mut screen = Screen::Setup;
    let mut setup = SetupFormScreen::new();
    let mut plan_view = PlanViewScreen::new();
    let mut plan: Option<Vec<WorkoutDay>> = None;

    loop {
        let now = Instant::now();
        engine.expire_signals(now);

        terminal.draw(|frame| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(5), // Player HUD
                    Constraint::Min(0),    // Active screen
                ])
                .split(frame.size());

            draw_player_hud(frame, chunks[0], engine.stats());

            match screen {
                Screen::Setup => setup.draw(frame, chunks[1]),
                Screen::Plan => {
                    if let Some(plan) = &plan {
                        plan_view.draw(frame, chunks[1], plan, engine.stats());
                    }
                }
                Screen::Achievements => draw_achievements_panel(frame, chunks[1], engine.stats()),
            }

            draw_overlays(frame, engine.signals(), engine.stats(), now);
        })?;

        if !event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        match screen {
            Screen::Setup => match key.code {
                KeyCode::Up => setup.prev_field(),
                KeyCode::Down => setup.next_field(),
                KeyCode::Left => setup.cycle(false),
                KeyCode::Right => setup.cycle(true),
                KeyCode::Enter => {
                    plan = Some(generate_plan(setup.level(), setup.location(), setup.days));
                    engine.record_plan_generated();
                    persistence::save_stats(engine.stats())?;
                    plan_view = PlanViewScreen::new();
                    screen = Screen::Plan;
                }
                KeyCode::Esc => {
                    if plan.is_some() {
                        screen = Screen::Plan;
                    }
                }
                KeyCode::Char('a') => screen = Screen::Achievements,
                KeyCode::Char('q') => break,
                _ => {}
            },
            Screen::Plan => match key.code {
                KeyCode::Up => plan_view.prev_exercise(),
                KeyCode::Down => {
                    if let Some(plan) = &plan {
                        plan_view.next_exercise(plan);
                    }
                }
                KeyCode::Left => plan_view.prev_day(),
                KeyCode::Right => {
                    if let Some(plan) = &plan {
                        plan_view.next_day(plan);
                    }
                }
                KeyCode::Char(' ') => {
                    if let Some(plan) = &plan {
                        let day = &plan[plan_view.selected_day];
                        if !day.exercises.is_empty() {
                            let d = plan_view.selected_day as u32;
                            let e = plan_view.selected_exercise as u32;
                            if engine.stats().exercise_completed(d, e) {
                                engine.uncomplete_exercise(d, e);
                            } else {
                                engine.complete_exercise(d, e);
                            }
                            persistence::save_stats(engine.stats())?;
                        }
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(plan) = &plan {
                        let day = &plan[plan_view.selected_day];
                        // Day bonus is claimable once everything is ticked
                        if day_complete(day, plan_view.selected_day, engine.stats()) {
                            engine.complete_workout_day(Local::now().date_naive());
                            persistence::save_stats(engine.stats())?;
                        }
                    }
                }
                KeyCode::Char('n') => screen = Screen::Setup,
                KeyCode::Char('a') => screen = Screen::Achievements,
                KeyCode::Esc => {
                    engine.dismiss_level_up();
                    engine.dismiss_achievements();
                }
                KeyCode::Char('q') => break,
                _ => {}
            },
            Screen::Achievements => match key.code {
                KeyCode::Char('a') | KeyCode::Esc => {
                    screen = if plan.is_some() {
                        Screen::Plan
                    } else {
                        Screen::Setup
                    };
                }
                KeyCode::Char('q') => break,
                _ => {}
            },
        }
    }

    Ok(())
}
