//! Terminal UI: screens, HUD, and transient overlays.
//!
//! Screens render read-only stats snapshots; every mutation goes through
//! the progress engine in the main loop.

pub mod achievements_panel;
pub mod plan_view;
pub mod player_hud;
pub mod setup_form;
pub mod toasts;
