pub mod activity_log;
pub mod app;
pub mod calendar;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod state;
pub mod stats;
pub mod ui;

pub use activity_log::ActivityLog;
pub use app::router;
pub use calendar::{build_grid, build_grid_with_policy, intensity_level, parse_date, DuplicatePolicy};
pub use config::Config;
pub use seed::load_seed;
pub use state::AppState;
