pub mod app;
pub mod config;
pub mod errors;
pub mod extract;
pub mod handlers;
pub mod insights;
pub mod journal;
pub mod models;
pub mod mood_log;
pub mod session;
pub mod state;
pub mod suggestions;
pub mod trend;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use session::Session;
pub use state::AppState;
