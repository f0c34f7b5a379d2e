pub mod app;
pub mod charts;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod mood;
pub mod sentiment;
pub mod stats;
pub mod storage;
pub mod store;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_data;
