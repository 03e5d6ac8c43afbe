pub mod app;
pub mod dates;
pub mod errors;
pub mod handlers;
pub mod logs;
pub mod models;
pub mod repository;
pub mod stats;
pub mod storage;
pub mod streak;
pub mod ui;
pub mod state;
pub mod view;

pub use app::router;
pub use repository::Tracker;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
