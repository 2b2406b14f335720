mod manager;
mod persistence;

pub use manager::SessionManager;
pub use persistence::{load_state, save_state, SessionState};
