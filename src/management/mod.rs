mod activity;
mod auth;
mod session;

pub use activity::ActivityLog;
pub use activity::LogLevel;
pub use activity::LogLine;
pub use auth::TokenManager;
pub use session::SessionContext;
pub use session::SessionSnapshot;
pub use session::SessionStore;
pub use session::StateError;
