pub mod config;
pub mod error;
pub mod mentor;
pub mod metrics;
pub mod middleware;
pub mod post;
pub mod question;
pub mod router;
pub mod state;
pub mod tracing;
pub mod user;
pub mod validation;

pub use config::ApiConfig;
pub use state::ApiState;
