//! Log output for the server.
//!
//! What each crate logs, and at which level:
//!
//! | target     | level   | events                                                |
//! |------------|---------|-------------------------------------------------------|
//! | `pw_db`    | `debug` | store built (table sizes)                             |
//! | `pw_db`    | `info`  | connection request recorded                           |
//! | `pw_feed`  | `debug` | post id not found, question skipped for missing post  |
//! | `pw_feed`  | `warn`  | post dropped or not renderable because its author is missing |
//! | `pw_api`   | `debug` | request failed with an `ApiError` (inside the request span) |
//! | `pw_api`   | `info`  | seed source chosen at startup                         |
//!
//! The default directives keep everything in development. In production they keep the
//! startup and write events plus the orphan warnings. `RUST_LOG` replaces the defaults.

use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::config::Environment;

const DEVELOPMENT_DIRECTIVES: &str = "info,pw_db=debug,pw_feed=debug,pw_api=debug,tower_http=debug";

const PRODUCTION_DIRECTIVES: &str = "warn,pw_db=info,pw_feed=warn,pw_api=info,serv=info,tower_http=info";

/// Filter directives used when `RUST_LOG` is unset
pub fn default_directives(env: &Environment) -> &'static str {
    if env.is_production() {
        PRODUCTION_DIRECTIVES
    } else {
        DEVELOPMENT_DIRECTIVES
    }
}

/// Install the global subscriber: pretty output with source locations in
/// development, flattened JSON with the current request span in production.
pub fn init_tracing(env: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(env)));

    let output: Box<dyn Layer<Registry> + Send + Sync> = if env.is_production() {
        fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed()
    } else {
        fmt::layer()
            .pretty()
            .with_file(true)
            .with_line_number(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(output.with_filter(filter))
        .init();

    tracing::info!(environment = ?env, "Tracing initialized");
}
