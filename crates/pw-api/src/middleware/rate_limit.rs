use axum::Router;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

/// Rate limiting for write endpoints
/// 2 requests per second with burst of 5 (keeps mentors from being flooded)
pub fn apply_write_rate_limit<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let governor_conf = GovernorConfigBuilder::default()
        .per_millisecond(500)
        .burst_size(5)
        .key_extractor(SmartIpKeyExtractor)
        .use_headers()
        .finish()
        .expect("Failed to build write rate limiter configuration");

    router.layer(GovernorLayer::new(governor_conf))
}
