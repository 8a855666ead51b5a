//! Helpers shared by the integration tests.

use rpsl::base::Registry;
use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by rpsl and the test suite.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To see every line the decoder skips:
///   RUST_LOG=rpsl=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}

/// Returns the registry with all standard types.
pub fn registry() -> Registry {
    init_logging();
    rpsl::types::standard().unwrap()
}

/// A WHOIS response containing a mntner and a role record.
pub const MAINT_EXAMPLE_HK: &str = include_str!("../data/maint-example-hk.txt");

/// A WHOIS response reporting that nothing was found.
pub const NOT_FOUND: &str = include_str!("../data/not-found.txt");

/// A WHOIS response with three route records, two of them with the same
/// primary key.
pub const ROUTES: &str = include_str!("../data/routes.txt");
