//! Process-wide logging setup.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once; subsequent calls are no-ops.
///
/// Filter resolution order: the explicit `filter` argument (env_logger
/// syntax, e.g. "tabula_engine=debug"), then the `RUST_LOG` environment
/// variable, then info level.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(f) = filter {
            builder.parse_filters(f);
        } else if let Ok(f) = std::env::var("RUST_LOG") {
            builder.parse_filters(&f);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
