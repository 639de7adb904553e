use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::stderr_buffer::BufferedStderr;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` enables debug output
/// for this crate. Output goes through the stderr buffer so it never draws
/// over the TUI.
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("skill_tracker=debug,warn")
        } else {
            EnvFilter::new("skill_tracker=info,warn")
        }
    });

    // try_init: a second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(BufferedStderr::default)
                .with_ansi(false)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
