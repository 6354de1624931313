// src/log.rs
//
// env_logger backend for the `log` facade. Lines go to stderr so stdout
// carries only the result message.
//
//   [00:00:01.234][INFO] Fetched 812345 bytes

use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

use env_logger::Env;

static START: OnceLock<Instant> = OnceLock::new();

const DEFAULT_FILTER: &str = "warn";

fn start() -> Instant {
    *START.get_or_init(Instant::now)
}

pub fn fmt_elapsed(ms: u128) -> String {
    let total_ms = ms as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1_000;
    let ms = total_ms % 1_000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}

/// Install the logger. `RUST_LOG` overrides the default `warn` filter.
/// Calling twice is harmless.
pub fn init() {
    start();
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .format(|buf, record| {
            let elapsed = fmt_elapsed(start().elapsed().as_millis());
            writeln!(buf, "[{elapsed}][{}] {}", record.level(), record.args())
        })
        .try_init();
}
