//! Log bridge for the termlayer binary.
//!
//! Library crates only use the `log` facade. The binary installs this bridge
//! once at startup; it writes timestamped lines to stderr so that the normal
//! command output on stdout stays machine readable.
//!
//! Level precedence: `--log-level` flag, then `RUST_LOG`, then `warn`.

use log::{LevelFilter, Log, Metadata, Record};
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::{SystemTime, UNIX_EPOCH};

struct LogBridge {
    level: LevelFilter,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        let mut sink = self.sink.lock();
        // Nowhere left to report a failed log write
        let _ = sink.write_all(line.as_bytes());
    }

    fn flush(&self) {
        let _ = self.sink.lock().flush();
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn get_timestamp() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    format!("{}.{:06}", now.as_secs(), now.subsec_micros())
}

fn format_record(record: &Record<'_>) -> String {
    format!(
        "[{}] [{:<5}] [{}] {}\n",
        get_timestamp(),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Level read from `RUST_LOG`, if it holds a plain level name.
fn level_from_env() -> Option<LevelFilter> {
    std::env::var("RUST_LOG").ok()?.trim().parse().ok()
}

/// Pick the effective level from the CLI override and the environment.
pub fn effective_level(cli_level: Option<LevelFilter>) -> LevelFilter {
    cli_level
        .or_else(level_from_env)
        .unwrap_or(LevelFilter::Warn)
}

/// Route `log` records to stderr. Only the first call has any effect.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let level = effective_level(cli_level);
    let bridge = BRIDGE.get_or_init(|| LogBridge {
        level,
        sink: Mutex::new(Box::new(io::stderr())),
    });
    if log::set_logger(bridge).is_ok() {
        log::set_max_level(bridge.level);
    }
}
