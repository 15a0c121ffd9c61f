//! File logging for the `event=... module=... status=...` lines emitted by
//! event construction and feed filtering.
//!
//! # Invariants
//! - At most one logger per process; a repeat call must use the same level
//!   and directory.
//! - Log lines carry error codes and counts, never titles, dates or
//!   properties.

use flexi_logger::{
    Cleanup, Criterion, DeferredNow, FileSpec, LogSpecification, Logger, LoggerHandle, Naming,
    WriteMode,
};
use log::{info, LevelFilter, Record};
use once_cell::sync::OnceCell;
use std::io::Write;
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "eventgrid";
const ROTATE_AT_BYTES: u64 = 2 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 3;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();

struct ActiveLogger {
    level: LevelFilter,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts writing logs at `level` into `log_dir/eventgrid*.log`.
///
/// `level` is any `log::LevelFilter` name (`off|error|warn|info|debug|trace`,
/// any case).
///
/// # Errors
/// - Unknown level, empty or relative `log_dir`, or a directory that cannot
///   be created.
/// - Logging already started with a different level or directory.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let level: LevelFilter = level
        .trim()
        .parse()
        .map_err(|_| format!("unknown log level `{}`", level.trim()))?;
    let dir = PathBuf::from(log_dir.trim());
    if !dir.is_absolute() {
        return Err(format!("log directory must be absolute: `{}`", log_dir.trim()));
    }

    let active = ACTIVE.get_or_try_init(|| open_logger(level, &dir))?;
    if active.level != level || active.dir != dir {
        return Err(format!(
            "logging already writes {} to `{}`",
            active.level,
            active.dir.display()
        ));
    }
    Ok(())
}

/// Level and directory of the running logger, if any.
pub fn logging_status() -> Option<(LevelFilter, PathBuf)> {
    ACTIVE.get().map(|active| (active.level, active.dir.clone()))
}

/// `debug` for debug builds, `info` for release builds.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn open_logger(level: LevelFilter, dir: &Path) -> Result<ActiveLogger, String> {
    std::fs::create_dir_all(dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", dir.display()))?;

    let handle = Logger::with(LogSpecification::builder().default(level).build())
        .log_to_file(FileSpec::default().directory(dir).basename(LOG_BASENAME))
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .write_mode(WriteMode::Direct)
        .append()
        .format_for_files(event_line)
        .start()
        .map_err(|err| format!("cannot start logger: {err}"))?;

    info!(
        "event=logging_start module=core status=ok version={} level={}",
        env!("CARGO_PKG_VERSION"),
        level
    );
    Ok(ActiveLogger {
        level,
        dir: dir.to_path_buf(),
        _handle: handle,
    })
}

// `2020-01-01 10:00:00.000 INFO  event=... module=...`
fn event_line(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(
        w,
        "{} {:<5} {}",
        now.now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.args()
    )
}
