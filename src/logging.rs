//! Logger bootstrap for the `tap` binary.
//!
//! The library itself only speaks through the `log` facade; nothing here
//! is required to use the engine as a crate.

use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use once_cell::sync::OnceCell;

static LOGGER: OnceCell<LoggerHandle> = OnceCell::new();

/// Initialize stderr logging at `level` (overridable via `RUST_LOG`).
/// Idempotent: only the first call in a process takes effect.
pub fn init_logging(level: &str) -> Result<(), FlexiLoggerError> {
    if LOGGER.get().is_some() {
        return Ok(());
    }
    let handle = Logger::try_with_env_or_str(level)?.start()?;
    let _ = LOGGER.set(handle);
    Ok(())
}
