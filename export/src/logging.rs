use crate::error::Error;
use flexi_logger::Logger;

/// Logs go to stderr; stdout carries the exported document.
pub fn init() -> Result<(), Error> {
    Logger::try_with_env_or_str("info")?
        .log_to_stderr()
        .start()?;

    Ok(())
}
