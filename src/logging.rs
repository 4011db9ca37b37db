use std::time::SystemTime;

use anyhow::Result;
use log::LevelFilter;

/// Log lines go to stderr so they never mix with anything written as output.
pub fn setup_logger(level: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    log_panics::init();

    Ok(())
}
