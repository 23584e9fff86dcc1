use crate::Result;
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, opt_format};
use std::path::Path;

/// Starts the global logger from `RUST_LOG`, falling back to `default_spec`.
///
/// With a `log_dir` the output goes to rotating files there instead of stderr.
/// Keep the returned handle alive for as long as logging is needed.
pub fn setup_logging(default_spec: &str, log_dir: Option<&Path>) -> Result<LoggerHandle> {
    let logger = Logger::try_with_env_or_str(default_spec)?;

    let handle = match log_dir {
        Some(dir) => logger
            .log_to_file(FileSpec::default().directory(dir).basename("memory_match"))
            .format(opt_format)
            .rotate(
                Criterion::Size(10 * 1024 * 1024), // 10 MB per file
                Naming::Numbers,
                Cleanup::KeepLogFiles(1),
            )
            .start()?,
        None => logger
            .format(flexi_logger::colored_default_format)
            .start()?,
    };

    Ok(handle)
}
