use std::fs::File;
use std::path::Path;

use env_logger::{Builder, Env, Target};

use crate::config::beside_exe;
use crate::error::AppError;

pub const LOG_FILE: &str = "rustroids.log";

/// Log beside the executable, or in the temp dir when that is read-only.
pub fn init_default() -> Result<(), AppError> {
    init(&beside_exe(LOG_FILE)).or_else(|_| init(&std::env::temp_dir().join(LOG_FILE)))
}

/// Route `log` output to a file; the terminal belongs to the game.
///
/// `RUST_LOG` picks the filter, `info` otherwise.
pub fn init(path: &Path) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::Logging(format!("cannot create {}: {}", path.display(), e)))?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritable_log_path_is_a_logging_error() {
        let path = std::env::temp_dir()
            .join("rustroids-no-such-dir")
            .join("nested")
            .join(LOG_FILE);
        let err = init(&path).unwrap_err();
        assert!(matches!(err, AppError::Logging(ref msg) if msg.contains("cannot create")));
    }
}
