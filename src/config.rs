use std::path::PathBuf;

pub const DEFAULT_OUTPUT_DIR: &str = "output";
pub const DEFAULT_LOG_FILE: &str = "logs/pixels_cleaner.log";

/// Runtime settings read from the environment (and `.env`, once loaded).
///
/// | Variable            | Default                    |
/// |---------------------|----------------------------|
/// | `PIXELS_INPUT`      | none                       |
/// | `PIXELS_OUTPUT_DIR` | `output`                   |
/// | `LOG_FILE_PATH`     | `logs/pixels_cleaner.log`  |
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub log_file: PathBuf,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            input: non_empty("PIXELS_INPUT").map(PathBuf::from),
            output_dir: non_empty("PIXELS_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR)),
            log_file: non_empty("LOG_FILE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
        }
    }
}
