//! Content loaders for reading scenario data from files.
//!
//! Configuration is TOML; scenarios and scripts are RON. All loaders use
//! summon-core types directly with serde.

pub mod config;
pub mod scenario;
pub mod script;

pub use config::ConfigLoader;
pub use scenario::ScenarioLoader;
pub use script::ScriptLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}

#[cfg(test)]
pub(crate) fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file
}
