use crate::conf::{ConfigError, SETTINGS_TEMPLATE};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub fn init(path: PathBuf) -> anyhow::Result<()> {
    write_settings_template(&path)?;
    println!("✔ Wrote {}", path.display());
    Ok(())
}

/// Writes [`SETTINGS_TEMPLATE`] to `path`, refusing to overwrite an existing file.
pub fn write_settings_template(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| write_error(path, e))?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            },
            _ => write_error(path, e),
        })?;

    file.write_all(SETTINGS_TEMPLATE.as_bytes())
        .map_err(|e| write_error(path, e))
}

fn write_error(path: &Path, source: io::Error) -> ConfigError {
    ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    }
}
