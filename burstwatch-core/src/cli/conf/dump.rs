use crate::conf::{SettingsOverrides, resolve_settings};
use serde::Serialize;
use std::path::PathBuf;

pub fn dump(path: Option<PathBuf>) -> anyhow::Result<()> {
    let settings = resolve_settings(path.as_deref(), &SettingsOverrides::default())?;
    dump_json(&settings)
}

fn dump_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}
