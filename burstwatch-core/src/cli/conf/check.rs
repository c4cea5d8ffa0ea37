use crate::conf::{ConfigError, SettingsOverrides, resolve_settings};
use crate::ingest::discover;
use anyhow::bail;
use owo_colors::OwoColorize;
use std::path::PathBuf;

pub fn check(path: PathBuf, plain: bool) -> anyhow::Result<()> {
    let settings = match resolve_settings(Some(&path), &SettingsOverrides::default()) {
        Ok(settings) => settings,
        Err(err) => {
            print_config_error(&err, plain);
            bail!("{} is not a valid settings file", path.display());
        }
    };

    let files = discover(&settings.log_pattern)?;

    let tick = if plain {
        "✔".to_string()
    } else {
        "✔".green().to_string()
    };

    println!("{tick} Settings loaded successfully");
    println!("{tick} {} log files match {}", files.len(), settings.log_pattern);
    println!(
        "{tick} counting '{}' with status {}",
        settings.needle,
        settings.status.as_deref().unwrap_or("any")
    );
    println!("{tick} top {} IPs per {} window", settings.limit, settings.period);

    Ok(())
}

fn print_config_error(err: &ConfigError, plain: bool) {
    if plain {
        eprintln!("{}", err);
    } else {
        eprintln!();
        eprintln!("{}", err.red());
    }
    if let Some(hint) = config_error_hint(err) {
        eprintln!();
        eprintln!("{}", hint);
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Setting { source, .. } => config_error_hint(source),

        ConfigError::InvalidPeriod { .. } | ConfigError::ZeroPeriod => Some(
            "Periods are written as human readable durations.\n\
             \n\
             Example:\n\
             \n\
             period = \"10m\"",
        ),

        ConfigError::PeriodTooLarge { .. } => Some(
            "Windows longer than a year are not supported.\n\
             \n\
             Use a shorter period such as \"1d\" or \"7d\".",
        ),

        ConfigError::Parse { .. } => Some(
            "Settings files are HCL. Known keys are log, match, status, limit, period and format.\n\
             \n\
             Run `burstwatch config init` to write a commented example.",
        ),

        _ => None,
    }
}
