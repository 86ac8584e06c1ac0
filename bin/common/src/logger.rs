use fern::colors::Color;
use log::info;

use crate::{data_dir, Config};

/// Error type for logger initialisation
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Returned when `--log-level` is out of range
    #[error("Invalid log level {0}, expected 0-3")]
    InvalidLevel(u8),

    /// Returned when the log directory or file can't be created
    #[error("Unable to open log file: {0}")]
    Io(#[from] std::io::Error),

    /// Returned when a global logger is already installed
    #[error(transparent)]
    SetLogger(#[from] log::SetLoggerError),
}

/// Maps a `--log-level` value to a level filter
pub fn level_filter(log_level: u8) -> Result<log::LevelFilter, Error> {
    match log_level {
        0 => Ok(log::LevelFilter::Warn),
        1 => Ok(log::LevelFilter::Info),
        2 => Ok(log::LevelFilter::Debug),
        3 => Ok(log::LevelFilter::Trace),
        level => Err(Error::InvalidLevel(level)),
    }
}

/// Installs the global logger
///
/// Logs go to stderr, and additionally to `<data directory>/<binary_name>.log`. The platform's
/// default data directory is used unless one is configured; if there is none, only stderr is used.
pub fn init(config: &Config, binary_name: &str) -> Result<(), Error> {
    let colors = fern::colors::ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Cyan)
        .debug(Color::Green)
        .trace(Color::Magenta);

    let data_directory = config.data_directory.clone().or_else(data_dir::default_data_dir);
    let log_file_path = match data_directory {
        Some(mut path) => {
            data_dir::ensure_exists(&path)?;
            path.push(binary_name);
            path.set_extension("log");
            Some(path)
        }
        None => None,
    };

    let mut dispatch = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{color_line}[{date}][{target}][{level}{color_line}]\t{message}\x1B[0m",
                color_line = format_args!("\x1B[{}m", colors.get_color(&record.level()).to_fg_str()),
                date = chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                target = record.target(),
                level = colors.color(record.level()),
                message = message,
            ))
        })
        .level(level_filter(config.log_level)?)
        .chain(std::io::stderr());

    if let Some(path) = &log_file_path {
        dispatch = dispatch.chain(fern::log_file(path)?);
    }
    dispatch.apply()?;

    if let Some(path) = log_file_path {
        info!("Logging events to {}", path.display());
    }
    Ok(())
}
