use std::env;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Names the file log records are written to.
pub const LOG_FILE_VAR: &str = "FLOODIT_LOG";

/// The game draws on the tty that stderr points at, so records only ever go
/// to a file. Without a path logging is switched off; with one, `RUST_LOG`
/// picks the level and defaults to `info`.
pub fn logger_builder(path: Option<&Path>) -> io::Result<Builder> {
    let mut builder = match path {
        Some(path) => {
            let file = File::create(path)?;
            let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
            builder.target(Target::Pipe(Box::new(file)));
            builder
        }
        None => {
            let mut builder = Builder::new();
            builder.filter_level(LevelFilter::Off);
            builder
        }
    };
    builder.format_timestamp_millis();
    Ok(builder)
}

pub fn init() -> io::Result<()> {
    let path = env::var_os(LOG_FILE_VAR).map(PathBuf::from);
    logger_builder(path.as_deref())?.init();
    Ok(())
}
