use color_eyre::{
    eyre::{bail, Context},
    Result,
};
use env_logger::{Builder, Target};
use log::LevelFilter;

use crate::utils::constants::KICKOFF;

/// Maps the amount of `-v` flags received on the command line to the level used for
/// the records emitted by `kickoff` itself
pub fn level_for_verbosity(verbose_level: u8) -> Result<LevelFilter> {
    match verbose_level {
        0 => Ok(LevelFilter::Info),
        1 => Ok(LevelFilter::Debug),
        _ => bail!("kickoff maximum allowed verbosity level is: '-v'"),
    }
}

/// [`config_logger`] The configuration for `env_logger`.
///
/// Records coming from other crates are only shown from the warning level up, whatever
/// the verbosity requested, and `RUST_LOG` can still override both filters
pub fn config_logger(verbose_level: u8, target: Target) -> Result<()> {
    let level = level_for_verbosity(verbose_level)?;
    let mut builder = Builder::new();

    builder
        .target(target)
        .format_indent(Some(4))
        .format_module_path(false)
        .format_timestamp_millis()
        .filter(None, LevelFilter::Warn)
        .filter(Some(KICKOFF), level)
        .parse_default_env();

    builder
        .try_init()
        .with_context(|| "kickoff was unable to set up the logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for_verbosity(0).ok(), Some(LevelFilter::Info));
        assert_eq!(level_for_verbosity(1).ok(), Some(LevelFilter::Debug));
        assert!(level_for_verbosity(2).is_err());
    }
}
