//! `config get|set|path`

use crate::FrameseqError;
use crate::cli::ConfigCommands;
use crate::config::FrameseqConfig;

type Result<T> = std::result::Result<T, FrameseqError>;

/// Handle the config command - manage application settings
///
/// # Errors
///
/// Returns `FrameseqError` if the configuration key is invalid, value parsing fails,
/// or configuration save fails.
pub fn execute(mut config: FrameseqConfig, command: &ConfigCommands, quiet: bool) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = split_setting(setting)?;
            let new_value = config.set(key, value)?;
            config.save()?;
            if !quiet {
                println!("Set {key} = {new_value}");
            }
        }
        ConfigCommands::Get { key } => {
            println!("{}", config.get(key.trim())?);
        }
        ConfigCommands::Path => {
            println!("{}", FrameseqConfig::config_path()?.display());
        }
    }
    Ok(())
}

fn split_setting(setting: &str) -> Result<(&str, &str)> {
    setting
        .split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .ok_or_else(|| {
            FrameseqError::InvalidInput("Invalid format. Use: frameseq config set key=value".into())
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_setting() {
        assert_eq!(split_setting("quiet = true").unwrap(), ("quiet", "true"));
        assert_eq!(split_setting("a=b=c").unwrap(), ("a", "b=c"));
        assert!(matches!(split_setting("quiet"), Err(FrameseqError::InvalidInput(_))));
    }

    #[test]
    fn test_get_unknown_key() {
        let command = ConfigCommands::Get { key: "nope".into() };
        assert!(execute(FrameseqConfig::default(), &command, true).is_err());
    }
}
