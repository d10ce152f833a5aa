//! Command-line argument parsing for pawswipe.
//!
//! Flags override the `PAWSWIPE_*` environment variables.

use crate::config::{parse_usize, AppConfig};
use crate::error::ConfigError;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI with these overrides (default)
    Run(RunOptions),
}

/// Overrides collected from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunOptions {
    pub count: Option<usize>,
    pub super_likes: Option<usize>,
    pub base_url: Option<String>,
    pub offline: bool,
    pub json: bool,
}

impl RunOptions {
    /// Layer these options over `config` and validate the result.
    pub fn apply(self, mut config: AppConfig) -> Result<AppConfig, ConfigError> {
        if let Some(count) = self.count {
            config.session.cat_count = count;
        }
        if let Some(super_likes) = self.super_likes {
            config.session.initial_super_likes = super_likes;
        }
        if let Some(url) = self.base_url {
            config.base_url = url;
        }
        config.offline |= self.offline;
        config.print_json |= self.json;
        config.session.validate()?;
        Ok(config)
    }
}

pub const USAGE: &str = "\
Usage: pawswipe [OPTIONS]

Swipe through a deck of cats in your terminal.

Options:
  -n, --count <N>          Cats per session (default 10)
      --super-likes <N>    Super likes per session (default 2)
      --base-url <URL>     Image service (default https://cataas.com)
      --offline            Use generated placeholder images
      --json               Print the summary as JSON on exit
  -V, --version            Print version
  -h, --help               Print this help

Keys: ←/h nope, →/l like, ↑/s super like, u undo, r restart, q quit.
Drag the card with the mouse to swipe.";

/// Parse command-line arguments (including the program name).
///
/// # Examples
///
/// ```
/// use pawswipe::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["pawswipe".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: Iterator<Item = String>,
{
    let mut options = RunOptions::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, ConfigError> {
            inline
                .clone()
                .or_else(|| args.next())
                .ok_or_else(|| ConfigError::invalid(name, "", "missing value"))
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--count" | "-n" => {
                let input = value("--count")?;
                options.count = Some(parse_usize("--count", &input)?);
            }
            "--super-likes" => {
                let input = value("--super-likes")?;
                options.super_likes = Some(parse_usize("--super-likes", &input)?);
            }
            "--base-url" => {
                let input = value("--base-url")?;
                if !(input.starts_with("http://") || input.starts_with("https://")) {
                    return Err(ConfigError::invalid("--base-url", &input, "expected an http(s) URL"));
                }
                options.base_url = Some(input);
            }
            "--offline" => options.offline = true,
            "--json" => options.json = true,
            other => return Err(ConfigError::invalid("argument", other, "unknown flag")),
        }
    }
    Ok(CliCommand::Run(options))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ConfigError> {
        let mut all = vec!["pawswipe".to_string()];
        all.extend(args.iter().map(|s| s.to_string()));
        parse_args(all.into_iter())
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-h"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(parse(&[]).unwrap(), CliCommand::Run(RunOptions::default()));
    }

    #[test]
    fn test_parse_run_options() {
        let command = parse(&[
            "-n",
            "5",
            "--super-likes=1",
            "--offline",
            "--json",
            "--base-url",
            "http://localhost:9000",
        ])
        .unwrap();
        assert_eq!(
            command,
            CliCommand::Run(RunOptions {
                count: Some(5),
                super_likes: Some(1),
                base_url: Some("http://localhost:9000".to_string()),
                offline: true,
                json: true,
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["--unknown"]).is_err());
        assert!(parse(&["--count"]).is_err());
        assert!(parse(&["--count", "lots"]).is_err());
        assert!(parse(&["--base-url", "file:///tmp"]).is_err());
    }

    #[test]
    fn test_options_override_config() {
        let options = RunOptions {
            count: Some(3),
            offline: true,
            ..Default::default()
        };
        let config = options.apply(AppConfig::default()).unwrap();
        assert_eq!(config.session.cat_count, 3);
        assert!(config.offline);
        assert!(!config.print_json);

        let too_many = RunOptions {
            count: Some(500),
            ..Default::default()
        };
        assert!(matches!(
            too_many.apply(AppConfig::default()),
            Err(ConfigError::PoolTooSmall { .. })
        ));
    }

    #[test]
    fn test_flag_fixes_oversized_env_count() {
        let env = |name: &str| (name == "PAWSWIPE_COUNT").then(|| "80".to_string());
        let from_env = AppConfig::from_lookup(env).unwrap();

        let options = RunOptions {
            count: Some(5),
            ..Default::default()
        };
        let config = options.apply(from_env.clone()).unwrap();
        assert_eq!(config.session.cat_count, 5);

        assert!(matches!(
            RunOptions::default().apply(from_env),
            Err(ConfigError::PoolTooSmall { .. })
        ));
    }
}
