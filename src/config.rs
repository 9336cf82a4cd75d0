//! Server configuration.
//!
//! Configuration comes from command-line flags only:
//!
//! ```text
//! -h, --host <HOST>        Host to bind to (default: 0.0.0.0)
//! -p, --port <PORT>        Port to listen on (default: 6379)
//! -f, --framing <MODE>     `line` or `read` (default: line)
//! -v, --version            Print version information
//!     --help               Print help
//! ```
//!
//! Log verbosity is controlled separately through `RUST_LOG`.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How a connection's byte stream is cut into commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Framing {
    /// Accumulate bytes and execute each `\n`-terminated line
    #[default]
    Line,
    /// Treat the bytes of every read as exactly one command
    PerRead,
}

impl FromStr for Framing {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(Framing::Line),
            "read" => Ok(Framing::PerRead),
            other => Err(ConfigError::InvalidFraming(other.to_string())),
        }
    }
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Framing::Line => f.write_str("line"),
            Framing::PerRead => f.write_str("read"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Command framing for every connection
    pub framing: Framing,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: crate::DEFAULT_HOST.to_string(),
            port: crate::DEFAULT_PORT,
            framing: Framing::default(),
        }
    }
}

/// What the binary should do after reading its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction {
    Run(Config),
    Help,
    Version,
}

/// Errors produced while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} requires a value")]
    MissingValue(String),

    #[error("invalid port number: {0}")]
    InvalidPort(String),

    #[error("invalid framing mode: {0} (expected `line` or `read`)")]
    InvalidFraming(String),

    #[error("unknown argument: {0}")]
    UnknownArgument(String),
}

impl Config {
    /// Parses configuration from command-line arguments.
    ///
    /// `args` excludes the program name.
    ///
    /// # Example
    /// ```
    /// use linekv::config::{CliAction, Config, Framing};
    ///
    /// let action = Config::from_args(["--port", "6380", "--framing", "read"]).unwrap();
    /// let CliAction::Run(config) = action else { panic!("expected run") };
    /// assert_eq!(config.port, 6380);
    /// assert_eq!(config.framing, Framing::PerRead);
    /// ```
    pub fn from_args<I, S>(args: I) -> Result<CliAction, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = Config::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--host" | "-h" => {
                    config.host = args.next().ok_or(ConfigError::MissingValue(arg))?;
                }
                "--port" | "-p" => {
                    let value = args.next().ok_or(ConfigError::MissingValue(arg))?;
                    config.port = value
                        .parse()
                        .map_err(|_| ConfigError::InvalidPort(value))?;
                }
                "--framing" | "-f" => {
                    let value = args.next().ok_or(ConfigError::MissingValue(arg))?;
                    config.framing = value.parse()?;
                }
                "--help" => return Ok(CliAction::Help),
                "--version" | "-v" => return Ok(CliAction::Version),
                _ => return Err(ConfigError::UnknownArgument(arg)),
            }
        }

        Ok(CliAction::Run(config))
    }

    /// Returns the bind address as a string
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_config(args: &[&str]) -> Config {
        match Config::from_args(args.iter().copied()) {
            Ok(CliAction::Run(config)) => config,
            other => panic!("expected a run config, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults() {
        let config = run_config(&[]);
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_address(), "0.0.0.0:6379");
        assert_eq!(config.framing, Framing::Line);
    }

    #[test]
    fn test_all_flags() {
        let config = run_config(&["-h", "127.0.0.1", "-p", "7000", "-f", "read"]);
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7000);
        assert_eq!(config.framing, Framing::PerRead);
        assert_eq!(config.bind_address(), "127.0.0.1:7000");
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(Config::from_args(["--help"]), Ok(CliAction::Help));
        assert_eq!(Config::from_args(["-v"]), Ok(CliAction::Version));
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Config::from_args(["--port"]),
            Err(ConfigError::MissingValue("--port".to_string()))
        );
        assert_eq!(
            Config::from_args(["--port", "99999"]),
            Err(ConfigError::InvalidPort("99999".to_string()))
        );
        assert_eq!(
            Config::from_args(["--framing", "bytes"]),
            Err(ConfigError::InvalidFraming("bytes".to_string()))
        );
        assert_eq!(
            Config::from_args(["--verbose"]),
            Err(ConfigError::UnknownArgument("--verbose".to_string()))
        );
    }

    #[test]
    fn test_framing_display_roundtrip() {
        for framing in [Framing::Line, Framing::PerRead] {
            assert_eq!(framing.to_string().parse::<Framing>(), Ok(framing));
        }
    }
}
