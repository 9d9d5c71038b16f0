//! Command-Line Argument Parsing Module
//!
//! Uses clap for type-safe argument parsing.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

/// srt-configure command-line arguments
#[derive(Parser, Debug)]
#[command(name = "srt-configure")]
#[command(about = "Apply SRT socket options taken from an srt:// URI")]
pub struct ConfigureArgs {
    /// SRT URI (e.g., "srt://example.com:9000?latency=200&mode=caller")
    pub uri: String,

    /// Extra option overriding the URI query (KEY=VALUE, can be repeated)
    #[arg(short = 'o', long = "option", value_parser = parse_key_value)]
    pub options: Vec<(String, String)>,

    /// Path to libsrt; without it the options are only recorded (dry run)
    #[arg(long, env = "SRT_LIBRARY")]
    pub library: Option<PathBuf>,

    /// Load libsrt by its platform library name
    #[arg(long)]
    pub system_library: bool,

    /// Set pbkeylen=16 when a passphrase is given without a key length
    #[arg(long)]
    pub passphrase_defaults: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl ConfigureArgs {
    /// Check if the options go to a real transport library
    pub fn uses_library(&self) -> bool {
        self.library.is_some() || self.system_library
    }

    /// Default log filter for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Validate argument combinations
    pub fn validate(&self) -> Result<(), String> {
        if self.library.is_some() && self.system_library {
            return Err("Cannot specify both --library and --system-library".to_string());
        }

        if self.options.iter().any(|(key, _)| key.is_empty()) {
            return Err("Option keys must not be empty".to_string());
        }

        Ok(())
    }
}

/// Split `KEY=VALUE` at the first `=`
fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE: no `=` found in `{}`", raw))?;
    Ok((key.trim().to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_options() {
        let args = ConfigureArgs::parse_from([
            "srt-configure",
            "srt://host:9000",
            "-o",
            "latency=200",
            "--option",
            "streamid=#!::r=live/cam,m=publish",
        ]);

        assert_eq!(args.uri, "srt://host:9000");
        assert_eq!(
            args.options,
            vec![
                ("latency".to_string(), "200".to_string()),
                ("streamid".to_string(), "#!::r=live/cam,m=publish".to_string()),
            ]
        );
        assert!(!args.passphrase_defaults);
    }

    #[test]
    fn test_option_without_equals_is_rejected() {
        let result = ConfigureArgs::try_parse_from(["srt-configure", "srt://host:9000", "-o", "latency"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_uses_library() {
        let args = ConfigureArgs::parse_from(["srt-configure", "srt://:9000", "--library", "/usr/lib/libsrt.so"]);
        assert!(args.uses_library());
        assert_eq!(args.library, Some(PathBuf::from("/usr/lib/libsrt.so")));

        let args = ConfigureArgs::parse_from(["srt-configure", "srt://:9000", "--system-library"]);
        assert!(args.uses_library());
    }

    #[test]
    fn test_log_filter() {
        let args = ConfigureArgs::parse_from(["srt-configure", "srt://:9000"]);
        assert_eq!(args.log_filter(), "warn");

        let args = ConfigureArgs::parse_from(["srt-configure", "srt://:9000", "-vv"]);
        assert_eq!(args.verbose, 2);
        assert_eq!(args.log_filter(), "trace");
    }

    #[test]
    fn test_validate() {
        let args = ConfigureArgs::parse_from([
            "srt-configure",
            "srt://:9000",
            "--library",
            "libsrt.so",
            "--system-library",
        ]);
        assert!(args.validate().is_err());

        let args = ConfigureArgs::parse_from(["srt-configure", "srt://:9000", "-o", "=5"]);
        assert!(args.validate().is_err());

        let args = ConfigureArgs::parse_from(["srt-configure", "srt://:9000", "-o", "fc=25600"]);
        assert!(args.validate().is_ok());
    }
}
