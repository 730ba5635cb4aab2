use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Signed Gigya REST calls and callback signature checks.
#[derive(Parser, Debug)]
#[command(
    name = "gigya",
    version,
    about,
    long_about = None,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults to config.toml, then config.default.toml)
    #[arg(short, long, global = true, env = "GIGYA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Call `service.method` with optional key=value parameters
    Call {
        service: String,
        method: String,
        #[arg(value_name = "KEY=VALUE", value_parser = parse_key_val)]
        params: Vec<(String, String)>,
    },

    /// Check a user callback signature
    ValidateUser {
        uid: String,
        timestamp: String,
        signature: String,
    },

    /// Check a friend callback signature
    ValidateFriend {
        uid: String,
        timestamp: String,
        friend_uid: String,
        signature: String,
    },
}

/// Splits on the first `=`, so values may contain `=` themselves.
fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected key=value, got '{}'", s))
}
