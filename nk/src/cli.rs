//! # CLI Interface
//!
//! Command-line argument structure for `nk`, using `clap` derive.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use nkeys::PrefixByte;

use crate::logging::LogFormat;

/// Generate, inspect and use nkeys.
#[derive(Parser, Debug)]
#[command(name = "nk", about = "nkeys command line tool", version, propagate_version = true)]
pub struct NkCli {
    /// Default log filter when `RUST_LOG` is unset.
    #[arg(long, global = true, env = "NK_LOG_LEVEL", default_value = "warn")]
    pub log_level: String,

    /// Log output format.
    #[arg(long, global = true, env = "NK_LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a new key pair and print its seed and public key.
    Gen(GenArgs),
    /// Print the public key for a seed file.
    Pubkey(PubkeyArgs),
    /// Sign a file with a seed, printing the hex signature.
    Sign(SignArgs),
    /// Verify a hex signature over a file.
    Verify(VerifyArgs),
    /// Report what kind of nkey a string is and whether it is valid.
    Inspect(InspectArgs),
    /// Print version information and exit.
    Version,
}

/// Roles a signing key pair can be generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Role {
    Account,
    User,
    Server,
    Cluster,
    Operator,
}

impl From<Role> for PrefixByte {
    fn from(role: Role) -> Self {
        match role {
            Role::Account => PrefixByte::Account,
            Role::User => PrefixByte::User,
            Role::Server => PrefixByte::Server,
            Role::Cluster => PrefixByte::Cluster,
            Role::Operator => PrefixByte::Operator,
        }
    }
}

/// Arguments for the `gen` subcommand.
#[derive(Parser, Debug)]
pub struct GenArgs {
    /// Role of the key pair to generate.
    #[arg(value_enum)]
    pub role: Role,

    /// Emit JSON instead of two plain lines.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `pubkey` subcommand.
#[derive(Parser, Debug)]
pub struct PubkeyArgs {
    /// File holding the seed.
    #[arg(long, short = 'i', env = "NK_INKEY")]
    pub inkey: PathBuf,
}

/// Arguments for the `sign` subcommand.
#[derive(Parser, Debug)]
pub struct SignArgs {
    /// File holding the seed.
    #[arg(long, short = 'i', env = "NK_INKEY")]
    pub inkey: PathBuf,

    /// File to sign.
    pub data: PathBuf,
}

/// Arguments for the `verify` subcommand.
#[derive(Parser, Debug)]
pub struct VerifyArgs {
    /// Public key or seed, given literally or as a path to a file holding it.
    #[arg(long, short = 'k')]
    pub key: String,

    /// Hex signature, given literally or as a path to a file holding it.
    #[arg(long, short = 's')]
    pub sig: String,

    /// File the signature covers.
    pub data: PathBuf,
}

/// Arguments for the `inspect` subcommand.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Encoded nkey string.
    pub value: String,

    /// Emit JSON.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        NkCli::command().debug_assert();
    }

    #[test]
    fn parses_gen_with_role() {
        let cli = NkCli::try_parse_from(["nk", "gen", "operator", "--json"]).unwrap();
        match cli.command {
            Commands::Gen(args) => {
                assert_eq!(PrefixByte::from(args.role), PrefixByte::Operator);
                assert!(args.json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_non_signing_role() {
        assert!(NkCli::try_parse_from(["nk", "gen", "curve"]).is_err());
        assert!(NkCli::try_parse_from(["nk", "gen", "seed"]).is_err());
    }
}
