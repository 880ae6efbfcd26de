// Copyright (c) 2026 ALAS Technology. MIT License.
// See LICENSE for details.

//! # nk
//!
//! Entry point for the `nk` binary. Parses CLI arguments, initializes
//! logging, and runs one subcommand:
//!
//! - `gen`    : generate a key pair for a role
//! - `pubkey` : print the public key of a seed file
//! - `sign`   : sign a file with a seed
//! - `verify` : verify a signature with a public key or seed
//! - `inspect`: describe an encoded nkey
//! - `version`: print build version information

mod cli;
mod commands;
mod logging;

use anyhow::Result;
use clap::Parser;

use cli::{Commands, NkCli};

fn main() -> Result<()> {
    let cli = NkCli::parse();
    logging::init_logging(&cli.log_level, cli.log_format)?;

    let output = match cli.command {
        Commands::Gen(args) => commands::generate(args.role.into(), args.json)?,
        Commands::Pubkey(args) => commands::public_key(&args.inkey)?,
        Commands::Sign(args) => commands::sign(&args.inkey, &args.data)?,
        Commands::Verify(args) => commands::verify(&args.key, &args.sig, &args.data)?,
        Commands::Inspect(args) => commands::inspect(&args.value, args.json)?,
        Commands::Version => format!("nk {}", env!("CARGO_PKG_VERSION")),
    };

    println!("{output}");
    Ok(())
}
