// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use std::io::stdout;

use anyhow::Result;
use clap::{Parser, Subcommand};

use voidnever::{print_name, print_sum, spin_forever};

/// Demonstrate unit, inferred, and never function return kinds.
#[derive(Debug, Parser)]
#[clap(name = env!("CARGO_CRATE_NAME"), version)]
#[command(version, about, long_about = None)]
pub struct App {
    #[clap(subcommand)]
    command: Option<CLICommand>,
}

#[derive(Debug, Subcommand)]
enum CLICommand {
    /// prints NAME on its own line
    Name {
        /// the text to print
        #[arg(required = true)]
        name: String,
    },

    /// prints the sum of A and B
    Sum {
        #[arg(required = true, allow_hyphen_values = true)]
        a: i64,
        #[arg(required = true, allow_hyphen_values = true)]
        b: i64,
    },

    /// prints a line forever; never returns
    Spin,
}

fn main() -> Result<()> {
    let args = App::parse();
    let mut out = stdout();

    match args.command {
        Some(command) => match command {
            CLICommand::Name { name } => print_name(&mut out, &name)?,
            CLICommand::Sum { a, b } => print_sum(&mut out, a, b)?,
            CLICommand::Spin => spin_forever(),
        },
        None => {
            print_name(&mut out, "Great typescripted")?;
            print_sum(&mut out, 25, 79)?;
        }
    }

    Ok(())
}
