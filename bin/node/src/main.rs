#![doc = include_str!("../README.md")]

mod cli;
mod commands;
mod flags;

use clap::Parser;

fn main() {
    if let Err(err) = cli::Cli::parse().run() {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }
}
