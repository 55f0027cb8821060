//! Oxmo converts SVG drawings into the icon annotations of Modelica models.
mod args;
mod config;
mod convert;

use clap::Parser;

use crate::args::{Args, Command, RunCommand};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    match args.command {
        Command::Convert(args) => args.run(args.inferred_config()?)?,
    }
    Ok(())
}
