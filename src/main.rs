// src/main.rs
use anyhow::Result;
use clap::Parser;
use tidyroot::logging::init_logging;
use tidyroot::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    run(args)
}
