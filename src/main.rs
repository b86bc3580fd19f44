use anyhow::Result;
use clap::Parser;
use serde::Serialize;
use weighted_leven::WeightedLevenshtein;

mod cli;
use cli::{Cli, Commands};

#[derive(Serialize)]
struct DistanceOutput<'a> {
    a: &'a str,
    b: &'a str,
    distance: u64,
}

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Distance {
            a,
            b,
            bytes,
            json,
            class,
        } => {
            let engine = WeightedLevenshtein::new(class.resolve()?);
            let distance = if bytes {
                engine.distance_bytes(a.as_bytes(), b.as_bytes())?
            } else {
                engine.distance_str(&a, &b)?
            };

            if json {
                let output = DistanceOutput {
                    a: &a,
                    b: &b,
                    distance,
                };
                println!("{}", serde_json::to_string(&output)?);
            } else {
                println!("{}", distance);
            }
        }
        Commands::Config { class } => {
            println!("{}", class.resolve()?.to_json_pretty()?);
        }
    }
    Ok(())
}
