//! LedBridge CLI — inspect LED-matrix topology configurations and drive
//! the display bridge from a console.

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "ledbridge-cli",
    version,
    about = "Bridge software-rendered frames onto RGB LED matrix panels"
)]
struct Args {
    /// Output as JSON (for parse, geometry)
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: cli::Command,
}

fn main() {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if let Err(e) = cli::run(args.command, args.json) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
