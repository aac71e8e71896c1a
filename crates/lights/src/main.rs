//! lightsctl: command-line control for sysfs RGB LED and backlight lights.

use std::path::PathBuf;

use clap::Parser;

mod cli;

#[derive(Parser)]
#[command(
    name = "lightsctl",
    version,
    about = "Control sysfs RGB LED and backlight lights"
)]
struct Args {
    /// Output as JSON (for list)
    #[arg(long, global = true)]
    json: bool,

    /// Log every individual sysfs write
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Read LED paths from an alternate config file
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Rebase every sysfs path under a directory (for testing)
    #[arg(long, global = true, value_name = "DIR")]
    sysfs_root: Option<PathBuf>,

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

    let opts = cli::GlobalOpts {
        json: args.json,
        config: args.config,
        sysfs_root: args.sysfs_root,
    };

    if let Err(e) = cli::run(args.command, &opts) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
