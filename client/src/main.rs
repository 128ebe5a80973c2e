mod command;
mod config;
mod render;
mod session;

use std::io;

use clap::Parser;
use common::logger;
use common::log;
use common::version::VERSION;

use command::parse_move_list;
use config::{CONFIG_FILE, Config, get_config_manager};
use session::Session;

#[derive(Parser)]
#[command(name = "tictactoe_client", version, about = "Play tic-tac-toe against a perfect opponent")]
struct Args {
    /// Path of the YAML config file.
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Comma-separated cells for X, played without prompting (e.g. "4,8,1").
    #[arg(long)]
    moves: Option<String>,

    /// Write the default config to the config path and exit.
    #[arg(long)]
    write_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config_manager = get_config_manager(&args.config);

    if args.write_default_config {
        config_manager.set_config(&Config::default())?;
        println!("Default config written to {}", args.config);
        return Ok(());
    }

    let config = config_manager.get_config()?;

    let prefix = config
        .logging
        .prefix
        .clone()
        .or_else(|| args.use_log_prefix.then(|| "Client".to_string()));
    logger::init_logger(prefix, config.logging.debug);

    log!("Tic-tac-toe client {} started (config: {})", VERSION, args.config);

    let stdout = io::stdout().lock();
    let mut session = Session::new(config.display, stdout);

    match args.moves {
        Some(moves) => {
            let moves = parse_move_list(&moves)?;
            session.run_scripted(&moves)?;
        }
        None => session.run_interactive(io::stdin().lock())?,
    }

    log!("Client finished: {}", session.game().status_text());
    Ok(())
}
