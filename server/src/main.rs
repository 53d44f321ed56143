mod move_handler;
mod server_config;
mod web_server;

use clap::Parser;
use common::games::SessionRng;
use common::log;
use common::logger;

#[derive(Parser)]
#[command(name = "tictactoe_server")]
struct Args {
    /// Path to the YAML server config. Defaults apply when the file is
    /// missing.
    #[arg(long, default_value = "server_config.yaml")]
    config: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logger::init_logger();

    let config = server_config::load_server_config(&args.config)?;

    let rng = match config.rng_seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Bot RNG seed: {}", rng.seed());

    web_server::run_web_server(config, rng).await;

    Ok(())
}
