use clap::Parser;
use subwatch::cli::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();
    subwatch::cli::run(config).await
}
