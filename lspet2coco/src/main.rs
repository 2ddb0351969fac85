use anyhow::{Context, Result};
use lspet2coco::config::Config;
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, Clone, StructOpt)]
/// Convert HR-LSPET joint annotations to COCO keypoints format
struct Args {
    #[structopt(long)]
    /// configuration file
    pub config_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let Args { config_file } = Args::from_args();
    let config = match &config_file {
        Some(config_file) => Config::open(config_file)
            .with_context(|| format!("failed to load config file '{}'", config_file.display()))?,
        None => Config::default(),
    };

    lspet2coco::start(&config)?;

    Ok(())
}
