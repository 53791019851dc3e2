use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, default_value = "config.toml")]
    pub config: String,
    /// Create the config file if it does not exist or is broken.
    #[arg(long)]
    pub create_config: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Validate the configuration, connect and ping the cache.
    Check,
    /// Look up a cached tile and write its content to a file.
    Get {
        layer: String,
        z: u32,
        x: u32,
        y: u32,
        #[arg(long)]
        output: String,
    },
    /// Store the content of a file as a tile.
    Put {
        layer: String,
        z: u32,
        x: u32,
        y: u32,
        #[arg(long)]
        input: String,
        #[arg(long, default_value = "image/png")]
        content_type: String,
    },
}
