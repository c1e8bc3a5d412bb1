use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::{dump_dataset, serve};

#[derive(Parser)]
#[command(name = "enerdash")]
#[command(about = "Energy consumption dashboard with CLI tools and web server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:3000")]
        bind_address: String,
    },
    /// Generate the synthetic dataset and print it as JSON
    ///
    /// Useful for inspecting what a server started with the same seed
    /// will serve, and for piping fixture data into other tools.
    DumpDataset {
        /// Seed for the dataset generator
        #[arg(short, long, env = "ENERDASH_DATASET_SEED", default_value_t = 1337)]
        seed: u64,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address } => {
                serve(&bind_address).await?;
            }
            Commands::DumpDataset { seed } => {
                dump_dataset(seed)?;
            }
        }
        Ok(())
    }
}
