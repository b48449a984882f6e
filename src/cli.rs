use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod commands;

use commands::serve;

#[derive(Parser)]
#[command(name = "cropvision")]
#[command(about = "Host server for the CropVision single-page app")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the compiled frontend bundle
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8080, 127.0.0.1:3000)
        #[arg(short, long, env = "BIND_ADDRESS", default_value = "0.0.0.0:8080")]
        bind_address: String,

        /// Directory holding the built bundle (index.html, wasm and assets)
        ///
        /// Client-side routes are answered with its index.html.
        #[arg(short, long, env = "CROPVISION_DIST_DIR", default_value = "workspace/frontend/dist")]
        dist_dir: PathBuf,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, dist_dir } => {
                serve(&bind_address, &dist_dir).await?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_arguments() {
        let cli = Cli::try_parse_from([
            "cropvision",
            "serve",
            "--bind-address",
            "127.0.0.1:9000",
            "--dist-dir",
            "/srv/cropvision",
        ])
        .unwrap();

        let Commands::Serve { bind_address, dist_dir } = cli.command;
        assert_eq!(bind_address, "127.0.0.1:9000");
        assert_eq!(dist_dir, PathBuf::from("/srv/cropvision"));
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["cropvision"]).is_err());
    }
}
