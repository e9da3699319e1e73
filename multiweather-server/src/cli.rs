use anyhow::Context;
use clap::{Parser, Subcommand};
use multiweather_core::{Config, ProviderId, provider};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "multiweather", version, about = "Weather aggregation service")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the API key for a specific provider.
    Configure {
        /// Provider short name, e.g. "openweather" or "darksky".
        provider: String,

        /// API key issued by the provider.
        #[arg(long)]
        api_key: String,
    },

    /// Serve the aggregation endpoint.
    Serve {
        /// Port to listen on.
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { provider, api_key } => {
                let id = ProviderId::try_from(provider.as_str())?;

                let mut config = Config::load().context("Failed to load configuration")?;
                config.upsert_provider_api_key(id, api_key);
                config.save().context("Failed to save configuration")?;

                println!("Stored API key for provider '{id}'.");
                Ok(())
            }
            Command::Serve { port } => {
                let config = Config::load().context("Failed to load configuration")?;
                let providers = provider::providers_from_config(&config)?;

                crate::web::serve(providers, port).await
            }
        }
    }
}
