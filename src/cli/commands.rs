use crate::config::{AppConfig, StoreBackend};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "empdesk")]
#[command(
    author,
    version,
    about = "A GraphQL API for managing employees and user accounts"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to ./empdesk.yml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage backend
    #[arg(long, global = true, value_enum, env = "EMPDESK_BACKEND")]
    pub backend: Option<StoreBackend>,

    /// MongoDB connection string
    #[arg(long, global = true, env = "MONGO_URI", hide_env_values = true)]
    pub mongo_uri: Option<String>,

    /// MongoDB database name
    #[arg(long, global = true, env = "EMPDESK_DB_NAME")]
    pub db_name: Option<String>,

    /// Timeout for each database call, in milliseconds
    #[arg(long, global = true, env = "EMPDESK_DB_TIMEOUT_MS")]
    pub db_timeout_ms: Option<u64>,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Applies command-line and environment overrides on top of `config`.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(backend) = self.backend {
            config.database.backend = backend;
        }
        if let Some(uri) = &self.mongo_uri {
            config.database.uri = uri.clone();
        }
        if let Some(name) = &self.db_name {
            config.database.name = name.clone();
        }
        if let Some(timeout_ms) = self.db_timeout_ms {
            config.database.timeout_ms = timeout_ms;
        }
        if self.log_file.is_some() {
            config.logging.file = self.log_file.clone();
        }
        if let Commands::Serve { host, port } = &self.command {
            if let Some(host) = host {
                config.server.host = host.clone();
            }
            if let Some(port) = port {
                config.server.port = *port;
            }
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default empdesk.yml to the current directory
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "EMPDESK_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },
}
