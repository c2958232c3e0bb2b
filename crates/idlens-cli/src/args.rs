use crate::types::SearchKind;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "idlens")]
#[command(about = "Query identity-lookup APIs and render the results readably", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, global = true, help = "Override the API base URL")]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    Lookup {
        kind: SearchKind,

        query: String,

        #[arg(long, help = "Write the raw payload to this file after rendering")]
        save: Option<PathBuf>,

        #[arg(long, help = "Never prompt after rendering")]
        yes: bool,
    },

    Credits,

    Render {
        file: PathBuf,
    },

    Key {
        #[arg(help = "API key to store in the config file")]
        api_key: String,
    },
}
