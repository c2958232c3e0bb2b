use crate::args::{Cli, Commands};
use crate::handlers;
use anyhow::Result;
use idlens_client::{Client, Config};
use idlens_engine::RenderOptions;
use is_terminal::IsTerminal;

pub fn run(cli: Cli) -> Result<()> {
    let opts = RenderOptions {
        enable_color: color_enabled(cli.no_color),
    };

    match cli.command {
        Some(Commands::Lookup {
            kind,
            query,
            save,
            yes,
        }) => {
            let client = connect(cli.base_url)?;
            handlers::lookup::handle(&client, kind, &query, save.as_deref(), yes, &opts)
        }
        Some(Commands::Credits) => {
            let client = connect(cli.base_url)?;
            handlers::credits::handle(&client, &opts)
        }
        Some(Commands::Render { file }) => handlers::render::handle(&file, &opts),
        Some(Commands::Key { api_key }) => handlers::key::handle(&api_key),
        None => handlers::menu::handle(cli.base_url, &opts),
    }
}

fn color_enabled(no_color: bool) -> bool {
    if no_color || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

/// Resolve configuration and build the API client. Fails early with a
/// pointer to the key sources when no key is configured.
pub(crate) fn connect(base_url_override: Option<String>) -> Result<Client> {
    let mut config = Config::resolve()?;
    if let Some(url) = base_url_override {
        config.base_url = url;
    }
    if !config.has_api_key() {
        anyhow::bail!(
            "no API key configured; set {} or add api_key to {}",
            idlens_client::config::API_KEY_ENV,
            Config::default_path()?.display()
        );
    }
    Ok(Client::new(&config))
}
