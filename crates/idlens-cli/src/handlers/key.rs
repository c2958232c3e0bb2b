use anyhow::Result;
use idlens_client::Config;

/// Store the API key in the config file for future sessions. The
/// `IDLENS_API_KEY` environment variable still wins when set.
pub fn handle(api_key: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.api_key = api_key.to_string();
    config.save()?;

    println!("API key saved to {}", Config::default_path()?.display());
    Ok(())
}
