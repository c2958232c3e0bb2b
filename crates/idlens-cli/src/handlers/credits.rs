use crate::ui::spinner::Spinner;
use crate::views;
use anyhow::Result;
use idlens_client::Client;
use idlens_engine::RenderOptions;

pub fn handle(client: &Client, opts: &RenderOptions) -> Result<()> {
    let spinner = Spinner::start("Checking API credits...", opts.enable_color);
    let outcome = client.credits();
    spinner.stop();

    match outcome {
        Ok(value) => {
            views::credits::print_credits(&value, opts);
            Ok(())
        }
        Err(err) => {
            views::error::print_error(&err, opts);
            anyhow::bail!("credits check failed");
        }
    }
}
