use idlens_client::Error;
use idlens_engine::RenderOptions;

/// Display path for already-classified upstream failures. These never
/// pass through the rendering engine.
pub fn print_error(err: &Error, opts: &RenderOptions) {
    println!();
    println!("{}", opts.warn(&"─".repeat(80)));
    println!("{} {}", opts.bad("✗"), opts.emph("ERROR"));
    println!("{}", opts.warn(&"─".repeat(80)));
    println!("{}", opts.bad(&err.to_string()));

    if let Some(code) = status_code(err) {
        println!("Status Code: {}", code);
    }

    if let Some(hint) = hint(err) {
        println!();
        println!("{} {}", opts.warn("💡 Hint:"), hint);
    }

    if let Error::LegallyRestricted { details } = err {
        println!();
        println!("{}", opts.accent("Details:"));
        println!("{}", details);
    }
}

fn status_code(err: &Error) -> Option<u16> {
    match err {
        Error::AuthRejected => Some(401),
        Error::RateLimited => Some(429),
        Error::LegallyRestricted { .. } => Some(451),
        Error::Api { status, .. } => Some(*status),
        _ => None,
    }
}

fn hint(err: &Error) -> Option<&'static str> {
    match err {
        Error::AuthRejected => Some("This indicates an authentication error. Check your API key."),
        Error::RateLimited => Some("You've exceeded the API rate limits. Try again later."),
        Error::LegallyRestricted { .. } => {
            Some("The requested information cannot be provided due to legal reasons.")
        }
        Error::Api { status: 400, .. } => Some("Bad request. Check your search parameters."),
        _ => None,
    }
}
