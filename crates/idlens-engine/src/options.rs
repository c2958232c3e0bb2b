use owo_colors::OwoColorize;

/// Rendering context threaded through every renderer.
///
/// Whether color is on is the caller's decision (terminal detection,
/// `--no-color`, `NO_COLOR`); the engine only branches on the flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub enable_color: bool,
}

impl RenderOptions {
    pub fn colored() -> Self {
        Self { enable_color: true }
    }

    pub fn plain() -> Self {
        Self { enable_color: false }
    }

    /// Positive markers and success lines.
    pub fn ok(&self, text: &str) -> String {
        if self.enable_color {
            text.green().to_string()
        } else {
            text.to_string()
        }
    }

    /// Negative markers and failure lines.
    pub fn bad(&self, text: &str) -> String {
        if self.enable_color {
            text.red().to_string()
        } else {
            text.to_string()
        }
    }

    /// Labels and soft separators.
    pub fn warn(&self, text: &str) -> String {
        if self.enable_color {
            text.yellow().to_string()
        } else {
            text.to_string()
        }
    }

    /// Frames, links, counts.
    pub fn accent(&self, text: &str) -> String {
        if self.enable_color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }

    /// Section headers inside the generic tree dump.
    pub fn section(&self, text: &str) -> String {
        if self.enable_color {
            text.magenta().to_string()
        } else {
            text.to_string()
        }
    }

    /// Headline text.
    pub fn emph(&self, text: &str) -> String {
        if self.enable_color {
            text.bright_white().bold().to_string()
        } else {
            text.to_string()
        }
    }

    /// De-emphasized annotations.
    pub fn dim(&self, text: &str) -> String {
        if self.enable_color {
            text.bright_black().to_string()
        } else {
            text.to_string()
        }
    }
}
