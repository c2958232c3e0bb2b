use owo_colors::OwoColorize;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::JoinHandle;
use std::time::Duration;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const TICK: Duration = Duration::from_millis(100);

/// Braille-frame progress indicator on a background thread.
///
/// The indicator writes to stderr; `stop` joins the thread and erases the
/// line before returning, so report lines on stdout never interleave with
/// a half-drawn frame.
pub struct Spinner {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
    clear_len: usize,
}

impl Spinner {
    pub fn start(message: &str, enable_color: bool) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);
        let text = message.to_string();
        let clear_len = text.chars().count() + 4;

        let handle = std::thread::spawn(move || {
            let mut tick = 0usize;
            while flag.load(Ordering::Relaxed) {
                let frame = FRAMES[tick % FRAMES.len()];
                let line = if enable_color {
                    format!("\r{} {}", frame.cyan(), text)
                } else {
                    format!("\r{} {}", frame, text)
                };
                let mut err = std::io::stderr();
                let _ = err.write_all(line.as_bytes());
                let _ = err.flush();
                std::thread::sleep(TICK);
                tick += 1;
            }
        });

        Self {
            running,
            handle: Some(handle),
            clear_len,
        }
    }

    pub fn stop(mut self) {
        self.finish();
    }

    fn finish(&mut self) {
        self.running.store(false, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        let mut err = std::io::stderr();
        let _ = write!(err, "\r{}\r", " ".repeat(self.clear_len));
        let _ = err.flush();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if self.handle.is_some() {
            self.finish();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_stops_cleanly() {
        let spinner = Spinner::start("working...", false);
        std::thread::sleep(Duration::from_millis(250));
        spinner.stop();
    }

    #[test]
    fn test_dropped_spinner_joins_its_thread() {
        let spinner = Spinner::start("working...", false);
        drop(spinner);
    }
}
