//! Loading indicator for pending rewrites.

use std::io::Write;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Braille spinner frames.
const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INTERVAL: Duration = Duration::from_millis(80);

/// Draws a spinner on stderr whenever the watched loading flag is set.
///
/// The spinner only animates while the flag is `true`; between requests it
/// stays silent. Call [`Spinner::stop`] to end the task and clear its line.
pub struct Spinner {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
}

impl Spinner {
    pub fn follow(message: &str, loading: watch::Receiver<bool>) -> Self {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);
        let message = message.to_string();

        let handle = tokio::spawn(async move {
            let mut frame = 0;
            let mut drawn = false;
            loop {
                if *loading.borrow() {
                    eprint!("\x1b[2K\r{} {message}", FRAMES[frame % FRAMES.len()]);
                    let _ = std::io::stderr().flush();
                    drawn = true;
                    frame += 1;
                }

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    _ = cancel_rx.changed() => break,
                }
            }
            if drawn {
                eprint!("\x1b[2K\r");
                let _ = std::io::stderr().flush();
            }
        });

        Self {
            handle,
            cancel: cancel_tx,
        }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_single_braille_chars() {
        for frame in FRAMES {
            assert_eq!(frame.chars().count(), 1);
        }
    }

    #[tokio::test]
    async fn follows_flag_and_stops() {
        let (tx, rx) = watch::channel(false);
        let spinner = Spinner::follow("rewriting", rx);
        tx.send_replace(true);
        tokio::time::sleep(Duration::from_millis(200)).await;
        tx.send_replace(false);
        spinner.stop().await;
    }

    #[tokio::test]
    async fn idle_spinner_stops_immediately() {
        let (_tx, rx) = watch::channel(false);
        Spinner::follow("idle", rx).stop().await;
    }
}
