use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event};
use tokio::sync::mpsc::UnboundedSender;

use crate::scheduler::TimerHandle;

/// Poll timeout of the input thread; bounds how long shutdown waits for it.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Everything the host loop reacts to, funnelled through one channel.
#[derive(Debug)]
pub enum HostEvent {
    /// Keyboard, mouse, focus or resize event from the terminal.
    Terminal(Event),
    /// A carousel timer fired.
    Timer(TimerHandle),
    /// OS signal received (SIGINT).
    Shutdown,
}

/// Blocking crossterm reader running on its own thread.
pub struct InputReader {
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputReader {
    pub fn spawn(tx: UnboundedSender<HostEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let thread_stop = Arc::clone(&stop);

        let handle = thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || read_loop(tx, thread_stop))
            .map_err(|err| tracing::error!(error = %err, "Failed to spawn input thread"))
            .ok();

        Self { stop, handle }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn read_loop(tx: UnboundedSender<HostEvent>, stop: Arc<AtomicBool>) {
    while !stop.load(Ordering::Relaxed) {
        match event::poll(POLL_INTERVAL) {
            Ok(true) => match event::read() {
                Ok(event) => {
                    if tx.send(HostEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    tracing::error!(error = %err, "Terminal read failed");
                    break;
                }
            },
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                break;
            }
        }
    }
}
