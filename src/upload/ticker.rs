use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Delivers a unit tick every `step` on a channel drained by the UI thread.
///
/// The background thread stops on its next send once the `Ticker` is dropped.
pub struct Ticker {
    receiver: Receiver<()>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn<F>(step: Duration, on_tick: F) -> io::Result<Self>
    where
        F: Fn() + Send + 'static,
    {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let (sender, receiver) = mpsc::channel();

        let handle = thread::Builder::new()
            .name("upload-ticker".to_string())
            .spawn(move || {
                runtime.block_on(async {
                    let mut interval = tokio::time::interval(step);
                    // The first interval tick completes immediately.
                    interval.tick().await;
                    loop {
                        interval.tick().await;
                        if sender.send(()).is_err() {
                            log::debug!("Ticker receiver dropped, stopping");
                            break;
                        }
                        on_tick();
                    }
                });
            })?;

        Ok(Self {
            receiver,
            handle: Some(handle),
        })
    }

    /// Returns the number of ticks received since the last call.
    pub fn drain(&self) -> usize {
        self.receiver.try_iter().count()
    }

    pub fn wait_tick(&self, timeout: Duration) -> bool {
        match self.receiver.recv_timeout(timeout) {
            Ok(()) => true,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    /// Disconnects the channel and waits for the thread to notice.
    pub fn stop(mut self) {
        let handle = self.handle.take();
        drop(self);
        if let Some(handle) = handle {
            if handle.join().is_err() {
                log::warn!("Upload ticker thread panicked");
            }
        }
    }
}

impl std::fmt::Debug for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ticker")
            .field("running", &self.handle.is_some())
            .finish()
    }
}
