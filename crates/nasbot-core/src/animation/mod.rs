/// Cosmetic animation producers — two binary-rain panes and the robot's
/// mouth.
///
/// Each producer is a background loop that publishes immutable
/// [`AnimationFrame`]s. Frames are sent with `try_send`: when the UI is
/// behind, frames are dropped rather than queued.
pub mod robot;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::debug;

use crate::pipeline::WakeFn;

/// Frames buffered between producers and the UI.
pub const FRAME_CHANNEL_CAPACITY: usize = 64;

/// Which rain pane a frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane {
    Left,
    Right,
}

impl Pane {
    fn thread_name(self) -> &'static str {
        match self {
            Self::Left => "nasbot-rain-left",
            Self::Right => "nasbot-rain-right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationFrame {
    /// A fresh block of random binary digits for one pane.
    Rain { pane: Pane, text: String },
    /// Mouth state for the robot art.
    Mouth { open: bool },
}

/// Timing and geometry for the producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationSettings {
    pub rain_interval: Duration,
    pub mouth_interval: Duration,
    pub rain_rows: usize,
    pub rain_columns: usize,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            rain_interval: Duration::from_millis(100),
            mouth_interval: Duration::from_millis(300),
            rain_rows: 20,
            rain_columns: 6,
        }
    }
}

/// Handle to the running producers.
pub struct AnimationHandle {
    /// Receive frames on the UI thread.
    pub frame_rx: Receiver<AnimationFrame>,
    cancel: Arc<AtomicBool>,
    _threads: Vec<thread::JoinHandle<()>>,
}

impl AnimationHandle {
    /// Signal every producer to exit after its current tick.
    pub fn stop(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }
}

impl Drop for AnimationHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Spawn both rain producers and the mouth toggler.
pub fn start_animation(settings: AnimationSettings, wake: WakeFn) -> AnimationHandle {
    let (tx, rx) = bounded::<AnimationFrame>(FRAME_CHANNEL_CAPACITY);
    let cancel = Arc::new(AtomicBool::new(false));
    let mut threads = Vec::with_capacity(3);

    for pane in [Pane::Left, Pane::Right] {
        let tx = tx.clone();
        let cancel = cancel.clone();
        let wake = wake.clone();
        let thread = thread::Builder::new()
            .name(pane.thread_name().into())
            .spawn(move || {
                let mut rng = rand::rng();
                run_ticker(settings.rain_interval, &cancel, || {
                    let text = binary_rain(&mut rng, settings.rain_rows, settings.rain_columns);
                    publish(&tx, AnimationFrame::Rain { pane, text }, &wake)
                });
            })
            .expect("failed to spawn rain thread");
        threads.push(thread);
    }

    let mouth_cancel = cancel.clone();
    let thread = thread::Builder::new()
        .name("nasbot-mouth".into())
        .spawn(move || {
            let mut open = false;
            run_ticker(settings.mouth_interval, &mouth_cancel, || {
                open = !open;
                publish(&tx, AnimationFrame::Mouth { open }, &wake)
            });
        })
        .expect("failed to spawn mouth thread");
    threads.push(thread);

    AnimationHandle {
        frame_rx: rx,
        cancel,
        _threads: threads,
    }
}

/// `rows` lines of `columns` random `0`/`1` digits, each line ending in `\n`.
pub fn binary_rain<R: Rng + ?Sized>(rng: &mut R, rows: usize, columns: usize) -> String {
    let mut text = String::with_capacity(rows * (columns + 1));
    for _ in 0..rows {
        for _ in 0..columns {
            text.push(if rng.random_bool(0.5) { '1' } else { '0' });
        }
        text.push('\n');
    }
    text
}

// ─── Background threads ─────────────────────────────────────────────────────

/// Call `tick` every `interval` until cancelled or `tick` returns `false`.
fn run_ticker(interval: Duration, cancel: &AtomicBool, mut tick: impl FnMut() -> bool) {
    while !cancel.load(Ordering::Relaxed) {
        if !tick() {
            break;
        }
        thread::sleep(interval);
    }
    debug!("Animation: {:?} exiting", thread::current().name());
}

/// Returns `false` once the UI side has gone away.
fn publish(tx: &Sender<AnimationFrame>, frame: AnimationFrame, wake: &WakeFn) -> bool {
    match tx.try_send(frame) {
        Ok(()) => {
            wake();
            true
        }
        Err(TrySendError::Full(_)) => true,
        Err(TrySendError::Disconnected(_)) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Instant;

    #[test]
    fn test_binary_rain_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let text = binary_rain(&mut rng, 20, 6);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 20);
        for line in lines {
            assert_eq!(line.len(), 6);
            assert!(line.chars().all(|c| c == '0' || c == '1'));
        }
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_binary_rain_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(binary_rain(&mut rng, 0, 6), "");
        assert_eq!(binary_rain(&mut rng, 2, 0), "\n\n");
    }

    #[test]
    fn test_producers_emit_all_frame_kinds_and_stop() {
        let settings = AnimationSettings {
            rain_interval: Duration::from_millis(5),
            mouth_interval: Duration::from_millis(5),
            ..AnimationSettings::default()
        };
        let handle = start_animation(settings, Arc::new(|| {}));

        let (mut left, mut right, mut mouth) = (false, false, false);
        let deadline = Instant::now() + Duration::from_secs(10);
        while !(left && right && mouth) {
            assert!(Instant::now() < deadline, "animation frames did not arrive");
            match handle.frame_rx.recv_timeout(Duration::from_millis(100)) {
                Ok(AnimationFrame::Rain { pane: Pane::Left, .. }) => left = true,
                Ok(AnimationFrame::Rain { pane: Pane::Right, .. }) => right = true,
                Ok(AnimationFrame::Mouth { .. }) => mouth = true,
                Err(_) => {}
            }
        }

        handle.stop();
        // Producers exit within one tick; once they do, the channel drains
        // and disconnects.
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            assert!(Instant::now() < deadline, "producers did not stop");
            match handle.frame_rx.recv_timeout(Duration::from_millis(100)) {
                Err(crossbeam_channel::RecvTimeoutError::Disconnected) => break,
                _ => continue,
            }
        }
    }

    #[test]
    fn test_dropping_handle_ends_producers() {
        let settings = AnimationSettings {
            rain_interval: Duration::from_millis(5),
            mouth_interval: Duration::from_millis(5),
            ..AnimationSettings::default()
        };
        let wake: WakeFn = Arc::new(|| {});
        let handle = start_animation(settings, wake.clone());
        assert!(Arc::strong_count(&wake) > 1);

        drop(handle);

        let deadline = Instant::now() + Duration::from_secs(10);
        while Arc::strong_count(&wake) > 1 {
            assert!(Instant::now() < deadline, "producers outlived their handle");
            thread::sleep(Duration::from_millis(20));
        }
    }

    #[test]
    fn test_mouth_alternates() {
        let settings = AnimationSettings {
            rain_interval: Duration::from_secs(3600),
            mouth_interval: Duration::from_millis(20),
            ..AnimationSettings::default()
        };
        let handle = start_animation(settings, Arc::new(|| {}));

        let mut states = Vec::new();
        let deadline = Instant::now() + Duration::from_secs(10);
        while states.len() < 3 {
            assert!(Instant::now() < deadline, "mouth frames did not arrive");
            if let Ok(AnimationFrame::Mouth { open }) =
                handle.frame_rx.recv_timeout(Duration::from_millis(100))
            {
                states.push(open);
            }
        }
        handle.stop();
        assert_eq!(states, vec![true, false, true]);
    }
}
