use std::io;
use std::sync::mpsc::{self, TrySendError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, KeyEvent, KeyEventKind};

pub enum Event {
    Key(KeyEvent),
    Frame,
    Sample,
}

/// Two uncoupled periodic clocks. Neither waits for the other, so the number
/// of frames between two samples drifts with the terminal's pace.
pub struct Clocks {
    frame_rate: Duration,
    sample_rate: Duration,
    last_frame: Instant,
    last_sample: Instant,
}

impl Clocks {
    pub fn new(frame_rate: Duration, sample_rate: Duration, now: Instant) -> Self {
        Self {
            frame_rate,
            sample_rate,
            last_frame: now,
            last_sample: now,
        }
    }

    /// How long to wait for input before the next clock fires.
    pub fn timeout(&self, now: Instant) -> Duration {
        let frame = self.frame_rate.saturating_sub(now.saturating_duration_since(self.last_frame));
        let sample = self.sample_rate.saturating_sub(now.saturating_duration_since(self.last_sample));
        frame.min(sample)
    }

    /// Which clocks are due at `now`, as (frame, sample). Due clocks restart from `now`.
    pub fn due(&mut self, now: Instant) -> (bool, bool) {
        let frame = now.saturating_duration_since(self.last_frame) >= self.frame_rate;
        if frame {
            self.last_frame = now;
        }
        let sample = now.saturating_duration_since(self.last_sample) >= self.sample_rate;
        if sample {
            self.last_sample = now;
        }
        (frame, sample)
    }
}

/// Ticks that may sit in the channel at once. A slow draw coalesces ticks
/// instead of queueing them, so keys never wait behind a backlog.
const TICK_BACKLOG: usize = 2;

/// Keep key presses, drop everything else (mouse, resize, key release).
fn translate(ev: event::Event) -> Option<Event> {
    match ev {
        event::Event::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        _ => None,
    }
}

/// Queue a clock tick unless one is already waiting. Returns false once the receiver is gone.
fn offer_tick(tx: &mpsc::SyncSender<Event>, tick: Event) -> bool {
    match tx.try_send(tick) {
        Ok(()) | Err(TrySendError::Full(_)) => true,
        Err(TrySendError::Disconnected(_)) => false,
    }
}

pub struct EventHandler {
    rx: mpsc::Receiver<Event>,
}

impl EventHandler {
    pub fn new(frame_rate_ms: u64, sample_rate_ms: u64) -> Self {
        let (tx, rx) = mpsc::sync_channel(TICK_BACKLOG);
        let mut clocks = Clocks::new(
            Duration::from_millis(frame_rate_ms),
            Duration::from_millis(sample_rate_ms),
            Instant::now(),
        );

        thread::spawn(move || loop {
            let timeout = clocks.timeout(Instant::now());
            if event::poll(timeout).unwrap_or(false) {
                if let Some(key) = event::read().ok().and_then(translate) {
                    if tx.send(key).is_err() {
                        return;
                    }
                }
                continue;
            }

            let (frame, sample) = clocks.due(Instant::now());
            if frame && !offer_tick(&tx, Event::Frame) {
                return;
            }
            if sample && !offer_tick(&tx, Event::Sample) {
                return;
            }
        });

        Self { rx }
    }

    pub fn next(&self) -> io::Result<Event> {
        self.rx
            .recv()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn nothing_due_at_start() {
        let t0 = Instant::now();
        let mut c = Clocks::new(ms(16), ms(50), t0);
        assert_eq!(c.due(t0), (false, false));
        assert_eq!(c.timeout(t0), ms(16));
    }

    #[test]
    fn clocks_fire_independently() {
        let t0 = Instant::now();
        let mut c = Clocks::new(ms(16), ms(50), t0);
        let mut frames = 0;
        let mut samples = 0;
        for step in 1..=100u64 {
            let (f, s) = c.due(t0 + ms(step));
            frames += f as u32;
            samples += s as u32;
        }
        assert_eq!(frames, 6);
        assert_eq!(samples, 2);
    }

    #[test]
    fn timeout_picks_nearest_clock() {
        let t0 = Instant::now();
        let mut c = Clocks::new(ms(16), ms(50), t0);
        for step in 1..=48u64 {
            c.due(t0 + ms(step));
        }
        // frame last fired at 48ms, sample is due at 50ms
        assert_eq!(c.timeout(t0 + ms(48)), ms(2));
    }

    #[test]
    fn late_poll_is_not_negative() {
        let t0 = Instant::now();
        let c = Clocks::new(ms(16), ms(50), t0);
        assert_eq!(c.timeout(t0 + ms(500)), Duration::ZERO);
    }

    #[test]
    fn only_key_presses_get_through() {
        use crossterm::event::{KeyCode, KeyEventState, KeyModifiers, MouseEvent, MouseEventKind};

        let press = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(matches!(translate(event::Event::Key(press)), Some(Event::Key(k)) if k == press));

        let release = KeyEvent {
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
            ..press
        };
        assert!(translate(event::Event::Key(release)).is_none());

        let mouse = MouseEvent {
            kind: MouseEventKind::Moved,
            column: 3,
            row: 4,
            modifiers: KeyModifiers::NONE,
        };
        assert!(translate(event::Event::Mouse(mouse)).is_none());
        assert!(translate(event::Event::Resize(80, 24)).is_none());
    }

    #[test]
    fn ticks_coalesce_when_receiver_lags() {
        let (tx, rx) = mpsc::sync_channel(TICK_BACKLOG);
        for _ in 0..100 {
            assert!(offer_tick(&tx, Event::Frame));
        }
        assert_eq!(rx.try_iter().count(), TICK_BACKLOG);
    }

    #[test]
    fn keys_are_not_stuck_behind_ticks() {
        let (tx, rx) = mpsc::sync_channel(TICK_BACKLOG);
        for _ in 0..50 {
            offer_tick(&tx, Event::Frame);
            offer_tick(&tx, Event::Sample);
        }
        let handle = thread::spawn(move || {
            let key = KeyEvent::new(crossterm::event::KeyCode::Char('q'), crossterm::event::KeyModifiers::NONE);
            tx.send(Event::Key(key)).is_ok()
        });
        let pending: Vec<Event> = (0..TICK_BACKLOG + 1).filter_map(|_| rx.recv().ok()).collect();
        assert!(handle.join().unwrap());
        assert!(matches!(pending.last(), Some(Event::Key(_))));
    }

    #[test]
    fn offer_reports_closed_channel() {
        let (tx, rx) = mpsc::sync_channel(TICK_BACKLOG);
        drop(rx);
        assert!(!offer_tick(&tx, Event::Sample));
    }
}
