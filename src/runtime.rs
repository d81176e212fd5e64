use std::sync::mpsc::{self, Receiver, RecvTimeoutError, SendError, Sender};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the session loop reacts to between redraws
#[derive(Clone, Debug)]
pub enum SessionEvent {
    Key(KeyEvent),
    Resize,
    /// nothing arrived within one tick
    Tick,
    /// the feed is gone; no more input will ever arrive
    Closed,
}

pub trait EventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<SessionEvent, RecvTimeoutError>;
}

/// Events pushed through an mpsc channel, either by the terminal reader
/// thread or directly by a test.
pub struct ChannelEventSource {
    rx: Receiver<SessionEvent>,
}

impl ChannelEventSource {
    pub fn new(rx: Receiver<SessionEvent>) -> Self {
        Self { rx }
    }

    /// Spawns a thread forwarding crossterm key presses and resizes. The
    /// thread exits on a read error or once the receiver is dropped.
    pub fn terminal() -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            let forwarded = match event::read() {
                // windows reports releases too
                Ok(CtEvent::Key(key)) if key.kind != KeyEventKind::Release => {
                    tx.send(SessionEvent::Key(key))
                }
                Ok(CtEvent::Resize(_, _)) => tx.send(SessionEvent::Resize),
                Ok(_) => Ok(()),
                Err(err) => {
                    tracing::error!(%err, "terminal event stream closed");
                    break;
                }
            };
            if forwarded.is_err() {
                break;
            }
        });

        Self::new(rx)
    }
}

impl EventSource for ChannelEventSource {
    fn recv_timeout(&self, timeout: Duration) -> Result<SessionEvent, RecvTimeoutError> {
        self.rx.recv_timeout(timeout)
    }
}

/// Queue one key press per char of `text`
pub fn send_text(tx: &Sender<SessionEvent>, text: &str) -> Result<(), SendError<SessionEvent>> {
    text.chars().try_for_each(|c| send_key(tx, KeyCode::Char(c)))
}

pub fn send_key(tx: &Sender<SessionEvent>, code: KeyCode) -> Result<(), SendError<SessionEvent>> {
    tx.send(SessionEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

pub struct Runner<E: EventSource> {
    source: E,
    tick_rate: Duration,
}

impl<E: EventSource> Runner<E> {
    pub fn new(source: E, tick_rate: Duration) -> Self {
        Self { source, tick_rate }
    }

    /// Waits at most one tick for the next event
    pub fn step(&self) -> SessionEvent {
        match self.source.recv_timeout(self.tick_rate) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) => SessionEvent::Tick,
            Err(RecvTimeoutError::Disconnected) => SessionEvent::Closed,
        }
    }
}
