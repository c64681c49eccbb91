//! Shared test doubles for integration tests.

#![allow(dead_code)]

use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use draw_number::{
    BoxedView, ConfigSource, DrawNumberApp, DrawNumberView, DrawResult, ObserverHandle,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// A notification received by a [`RecordingView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ObserverSet,
    Started,
    Result(DrawResult),
    Error(String),
    NumberIncorrect,
}

/// Event log shared between a view and the test.
pub type EventLog = Arc<Mutex<Vec<Event>>>;

/// View that records every notification it receives.
#[derive(Debug, Default)]
pub struct RecordingView {
    events: EventLog,
    observer: Option<ObserverHandle>,
}

impl RecordingView {
    /// Creates a view and returns the log it writes to.
    pub fn new() -> (Self, EventLog) {
        let view = Self::default();
        let log = Arc::clone(&view.events);
        (view, log)
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

impl DrawNumberView for RecordingView {
    fn set_observer(&mut self, observer: ObserverHandle) {
        self.observer = Some(observer);
        self.push(Event::ObserverSet);
    }

    fn start(&mut self) {
        self.push(Event::Started);
    }

    fn result(&mut self, result: DrawResult) {
        self.push(Event::Result(result));
    }

    fn display_error(&mut self, message: &str) {
        self.push(Event::Error(message.to_string()));
    }

    fn number_incorrect(&mut self) {
        self.push(Event::NumberIncorrect);
    }
}

/// Returns the errors recorded in `log`.
pub fn errors(log: &EventLog) -> Vec<String> {
    log.lock()
        .unwrap()
        .iter()
        .filter_map(|e| match e {
            Event::Error(m) => Some(m.clone()),
            _ => None,
        })
        .collect()
}

/// Returns the last recorded event.
pub fn last(log: &EventLog) -> Option<Event> {
    log.lock().unwrap().last().cloned()
}

/// Writer whose contents stay readable after it has been moved into a view.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    /// Everything written so far.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Builds an app from inline configuration text with one recording view.
pub fn app_with_config(
    text: &str,
    seed: u64,
) -> (Arc<DrawNumberApp>, EventLog, Arc<AtomicUsize>) {
    let (view, log) = RecordingView::new();
    let quits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&quits);
    let views: Vec<BoxedView> = vec![Box::new(view)];
    let app = DrawNumberApp::new(
        ConfigSource::Text(text.to_string()),
        views,
        StdRng::seed_from_u64(seed),
        move || {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    );
    (app, log, quits)
}
