//! Confirms the structured log records required by §10.1 actually reach a
//! subscriber, the way an embedder installing `tracing-subscriber` would see
//! them.

use std::io;
use std::sync::{Arc, Mutex};

use orderbook_core::{Book, Side};
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct CapturingWriter(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturingWriter {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn trade_fills_are_logged_at_debug() {
    let buffer = CapturingWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::DEBUG)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut book = Book::new(2).unwrap();
        book.submit_limit(Side::Ask, 10.0, 5).unwrap();
        book.submit_limit(Side::Bid, 10.0, 5).unwrap();
    });

    let log = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(
        log.contains("fill_id"),
        "expected a per-trade debug record, got: {log}"
    );
}

#[test]
fn submit_and_cancel_are_logged_at_trace() {
    let buffer = CapturingWriter::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(tracing::Level::TRACE)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut book = Book::new(2).unwrap();
        let (id, _) = book.submit_limit(Side::Bid, 10.0, 5).unwrap();
        book.cancel(id);
    });

    let log = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(log.contains("submit_limit"), "expected a submit trace record, got: {log}");
    assert!(log.contains("cancel"), "expected a cancel trace record, got: {log}");
}
