//! Background scan execution.
//!
//! Scans run as tokio tasks so the UI thread never waits on the asset host.
//! Results come back over a channel and are handed to the controller, which
//! decides whether they are still current.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::models::ItemPath;
use crate::services::compositor::LayerSink;
use crate::services::controller::{Controller, Refresh, Renderer, ScanTicket};
use crate::services::oracle::ExistenceOracle;
use crate::services::scanner::Scanner;

/// A finished scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Ticket the scan was started for
    pub ticket: ScanTicket,
    /// Discovered items in serial order
    pub items: Vec<ItemPath>,
}

/// Runs scans on a tokio runtime and collects their results.
pub struct ScanDispatcher<O> {
    scanner: Arc<Scanner<O>>,
    runtime: Handle,
    sender: UnboundedSender<ScanResult>,
    receiver: UnboundedReceiver<ScanResult>,
    in_flight: Option<JoinHandle<()>>,
}

impl<O: ExistenceOracle + 'static> ScanDispatcher<O> {
    /// Creates a dispatcher spawning onto `runtime`.
    pub fn new(scanner: Scanner<O>, runtime: Handle) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            scanner: Arc::new(scanner),
            runtime,
            sender,
            receiver,
            in_flight: None,
        }
    }

    /// Starts a scan for `ticket`, abandoning the previous one.
    pub fn dispatch(&mut self, ticket: ScanTicket) {
        if let Some(previous) = self.in_flight.take() {
            if !previous.is_finished() {
                debug!("abandoning in-flight scan");
                previous.abort();
            }
        }

        let scanner = Arc::clone(&self.scanner);
        let sender = self.sender.clone();
        self.in_flight = Some(self.runtime.spawn(async move {
            let items = scanner.scan(ticket.category).await;
            // The receiver lives as long as the dispatcher; a send error only
            // happens during shutdown.
            let _ = sender.send(ScanResult { ticket, items });
        }));
    }

    /// Dispatches a scan if `refresh` asks for one.
    pub fn handle(&mut self, refresh: Refresh) {
        if let Refresh::Scan(ticket) = refresh {
            self.dispatch(ticket);
        }
    }

    /// Returns a finished scan without waiting, if one is ready.
    pub fn try_next(&mut self) -> Option<ScanResult> {
        self.receiver.try_recv().ok()
    }

    /// Waits for the next finished scan.
    pub async fn next(&mut self) -> Option<ScanResult> {
        self.receiver.recv().await
    }

    /// Hands every ready result to `controller`.
    ///
    /// Returns true if at least one of them was rendered.
    pub fn deliver<R: Renderer, S: LayerSink>(&mut self, controller: &mut Controller<R, S>) -> bool {
        let mut rendered = false;
        while let Some(result) = self.try_next() {
            rendered |= controller.complete_scan(result.ticket, result.items);
        }
        rendered
    }
}

impl<O> Drop for ScanDispatcher<O> {
    fn drop(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}
