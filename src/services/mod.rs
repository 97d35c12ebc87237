//! Service layer for business logic.
//!
//! Discovery (oracle, scanner, theme filter), outfit composition and the
//! controller that ties navigation to both.

pub mod compositor;
pub mod controller;
pub mod dispatcher;
pub mod oracle;
pub mod scanner;
pub mod theme_filter;

// Re-export commonly used types and functions
pub use compositor::{ApplyOutcome, Compositor, LayerSink};
pub use controller::{Controller, Refresh, Renderer, ScanTicket};
pub use dispatcher::{ScanDispatcher, ScanResult};
pub use oracle::{AssetOracle, AssetSource, ExistenceOracle, FsOracle, HttpOracle};
pub use scanner::{ScanSettings, Scanner};
pub use theme_filter::filter_theme;
