//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Compiler and table produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters and gauges via the metrics facade)
//!
//! Consumers:
//!     → stderr (pretty, compact or JSON)
//!     → whatever recorder the host application installs
//! ```

pub mod logging;
pub mod metrics;
