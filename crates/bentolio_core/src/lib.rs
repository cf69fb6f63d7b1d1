//! Bentolio Core Runtime
//!
//! This crate provides the foundational primitives for the Bentolio
//! interaction core:
//!
//! - **Widget Catalog**: the configurable, ordered set of widget ids
//! - **Geometry**: screen rectangles used as animation anchors
//! - **Timers**: a deterministic, cancellable, virtual-time timer queue
//!
//! Everything here is single-threaded and driven by the host event loop;
//! there is no wall-clock dependency, which keeps the whole stack
//! testable without sleeping.
//!
//! # Example
//!
//! ```rust
//! use bentolio_core::timer::TimerQueue;
//!
//! let mut timers: TimerQueue<&str> = TimerQueue::new();
//! let handle = timers.schedule(100.0, "open");
//!
//! assert!(timers.advance(50.0).is_empty());
//! assert_eq!(timers.advance(50.0), vec!["open"]);
//!
//! // Cancelling a fired timer is a no-op.
//! assert!(!timers.cancel(handle));
//! ```

pub mod color;
pub mod geometry;
pub mod timer;
pub mod widget;

pub use color::Color;
pub use geometry::Rect;
pub use timer::{TimerHandle, TimerQueue};
pub use widget::{CatalogError, WidgetCatalog, WidgetId};
