//! Frame encoding.
//!
//! Rendered canvases leave the crate as PNG bytes, either collected in memory or written into
//! a frames directory through a [`sink::FrameSink`].

/// PNG encode/decode through the `image` crate.
pub mod png;
/// Frame sink trait and built-in sinks.
pub mod sink;
