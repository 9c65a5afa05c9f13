//! Procedural sprite frames for the MeowBar menu-bar cat.
//!
//! A frame is built in three feed-forward steps:
//!
//! - [`compute_frame`] turns an animation state and phase into a [`FrameSpec`] of stamps
//!   authored on a small logical grid
//! - [`CpuRasterizer`] paints those stamps onto a [`Canvas`] at integer scale
//! - [`generate`] encodes every frame as PNG into a frames directory through a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

/// PNG encoding and frame sinks.
pub mod encode;
/// Frame generation entry points.
pub mod pipeline;
/// Canvas, compositing and rasterization.
pub mod render;
/// Stamps and frames in logical grid units.
pub mod scene;
/// Per-style animation tables and choreography.
pub mod sprite;

pub use crate::foundation::core::{Color, GridSpec, Point, Rect, Vec2};
pub use crate::foundation::error::{FramesError, FramesResult};

pub use crate::encode::png::{decode_png, encode_png};
pub use crate::encode::sink::{FrameSink, InMemorySink, PngDirSink, SinkConfig};
pub use crate::pipeline::{
    EncodedFrame, GenerateOpts, GenerateReport, Manifest, ManifestAnimation, env_out_dir,
    env_style, generate, home_frames_dir, render_frames, render_into, render_single,
};
pub use crate::render::canvas::{Canvas, compose};
pub use crate::render::cpu::CpuRasterizer;
pub use crate::scene::frame::FrameSpec;
pub use crate::scene::primitive::{CellRect, Paint, Part, Primitive, Stamp};
pub use crate::sprite::{Animation, AnimationState, Style, compute_frame};
