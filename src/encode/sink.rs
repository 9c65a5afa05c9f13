use std::path::{Path, PathBuf};

use crate::foundation::error::{FramesError, FramesResult};
use crate::sprite::Style;

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SinkConfig {
    /// Style being generated.
    pub style: Style,
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Number of frames that will be pushed.
    pub frames: usize,
}

/// Sink contract for consuming encoded frames.
///
/// Ordering contract: `begin` runs to completion before the first `push_frame`, and frames
/// arrive in generation order (animation table order, then phase).
pub trait FrameSink: Send {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> FramesResult<()>;
    /// Push one PNG-encoded frame under its file name, e.g. `running-3.png`.
    fn push_frame(&mut self, file_name: &str, png: &[u8]) -> FramesResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> FramesResult<()>;
}

/// Writes frames as files into one directory.
///
/// `begin` creates the directory and deletes every `*.png` already in it, so frames from an
/// earlier run or another style never linger.
#[derive(Debug)]
pub struct PngDirSink {
    dir: PathBuf,
    cfg: Option<SinkConfig>,
    removed: usize,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cfg: None,
            removed: 0,
            written: Vec::new(),
        }
    }

    /// Stale PNGs deleted by `begin`.
    pub fn removed(&self) -> usize {
        self.removed
    }

    /// Paths written so far, in push order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    pub fn into_written(self) -> Vec<PathBuf> {
        self.written
    }
}

impl FrameSink for PngDirSink {
    fn begin(&mut self, cfg: SinkConfig) -> FramesResult<()> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            FramesError::io(format!(
                "failed to create frames directory '{}': {e}",
                self.dir.display()
            ))
        })?;
        self.removed = remove_pngs(&self.dir)?;
        if self.removed > 0 {
            tracing::info!(dir = %self.dir.display(), removed = self.removed, "removed old frames");
        }
        self.written.clear();
        self.written.reserve(cfg.frames);
        self.cfg = Some(cfg);
        Ok(())
    }

    fn push_frame(&mut self, file_name: &str, png: &[u8]) -> FramesResult<()> {
        if self.cfg.is_none() {
            return Err(FramesError::validation(
                "png sink received a frame before begin",
            ));
        }
        let path = self.dir.join(file_name);
        std::fs::write(&path, png)
            .map_err(|e| FramesError::io(format!("failed to write '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), bytes = png.len(), "wrote frame");
        self.written.push(path);
        Ok(())
    }

    fn end(&mut self) -> FramesResult<()> {
        if let Some(cfg) = self.cfg
            && self.written.len() != cfg.frames
        {
            return Err(FramesError::validation(format!(
                "png sink expected {} frames, got {}",
                cfg.frames,
                self.written.len()
            )));
        }
        Ok(())
    }
}

/// Delete regular files ending in `.png` directly inside `dir`. Subdirectories are left alone.
fn remove_pngs(dir: &Path) -> FramesResult<usize> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| FramesError::io(format!("failed to list '{}': {e}", dir.display())))?;
    let mut removed = 0;
    for entry in entries {
        let entry =
            entry.map_err(|e| FramesError::io(format!("failed to list '{}': {e}", dir.display())))?;
        let path = entry.path();
        let is_png = path.extension().is_some_and(|ext| ext == "png");
        if !is_png || !path.is_file() {
            continue;
        }
        std::fs::remove_file(&path)
            .map_err(|e| FramesError::io(format!("failed to remove '{}': {e}", path.display())))?;
        removed += 1;
    }
    Ok(removed)
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    pub(crate) frames: Vec<(String, Vec<u8>)>,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// `(file name, png bytes)` in push order.
    pub fn frames(&self) -> &[(String, Vec<u8>)] {
        &self.frames
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> FramesResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        Ok(())
    }

    fn push_frame(&mut self, file_name: &str, png: &[u8]) -> FramesResult<()> {
        self.frames.push((file_name.to_owned(), png.to_vec()));
        Ok(())
    }

    fn end(&mut self) -> FramesResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
