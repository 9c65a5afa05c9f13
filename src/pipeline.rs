//! Frame generation: enumerate a style's animations, rasterize every phase, encode, and hand
//! the PNGs to a sink in order.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::encode::png::encode_png;
use crate::encode::sink::{FrameSink, PngDirSink, SinkConfig};
use crate::foundation::error::{FramesError, FramesResult};
use crate::render::canvas::Canvas;
use crate::render::cpu::CpuRasterizer;
use crate::sprite::{Animation, AnimationState, Style, compute_frame};

/// Frames directory inside the MeowBar app bundle sources, relative to the repo root.
pub const DEFAULT_FRAMES_DIR: &str = "app/MeowBar/Resources/Frames";
/// Fallback directory the app searches under `$HOME`.
pub const HOME_FRAMES_DIR: &str = ".meow-bar/frames";
pub const MANIFEST_FILE: &str = "frames.json";

pub const ENV_FRAMES_DIR: &str = "MEOWBAR_FRAMES_DIR";
pub const ENV_FRAME_STYLE: &str = "MEOWBAR_FRAME_STYLE";

/// Options for [`generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOpts {
    /// Output directory; every `*.png` in it is replaced.
    pub out_dir: PathBuf,
    pub style: Style,
    /// Render frames on a rayon pool. Output is identical either way.
    pub parallel: bool,
    /// Worker threads when `parallel` is set. `None` uses rayon defaults.
    pub threads: Option<usize>,
    /// Write `frames.json` next to the PNGs.
    pub manifest: bool,
}

impl Default for GenerateOpts {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_FRAMES_DIR),
            style: Style::default(),
            parallel: true,
            threads: None,
            manifest: true,
        }
    }
}

impl GenerateOpts {
    /// Defaults overridden by `MEOWBAR_FRAMES_DIR` and `MEOWBAR_FRAME_STYLE` when set.
    pub fn from_env() -> FramesResult<Self> {
        let mut opts = Self::default();
        if let Some(dir) = env_out_dir() {
            opts.out_dir = dir;
        }
        if let Some(style) = env_style()? {
            opts.style = style;
        }
        Ok(opts)
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: Option<usize>) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_manifest(mut self, manifest: bool) -> Self {
        self.manifest = manifest;
        self
    }
}

/// `MEOWBAR_FRAMES_DIR`, ignored when empty.
pub fn env_out_dir() -> Option<PathBuf> {
    std::env::var_os(ENV_FRAMES_DIR)
        .filter(|d| !d.is_empty())
        .map(PathBuf::from)
}

/// `MEOWBAR_FRAME_STYLE`, ignored when empty. An unknown name is an error.
pub fn env_style() -> FramesResult<Option<Style>> {
    match std::env::var(ENV_FRAME_STYLE) {
        Ok(style) if !style.is_empty() => style.parse().map(Some),
        _ => Ok(None),
    }
}

/// `$HOME/.meow-bar/frames`.
pub fn home_frames_dir() -> FramesResult<PathBuf> {
    let home = std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .ok_or_else(|| FramesError::validation("HOME is not set"))?;
    Ok(PathBuf::from(home).join(HOME_FRAMES_DIR))
}

/// One encoded frame ready for a sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedFrame {
    pub state: AnimationState,
    pub phase: u8,
    /// `{animation-name}-{phase}.png`
    pub file_name: String,
    pub png: Vec<u8>,
}

/// Outcome of a [`generate`] run.
#[derive(Clone, Debug)]
pub struct GenerateReport {
    pub style: Style,
    pub out_dir: PathBuf,
    /// Written PNG paths in generation order.
    pub files: Vec<PathBuf>,
    /// Stale PNGs deleted before writing.
    pub removed: usize,
    pub manifest: Option<PathBuf>,
}

/// Regenerate every frame of `opts.style` into `opts.out_dir`.
#[tracing::instrument(skip(opts), fields(style = %opts.style, out_dir = %opts.out_dir.display()))]
pub fn generate(opts: &GenerateOpts) -> FramesResult<GenerateReport> {
    let mut sink = PngDirSink::new(&opts.out_dir);
    render_into(opts, &mut sink)?;

    let manifest = if opts.manifest {
        Some(write_manifest(&opts.out_dir, opts.style)?)
    } else {
        None
    };

    let removed = sink.removed();
    let files = sink.into_written();
    tracing::info!(
        frames = files.len(),
        removed,
        "generated {} frames",
        opts.style
    );
    Ok(GenerateReport {
        style: opts.style,
        out_dir: opts.out_dir.clone(),
        files,
        removed,
        manifest,
    })
}

/// Render and encode every frame, then stream them into `sink`.
///
/// Rendering happens before `sink.begin`, so a failed render never leaves a half-cleaned
/// directory behind.
pub fn render_into(opts: &GenerateOpts, sink: &mut dyn FrameSink) -> FramesResult<usize> {
    let frames = render_frames(opts.style, opts.parallel, opts.threads)?;
    let px = opts.style.grid().pixel_size();
    sink.begin(SinkConfig {
        style: opts.style,
        width: px,
        height: px,
        frames: frames.len(),
    })?;
    for f in &frames {
        sink.push_frame(&f.file_name, &f.png)?;
    }
    sink.end()?;
    Ok(frames.len())
}

/// Every frame of `style`, encoded, in generation order.
pub fn render_frames(
    style: Style,
    parallel: bool,
    threads: Option<usize>,
) -> FramesResult<Vec<EncodedFrame>> {
    let jobs: Vec<(&'static Animation, u8)> = style.frames().collect();
    let grid = style.grid();

    if !parallel {
        let mut rasterizer = CpuRasterizer::new(grid)?;
        return jobs
            .iter()
            .map(|&(anim, phase)| encode_one(&mut rasterizer, style, anim, phase))
            .collect();
    }

    let pool = build_thread_pool(threads)?;
    let rendered = pool.install(|| {
        jobs.par_iter()
            .map_init(
                || CpuRasterizer::new(grid),
                |worker, &(anim, phase)| -> FramesResult<EncodedFrame> {
                    let rasterizer = worker.as_mut().map_err(|e| {
                        FramesError::validation(format!("rasterizer init failed: {e}"))
                    })?;
                    encode_one(rasterizer, style, anim, phase)
                },
            )
            .collect::<Vec<_>>()
    });
    rendered.into_iter().collect()
}

fn encode_one(
    rasterizer: &mut CpuRasterizer,
    style: Style,
    anim: &Animation,
    phase: u8,
) -> FramesResult<EncodedFrame> {
    let canvas = rasterizer.render_frame(&compute_frame(style, anim.state, phase))?;
    Ok(EncodedFrame {
        state: anim.state,
        phase,
        file_name: anim.file_name(phase),
        png: encode_png(&canvas)?,
    })
}

/// Render one frame, checking `state` and `phase` against the style instead of panicking.
pub fn render_single(style: Style, state: AnimationState, phase: u8) -> FramesResult<Canvas> {
    let anim = style.animation(state).ok_or_else(|| {
        FramesError::validation(format!("{style} style has no '{state}' animation"))
    })?;
    if phase >= anim.phases {
        return Err(FramesError::validation(format!(
            "phase {phase} out of range for '{}' ({} phases)",
            anim.name, anim.phases
        )));
    }
    CpuRasterizer::new(style.grid())?.render_frame(&compute_frame(style, state, phase))
}

fn build_thread_pool(threads: Option<usize>) -> FramesResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(FramesError::validation("threads must be >= 1 when set"));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| FramesError::io(format!("failed to build rayon thread pool: {e}")))
}

/// `frames.json`: what the app needs to play the animations back.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Manifest {
    pub style: Style,
    /// Frame width and height in pixels.
    pub size: u32,
    pub animations: Vec<ManifestAnimation>,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ManifestAnimation {
    pub state: AnimationState,
    pub name: String,
    pub frames: u8,
    pub interval_ms: u32,
    pub files: Vec<String>,
}

impl Manifest {
    pub fn for_style(style: Style) -> Self {
        Self {
            style,
            size: style.grid().pixel_size(),
            animations: style
                .animations()
                .iter()
                .map(|a| ManifestAnimation {
                    state: a.state,
                    name: a.name.to_owned(),
                    frames: a.phases,
                    interval_ms: a.interval_ms,
                    files: (0..a.phases).map(|p| a.file_name(p)).collect(),
                })
                .collect(),
        }
    }
}

fn write_manifest(dir: &Path, style: Style) -> FramesResult<PathBuf> {
    let mut json = serde_json::to_string_pretty(&Manifest::for_style(style))
        .map_err(|e| FramesError::encode(format!("manifest encode failed: {e}")))?;
    json.push('\n');
    let path = dir.join(MANIFEST_FILE);
    std::fs::write(&path, json)
        .map_err(|e| FramesError::io(format!("failed to write '{}': {e}", path.display())))?;
    tracing::debug!(path = %path.display(), "wrote manifest");
    Ok(path)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
