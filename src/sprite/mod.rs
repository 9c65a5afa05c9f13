//! Sprite assembly: per-state choreography that turns `(state, phase)` into stamps.
//!
//! Every style is a table of [`Animation`]s plus pure composition functions. The file prefix
//! of each animation is part of that table, so a state never has to guess its file name.

mod line_art;
mod pixel;

use std::fmt;
use std::str::FromStr;

use crate::foundation::core::GridSpec;
use crate::foundation::error::FramesError;
use crate::scene::frame::FrameSpec;

/// Cat condition reported by the menu-bar app.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AnimationState {
    Idle,
    Starting,
    Thinking,
    Working,
    Error,
    Complete,
    Ending,
    Compacting,
    /// Waiting for user input. Only the line-art style draws it.
    Waiting,
}

impl AnimationState {
    pub const ALL: [AnimationState; 9] = [
        AnimationState::Idle,
        AnimationState::Starting,
        AnimationState::Thinking,
        AnimationState::Working,
        AnimationState::Error,
        AnimationState::Complete,
        AnimationState::Ending,
        AnimationState::Compacting,
        AnimationState::Waiting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AnimationState::Idle => "idle",
            AnimationState::Starting => "starting",
            AnimationState::Thinking => "thinking",
            AnimationState::Working => "working",
            AnimationState::Error => "error",
            AnimationState::Complete => "complete",
            AnimationState::Ending => "ending",
            AnimationState::Compacting => "compacting",
            AnimationState::Waiting => "waiting",
        }
    }
}

impl fmt::Display for AnimationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnimationState {
    type Err = FramesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnimationState::ALL
            .into_iter()
            .find(|st| st.as_str() == s)
            .ok_or_else(|| FramesError::validation(format!("unknown animation state '{s}'")))
    }
}

/// One animation loop of a style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Animation {
    pub state: AnimationState,
    /// File prefix, e.g. `running` for [`AnimationState::Working`].
    pub name: &'static str,
    /// Number of phases, indexed from 0.
    pub phases: u8,
    /// Playback interval per frame in the app.
    pub interval_ms: u32,
}

impl Animation {
    /// `{name}-{phase}.png`
    pub fn file_name(&self, phase: u8) -> String {
        format!("{}-{}.png", self.name, phase)
    }
}

/// Drawing style. Each style owns its grid, animation table and choreography.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    /// Filled cell silhouettes on an 18x18 grid (36x36 px).
    #[default]
    Pixel,
    /// Outline strokes on a 22x22 grid (44x44 px).
    LineArt,
}

impl Style {
    pub const ALL: [Style; 2] = [Style::Pixel, Style::LineArt];

    pub fn as_str(self) -> &'static str {
        match self {
            Style::Pixel => "pixel",
            Style::LineArt => "line-art",
        }
    }

    pub fn grid(self) -> GridSpec {
        match self {
            Style::Pixel => pixel::GRID,
            Style::LineArt => line_art::GRID,
        }
    }

    pub fn animations(self) -> &'static [Animation] {
        match self {
            Style::Pixel => pixel::ANIMATIONS,
            Style::LineArt => line_art::ANIMATIONS,
        }
    }

    pub fn animation(self, state: AnimationState) -> Option<&'static Animation> {
        self.animations().iter().find(|a| a.state == state)
    }

    /// Every `(animation, phase)` pair in generation order.
    pub fn frames(self) -> impl Iterator<Item = (&'static Animation, u8)> {
        self.animations()
            .iter()
            .flat_map(|a| (0..a.phases).map(move |p| (a, p)))
    }

    pub fn frame_count(self) -> usize {
        self.animations().iter().map(|a| usize::from(a.phases)).sum()
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Style {
    type Err = FramesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pixel" => Ok(Style::Pixel),
            "line-art" | "lineart" | "line_art" => Ok(Style::LineArt),
            _ => Err(FramesError::validation(format!("unknown style '{s}'"))),
        }
    }
}

/// Stamps for one frame.
///
/// # Panics
///
/// When `style` does not animate `state`, or `phase` is outside the animation. Both are
/// caller bugs: the orchestrator only asks for pairs from [`Style::frames`].
pub fn compute_frame(style: Style, state: AnimationState, phase: u8) -> FrameSpec {
    let Some(anim) = style.animation(state) else {
        panic!("{style} style has no '{state}' animation");
    };
    assert!(
        phase < anim.phases,
        "phase {phase} out of range for '{}' ({} phases)",
        anim.name,
        anim.phases
    );
    match style {
        Style::Pixel => pixel::compose(state, phase),
        Style::LineArt => line_art::compose(state, phase),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/sprite/mod.rs"]
mod tests;
