use crate::scene::primitive::{Part, Stamp};

/// Everything needed to draw one sprite frame.
///
/// The base layer holds the cat itself. The overlay layer holds marks that float over the
/// cat (Zzz, thought dots, sparkles) and is rasterized separately, then composed on top.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct FrameSpec {
    pub base: Vec<Stamp>,
    pub overlay: Vec<Stamp>,
}

impl FrameSpec {
    /// All stamps in paint order: base first, then overlay.
    pub fn stamps(&self) -> impl Iterator<Item = &Stamp> {
        self.base.iter().chain(self.overlay.iter())
    }

    /// Stamps that draw `part`, in paint order.
    pub fn part(&self, part: Part) -> impl Iterator<Item = &Stamp> {
        self.stamps().filter(move |s| s.part == part)
    }

    pub fn has_part(&self, part: Part) -> bool {
        self.part(part).next().is_some()
    }

    pub fn len(&self) -> usize {
        self.base.len() + self.overlay.len()
    }

    pub fn is_empty(&self) -> bool {
        self.base.is_empty() && self.overlay.is_empty()
    }
}
