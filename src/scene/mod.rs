/// Per-frame stamp lists.
pub mod frame;
/// Drawing primitives in logical grid units.
pub mod primitive;
