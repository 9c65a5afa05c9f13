/// Canvas storage and layer composition.
pub mod canvas;
/// Straight-alpha source-over and coverage blending.
pub mod composite;
/// `vello_cpu` primitive rasterizer.
pub mod cpu;
