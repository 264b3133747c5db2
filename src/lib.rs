//! Geometric Brownian Motion price-path simulation and chart rendering.
//!
//! Two halves, simulation feeding rendering:
//!
//! * [`simulation`] generates independent discrete-time GBM price paths from
//!   scalar parameters, via Box-Muller normal sampling over an injectable
//!   uniform source.
//! * [`chart`] maps a set of equal-length paths onto a fixed 2D surface with
//!   a shared auto-scaled vertical axis, labeled gridlines and one overlaid
//!   polyline per path. The renderer is polymorphic over any backend that
//!   implements [`chart::surface::DrawSurface`]; an SVG backend ships with
//!   the crate.

pub mod chart;
pub mod prelude;
pub mod simulation;
pub mod utils;
