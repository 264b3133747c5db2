pub mod color;
pub mod renderer;
pub mod scale;
pub mod session;
pub mod surface;
pub mod svg;
