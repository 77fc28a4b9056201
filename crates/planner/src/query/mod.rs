pub mod dialect;
pub mod renderer;
