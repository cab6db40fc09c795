pub mod helpers;
pub mod renderer;
