pub mod avatar;
pub mod render;
mod styles;
