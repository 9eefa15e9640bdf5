pub mod colors;
pub mod config;
pub mod constants;
pub mod error;
pub mod mandelbrot;
pub mod pixel;
pub mod progress;
pub mod render;
pub mod scale;
