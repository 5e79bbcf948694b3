pub mod config;
pub mod error;
pub mod geometry;
pub mod round;
pub mod scorer;
pub mod synth;
pub mod tiers;
// cmd and reports are binary modules (declared in main.rs); the library
// surface is the pure core plus loaders and generators.
