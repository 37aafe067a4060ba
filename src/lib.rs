//! Scene-to-source compiler.
//!
//! Turns a declarative 2-D scene (named, positioned objects with optional
//! behavior scripts) into a standalone Phaser/React module.

pub mod compiler;
pub mod config;
pub mod output;
pub mod preview;
pub mod scene;
pub mod types;
