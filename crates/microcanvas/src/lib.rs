//! # MicroCanvas
//!
//! A small on-device UI and physics toy-layer: a scrolling selection
//! menu driven by physical buttons, and a fixed-length vector utility
//! powering a bouncing-ball demo.
//!
//! The rendering engine, GPIO driver and task scheduler are an external
//! framework consumed behind traits; the [`sim`] module provides
//! in-process stand-ins so the demos run hosted, without hardware.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod ball;
pub mod sim;

pub use ball::Ball;
pub use microcanvas_math::{Vector, VectorError, VectorResult};
pub use microcanvas_menu::{
    ButtonId, ButtonLevel, ButtonSource, Canvas, CanvasHandle, EdgeDetector, Menu, MenuConfig,
    MenuError, MenuResult, MenuTask, Pacer, Scheduler,
};
