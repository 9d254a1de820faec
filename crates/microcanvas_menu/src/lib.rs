//! # MicroCanvas Menu
//!
//! A scrolling selection menu driven by physical buttons.
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                       POLL STEP                            │
//! ├───────────────────────────────────────────────────────────┤
//! │  Button Levels → Edge Detect → Cursor Update → Animation  │
//! │       ↓              ↓              ↓             ↓       │
//! │  ButtonSource   State Machine   Wrap Logic    Canvas +    │
//! │                                               Pacer       │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! The external framework is consumed behind four traits: [`Canvas`]
//! (widget factory and text mutator), [`ButtonSource`] (debounced level
//! sampling), [`Pacer`] (bounded delays for debounce and animation
//! pacing), and [`Scheduler`] (repeating-task registration).
//!
//! ## Design Philosophy
//!
//! Scrolling is not a separate visual-effects system. The menu mutates
//! each item widget's position one pixel at a time, pacing itself with
//! short delays — the menu *is* the animator. The wrap case deliberately
//! plays the full multi-item rewind so the list reads as circular.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod button;
pub mod canvas;
pub mod config;
pub mod error;
pub mod menu;
pub mod pacer;
pub mod task;

pub use button::{ButtonId, ButtonLevel, ButtonSource, EdgeDetector};
pub use canvas::{Canvas, CanvasHandle};
pub use config::MenuConfig;
pub use error::{MenuError, MenuResult};
pub use menu::Menu;
pub use pacer::Pacer;
pub use task::{MenuTask, Scheduler};
