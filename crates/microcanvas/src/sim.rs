//! In-process stand-ins for the external display/IO framework.
//!
//! The real system renders through a canvas engine and samples GPIO
//! lines; these simulations record the same interactions in memory so
//! demos and host-side tests can drive the menu without hardware.

use std::collections::{HashMap, VecDeque};

use microcanvas_menu::{ButtonId, ButtonLevel, ButtonSource, Canvas, CanvasHandle, Pacer};

/// A canvas that records widget positions and text.
#[derive(Debug, Default)]
pub struct SimCanvas {
    next_id: u64,
    positions: HashMap<CanvasHandle, (i32, i32)>,
    texts: HashMap<CanvasHandle, String>,
}

impl SimCanvas {
    /// Creates an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a widget's position, if it exists.
    #[must_use]
    pub fn position(&self, handle: CanvasHandle) -> Option<(i32, i32)> {
        self.positions.get(&handle).copied()
    }

    /// Returns a widget's text, if it exists.
    #[must_use]
    pub fn text(&self, handle: CanvasHandle) -> Option<&str> {
        self.texts.get(&handle).map(String::as_str)
    }

    /// Returns the number of live widgets.
    #[must_use]
    pub fn widget_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterates over all live widgets and their positions.
    pub fn widgets(&self) -> impl Iterator<Item = (CanvasHandle, (i32, i32))> + '_ {
        self.positions.iter().map(|(h, p)| (*h, *p))
    }
}

impl Canvas for SimCanvas {
    fn create_textbox(&mut self, text: &str, x: i32, y: i32) -> CanvasHandle {
        self.next_id += 1;
        let handle = CanvasHandle::new(self.next_id);
        self.positions.insert(handle, (x, y));
        self.texts.insert(handle, text.to_owned());
        tracing::trace!(id = handle.raw(), x, y, text, "textbox created");
        handle
    }

    fn set_text(&mut self, handle: CanvasHandle, text: &str) {
        if let Some(entry) = self.texts.get_mut(&handle) {
            text.clone_into(entry);
        }
    }

    fn shift_y(&mut self, handle: CanvasHandle, dy: i32) {
        if let Some(pos) = self.positions.get_mut(&handle) {
            pos.1 += dy;
        }
    }

    fn destroy(&mut self, handle: CanvasHandle) {
        self.positions.remove(&handle);
        self.texts.remove(&handle);
    }
}

/// Replays a prerecorded level script per button.
///
/// Each poll consumes one scripted level; an exhausted script reads as
/// released, so a finished scenario leaves the menu idle.
#[derive(Debug, Default)]
pub struct ScriptedButtons {
    scripts: HashMap<ButtonId, VecDeque<ButtonLevel>>,
}

impl ScriptedButtons {
    /// Creates a source with no scripts.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends levels to a button's script.
    pub fn extend_script(&mut self, id: ButtonId, levels: impl IntoIterator<Item = ButtonLevel>) {
        self.scripts.entry(id).or_default().extend(levels);
    }

    /// Appends one press-and-release to a button's script.
    pub fn push_press(&mut self, id: ButtonId) {
        self.extend_script(id, [ButtonLevel::Pressed, ButtonLevel::Released]);
    }

    /// Appends `polls` released samples to a button's script.
    ///
    /// Scripts are consumed one sample per poll, so idle padding is how
    /// a scenario sequences presses on different buttons.
    pub fn push_idle(&mut self, id: ButtonId, polls: usize) {
        self.extend_script(id, std::iter::repeat(ButtonLevel::Released).take(polls));
    }

    /// True when every script has been consumed.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.scripts.values().all(VecDeque::is_empty)
    }
}

impl ButtonSource for ScriptedButtons {
    fn level(&mut self, id: ButtonId) -> ButtonLevel {
        self.scripts
            .get_mut(&id)
            .and_then(VecDeque::pop_front)
            .unwrap_or_default()
    }
}

/// A pacer that counts ticks instead of sleeping.
#[derive(Debug, Default)]
pub struct TickPacer {
    elapsed: u64,
}

impl TickPacer {
    /// Creates a pacer at tick zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Total ticks delayed so far.
    #[must_use]
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}

impl Pacer for TickPacer {
    fn delay(&mut self, ticks: u32) {
        self.elapsed += u64::from(ticks);
    }
}
