//! The menu navigation state machine.
//!
//! One poll step samples the three bound buttons, updates the cursor,
//! and plays any scroll animation inline: `span_y` unit steps of one
//! pixel, each followed by a short delay. The wrap case plays the full
//! `(active - 1) * span_y` rewind instead of jumping, so the list reads
//! as circular. That asymmetry is deliberate.

use crate::button::{ButtonId, ButtonSource, EdgeDetector};
use crate::canvas::{Canvas, CanvasHandle};
use crate::config::MenuConfig;
use crate::error::{MenuError, MenuResult};
use crate::pacer::Pacer;

/// Delay ticks after each unit step of a single-item scroll.
const STEP_DELAY: u32 = 2;
/// Delay ticks after a completed single-item scroll, before the index
/// display updates.
const SETTLE_DELAY: u32 = 10;
/// Delay ticks after each unit step of a wrap rewind.
const REWIND_STEP_DELAY: u32 = 1;
/// Delay ticks at the end of every poll step.
const POLL_DELAY: u32 = 1;

/// A button-driven scrolling selection menu.
///
/// Holds non-owning handles to item widgets created on an external
/// canvas, a cursor index that is always within `[0, active)`, and the
/// three bound input sources. Wrap-around is the only way past either
/// boundary.
pub struct Menu {
    /// Item widget handles; length is the allocated capacity.
    items: Vec<CanvasHandle>,
    /// Number of currently selectable items, `<= items.len()`.
    active: usize,
    /// Cursor index, always `< active` (when `active > 0`).
    cursor: usize,
    config: MenuConfig,
    up: ButtonId,
    down: ButtonId,
    select: ButtonId,
    up_edge: EdgeDetector,
    down_edge: EdgeDetector,
    select_edge: EdgeDetector,
    index_display: Option<CanvasHandle>,
    on_select: Option<Box<dyn FnMut()>>,
}

impl Menu {
    /// Creates a menu with `active` item widgets laid out vertically.
    ///
    /// Item `i` is a textbox labelled `item {i}` at
    /// `(origin_x + text_offset_x, origin_y + i * span_y)`. When the
    /// config enables it, an auxiliary `--` textbox at `(0, 0)` shows
    /// the numeric cursor index.
    ///
    /// Inputs default to sources 0 (up), 1 (down) and 2 (select); see
    /// [`Menu::bind_inputs`].
    pub fn create(canvas: &mut impl Canvas, config: MenuConfig, active: usize) -> Self {
        let items = (0..active)
            .map(|i| {
                let x = config.item_x();
                let y = config.item_y(i);
                tracing::debug!(item = i, x, y, "menu item created");
                canvas.create_textbox(&format!("item {i}"), x, y)
            })
            .collect();

        let index_display = config
            .show_index
            .then(|| canvas.create_textbox("--", 0, 0));

        Self {
            items,
            active,
            cursor: 0,
            config,
            up: ButtonId(0),
            down: ButtonId(1),
            select: ButtonId(2),
            up_edge: EdgeDetector::new(),
            down_edge: EdgeDetector::new(),
            select_edge: EdgeDetector::new(),
            index_display,
            on_select: None,
        }
    }

    /// Returns the current cursor index.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.cursor
    }

    /// Returns the number of currently active items.
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Returns the allocated widget capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.len()
    }

    /// Returns the layout configuration.
    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    /// Rebinds the up/down/select input sources.
    ///
    /// Edge state is discarded: a button held across a rebind reads as a
    /// fresh press.
    pub fn bind_inputs(&mut self, up: ButtonId, down: ButtonId, select: ButtonId) {
        self.up = up;
        self.down = down;
        self.select = select;
        self.up_edge.reset();
        self.down_edge.reset();
        self.select_edge.reset();
    }

    /// Registers the selection callback, replacing any previous one.
    pub fn on_select(&mut self, callback: impl FnMut() + 'static) {
        self.on_select = Some(Box::new(callback));
    }

    /// Changes the active item count without reconstructing widgets.
    ///
    /// The cursor is re-clamped into the new range.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::CapacityExceeded`] when `n` is zero or
    /// exceeds the widgets allocated at construction.
    pub fn set_active_count(&mut self, n: usize) -> MenuResult<()> {
        if n == 0 || n > self.items.len() {
            return Err(MenuError::CapacityExceeded {
                capacity: self.items.len(),
                requested: n,
            });
        }
        self.active = n;
        self.cursor = self.cursor.min(n - 1);
        Ok(())
    }

    /// Enables or disables the cursor-index display widget.
    ///
    /// The widget is created lazily on first enable and destroyed on
    /// disable.
    pub fn enable_index_display(&mut self, canvas: &mut impl Canvas, enabled: bool) {
        if enabled {
            if self.index_display.is_none() {
                self.index_display = Some(canvas.create_textbox("--", 0, 0));
            }
        } else if let Some(handle) = self.index_display.take() {
            canvas.destroy(handle);
        }
    }

    /// Sets the displayed text of item `index`.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::ItemOutOfRange`] beyond the active range.
    pub fn set_item_text(
        &mut self,
        canvas: &mut impl Canvas,
        index: usize,
        text: &str,
    ) -> MenuResult<()> {
        if index >= self.active {
            return Err(MenuError::ItemOutOfRange {
                index,
                active: self.active,
            });
        }
        canvas.set_text(self.items[index], text);
        Ok(())
    }

    /// Destroys every widget this menu created.
    ///
    /// The menu is inert afterwards: no items remain and polls do not
    /// touch the canvas.
    pub fn dismantle(&mut self, canvas: &mut impl Canvas) {
        for handle in self.items.drain(..) {
            canvas.destroy(handle);
        }
        if let Some(handle) = self.index_display.take() {
            canvas.destroy(handle);
        }
        self.active = 0;
        self.cursor = 0;
    }

    /// Runs one poll step.
    ///
    /// Samples all three inputs, processes at most one of up/down (up
    /// shadows down within a single step), plays any scroll animation to
    /// completion, then handles select. Select therefore never fires
    /// mid-animation; the branches are serialized within the step.
    pub fn poll(
        &mut self,
        canvas: &mut impl Canvas,
        buttons: &mut impl ButtonSource,
        pacer: &mut impl Pacer,
    ) {
        let up_pressed = self.up_edge.update(buttons.level(self.up));
        let down_pressed = self.down_edge.update(buttons.level(self.down));
        let select_pressed = self.select_edge.update(buttons.level(self.select));

        if self.active > 0 {
            let last = self.active - 1;
            if up_pressed {
                if self.cursor < last {
                    self.cursor += 1;
                    self.scroll_items(canvas, pacer, -1, STEP_DELAY);
                    pacer.delay(SETTLE_DELAY);
                    self.refresh_index_display(canvas);
                } else {
                    self.cursor = 0;
                    self.refresh_index_display(canvas);
                    self.rewind_items(canvas, pacer, 1);
                }
            } else if down_pressed {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.scroll_items(canvas, pacer, 1, STEP_DELAY);
                    pacer.delay(SETTLE_DELAY);
                    self.refresh_index_display(canvas);
                } else {
                    self.cursor = last;
                    self.refresh_index_display(canvas);
                    self.rewind_items(canvas, pacer, -1);
                }
            }
        }

        if select_pressed {
            if let Some(callback) = &mut self.on_select {
                tracing::debug!(cursor = self.cursor, "selection confirmed");
                callback();
            }
        }

        pacer.delay(POLL_DELAY);
    }

    /// One item's worth of scroll: `span_y` unit steps of `dy` pixels
    /// applied to every active item, each step paced by `step_delay`.
    fn scroll_items(
        &mut self,
        canvas: &mut impl Canvas,
        pacer: &mut impl Pacer,
        dy: i32,
        step_delay: u32,
    ) {
        for _ in 0..self.config.span_y {
            for handle in &self.items[..self.active] {
                canvas.shift_y(*handle, dy);
            }
            pacer.delay(step_delay);
        }
    }

    /// The wrap rewind: `(active - 1)` full item scrolls returning the
    /// visible window to the other end of the list.
    fn rewind_items(&mut self, canvas: &mut impl Canvas, pacer: &mut impl Pacer, dy: i32) {
        for _ in 0..self.active.saturating_sub(1) {
            self.scroll_items(canvas, pacer, dy, REWIND_STEP_DELAY);
        }
    }

    /// Pushes the cursor index to the auxiliary display, if enabled.
    fn refresh_index_display(&mut self, canvas: &mut impl Canvas) {
        tracing::debug!(cursor = self.cursor, "selector moved");
        if let Some(handle) = self.index_display {
            canvas.set_text(handle, &self.cursor.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ButtonLevel;
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::rc::Rc;

    /// Records widget positions and text, standing in for the canvas.
    #[derive(Default)]
    struct MockCanvas {
        next_id: u64,
        positions: HashMap<CanvasHandle, (i32, i32)>,
        texts: HashMap<CanvasHandle, String>,
        destroyed: Vec<CanvasHandle>,
    }

    impl Canvas for MockCanvas {
        fn create_textbox(&mut self, text: &str, x: i32, y: i32) -> CanvasHandle {
            self.next_id += 1;
            let handle = CanvasHandle::new(self.next_id);
            self.positions.insert(handle, (x, y));
            self.texts.insert(handle, text.to_owned());
            handle
        }

        fn set_text(&mut self, handle: CanvasHandle, text: &str) {
            self.texts.insert(handle, text.to_owned());
        }

        fn shift_y(&mut self, handle: CanvasHandle, dy: i32) {
            if let Some(pos) = self.positions.get_mut(&handle) {
                pos.1 += dy;
            }
        }

        fn destroy(&mut self, handle: CanvasHandle) {
            self.positions.remove(&handle);
            self.texts.remove(&handle);
            self.destroyed.push(handle);
        }
    }

    /// Button levels the test sets directly between polls.
    #[derive(Default)]
    struct TestButtons {
        up: ButtonLevel,
        down: ButtonLevel,
        select: ButtonLevel,
    }

    impl ButtonSource for TestButtons {
        fn level(&mut self, id: ButtonId) -> ButtonLevel {
            match id.0 {
                0 => self.up,
                1 => self.down,
                _ => self.select,
            }
        }
    }

    /// Accumulates delay ticks instead of sleeping.
    #[derive(Default)]
    struct CountingPacer {
        ticks: u64,
    }

    impl Pacer for CountingPacer {
        fn delay(&mut self, ticks: u32) {
            self.ticks += u64::from(ticks);
        }
    }

    struct Rig {
        canvas: MockCanvas,
        buttons: TestButtons,
        pacer: CountingPacer,
        menu: Menu,
    }

    fn rig(active: usize, config: MenuConfig) -> Rig {
        let mut canvas = MockCanvas::default();
        let menu = Menu::create(&mut canvas, config, active);
        Rig {
            canvas,
            buttons: TestButtons::default(),
            pacer: CountingPacer::default(),
            menu,
        }
    }

    impl Rig {
        fn poll(&mut self) {
            self.menu
                .poll(&mut self.canvas, &mut self.buttons, &mut self.pacer);
        }

        /// One full press-and-release of a button across two polls.
        fn press(&mut self, set: fn(&mut TestButtons, ButtonLevel)) {
            set(&mut self.buttons, ButtonLevel::Pressed);
            self.poll();
            set(&mut self.buttons, ButtonLevel::Released);
            self.poll();
        }

        fn press_up(&mut self) {
            self.press(|b, l| b.up = l);
        }

        fn press_down(&mut self) {
            self.press(|b, l| b.down = l);
        }

        fn item_y(&self, index: usize) -> i32 {
            self.canvas.positions[&self.menu.items[index]].1
        }
    }

    #[test]
    fn test_construction_layout() {
        let config = MenuConfig {
            origin_x: 10,
            origin_y: 40,
            span_y: 20,
            text_offset_x: 5,
            show_index: false,
        };
        let r = rig(3, config);

        for i in 0..3 {
            let (x, y) = r.canvas.positions[&r.menu.items[i]];
            assert_eq!(x, 15);
            assert_eq!(y, 40 + i as i32 * 20);
            assert_eq!(r.canvas.texts[&r.menu.items[i]], format!("item {i}"));
        }
    }

    #[test]
    fn test_five_up_presses_wrap_through_all_indices() {
        let mut r = rig(5, MenuConfig::default());
        let span = r.menu.config.span_y;
        let base: Vec<i32> = (0..5).map(|i| r.item_y(i)).collect();

        let mut visited = Vec::new();
        for press in 0..5 {
            r.press_up();
            visited.push(r.menu.current_index());

            if press < 4 {
                // Non-wrap: every item has moved up `span` pixels per press
                for i in 0..5 {
                    assert_eq!(r.item_y(i), base[i] - span * (press as i32 + 1));
                }
            }
        }
        assert_eq!(visited, vec![1, 2, 3, 4, 0]);

        // The wrap rewound (5-1)*span downward, returning items to rest
        for i in 0..5 {
            assert_eq!(r.item_y(i), base[i]);
        }
    }

    #[test]
    fn test_up_presses_never_trigger_down_wrap() {
        let mut r = rig(5, MenuConfig::default());

        // Four up presses from 0 stay in ascending order, no wrap
        for expected in 1..5 {
            r.press_up();
            assert_eq!(r.menu.current_index(), expected);
        }
    }

    #[test]
    fn test_down_from_zero_wraps_to_last() {
        let mut r = rig(4, MenuConfig::default());
        let span = r.menu.config.span_y;
        let base = r.item_y(0);

        r.press_down();
        assert_eq!(r.menu.current_index(), 3);
        // Wrap rewind scrolled (4-1)*span upward
        assert_eq!(r.item_y(0), base - 3 * span);
    }

    #[test]
    fn test_down_steps_back_toward_zero() {
        let mut r = rig(3, MenuConfig::default());
        r.press_up();
        r.press_up();
        assert_eq!(r.menu.current_index(), 2);

        let span = r.menu.config.span_y;
        let before = r.item_y(0);
        r.press_down();
        assert_eq!(r.menu.current_index(), 1);
        assert_eq!(r.item_y(0), before + span);
    }

    #[test]
    fn test_up_shadows_down_within_one_poll() {
        let mut r = rig(3, MenuConfig::default());
        r.buttons.up = ButtonLevel::Pressed;
        r.buttons.down = ButtonLevel::Pressed;
        r.poll();

        // Only the up branch ran
        assert_eq!(r.menu.current_index(), 1);
    }

    #[test]
    fn test_held_button_does_not_repeat() {
        let mut r = rig(5, MenuConfig::default());
        r.buttons.up = ButtonLevel::Pressed;
        r.poll();
        r.poll();
        r.poll();
        assert_eq!(r.menu.current_index(), 1);
    }

    #[test]
    fn test_select_with_no_callback_is_noop() {
        let mut r = rig(3, MenuConfig::default());
        r.press(|b, l| b.select = l);
        assert_eq!(r.menu.current_index(), 0);
    }

    #[test]
    fn test_select_fires_once_per_edge() {
        let mut r = rig(3, MenuConfig::default());
        let fired = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&fired);
        r.menu.on_select(move || counter.set(counter.get() + 1));

        // Held across three polls: one fire
        r.buttons.select = ButtonLevel::Pressed;
        r.poll();
        r.poll();
        r.poll();
        assert_eq!(fired.get(), 1);

        // Release and press again: second fire
        r.buttons.select = ButtonLevel::Released;
        r.poll();
        r.buttons.select = ButtonLevel::Pressed;
        r.poll();
        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn test_index_display_tracks_cursor() {
        let config = MenuConfig {
            show_index: true,
            ..MenuConfig::default()
        };
        let mut r = rig(3, config);
        let display = r.menu.index_display.unwrap();
        assert_eq!(r.canvas.texts[&display], "--");

        r.press_up();
        assert_eq!(r.canvas.texts[&display], "1");
        r.press_down();
        assert_eq!(r.canvas.texts[&display], "0");
    }

    #[test]
    fn test_enable_index_display_lazily_creates_and_destroys() {
        let mut r = rig(2, MenuConfig::default());
        assert!(r.menu.index_display.is_none());

        r.menu.enable_index_display(&mut r.canvas, true);
        let handle = r.menu.index_display.unwrap();

        r.menu.enable_index_display(&mut r.canvas, false);
        assert!(r.menu.index_display.is_none());
        assert_eq!(r.canvas.destroyed, vec![handle]);
    }

    #[test]
    fn test_set_item_text_touches_only_that_item() {
        let mut r = rig(4, MenuConfig::default());
        r.menu
            .set_item_text(&mut r.canvas, 2, "Score: 10")
            .unwrap();

        assert_eq!(r.canvas.texts[&r.menu.items[2]], "Score: 10");
        for i in [0usize, 1, 3] {
            assert_eq!(r.canvas.texts[&r.menu.items[i]], format!("item {i}"));
        }
    }

    #[test]
    fn test_set_item_text_out_of_range() {
        let mut r = rig(3, MenuConfig::default());
        assert_eq!(
            r.menu.set_item_text(&mut r.canvas, 3, "x").unwrap_err(),
            MenuError::ItemOutOfRange { index: 3, active: 3 }
        );
    }

    #[test]
    fn test_set_active_count_bounds() {
        let mut r = rig(5, MenuConfig::default());

        r.menu.set_active_count(3).unwrap();
        assert_eq!(r.menu.active_count(), 3);

        assert_eq!(
            r.menu.set_active_count(6).unwrap_err(),
            MenuError::CapacityExceeded {
                capacity: 5,
                requested: 6
            }
        );
        assert_eq!(
            r.menu.set_active_count(0).unwrap_err(),
            MenuError::CapacityExceeded {
                capacity: 5,
                requested: 0
            }
        );
    }

    #[test]
    fn test_shrinking_active_count_reclamps_cursor() {
        let mut r = rig(5, MenuConfig::default());
        for _ in 0..4 {
            r.press_up();
        }
        assert_eq!(r.menu.current_index(), 4);

        r.menu.set_active_count(2).unwrap();
        assert_eq!(r.menu.current_index(), 1);
    }

    #[test]
    fn test_dismantle_destroys_every_widget() {
        let config = MenuConfig {
            show_index: true,
            ..MenuConfig::default()
        };
        let mut r = rig(3, config);

        r.menu.dismantle(&mut r.canvas);
        assert_eq!(r.canvas.destroyed.len(), 4); // 3 items + index display
        assert!(r.canvas.positions.is_empty());

        // Inert afterwards
        r.press_up();
        assert_eq!(r.menu.current_index(), 0);
    }

    #[test]
    fn test_single_item_menu_wraps_in_place() {
        let mut r = rig(1, MenuConfig::default());
        let base = r.item_y(0);

        r.press_up();
        assert_eq!(r.menu.current_index(), 0);
        assert_eq!(r.item_y(0), base); // zero-round rewind moves nothing
    }

    #[test]
    fn test_animation_pacing_asymmetry() {
        // A single-step scroll paces span_y steps at 2 ticks plus a
        // 10-tick settle; the wrap rewind paces (n-1)*span_y steps at 1
        // tick with no settle.
        let config = MenuConfig {
            span_y: 4,
            ..MenuConfig::default()
        };
        let mut r = rig(3, config);

        r.pacer.ticks = 0;
        r.press_up();
        // 4 steps * 2 ticks + 10 settle + 2 poll-end ticks
        assert_eq!(r.pacer.ticks, 4 * 2 + 10 + 2);

        r.press_up(); // cursor 2 (bottom)
        r.pacer.ticks = 0;
        r.press_up(); // wrap
        // (3-1) rounds * 4 steps * 1 tick + 2 poll-end ticks
        assert_eq!(r.pacer.ticks, 2 * 4 + 2);
    }
}
