//! Scripted menu walkthrough.
//!
//! Drives a five-item menu through a full wrap cycle and a selection
//! using the in-process framework simulation.
//! Run with: `cargo run --bin menu_demo`

use microcanvas::sim::{ScriptedButtons, SimCanvas, TickPacer};
use microcanvas::{ButtonId, Menu, MenuConfig, MenuError};
use tracing_subscriber::EnvFilter;

const UP: ButtonId = ButtonId(0);
const DOWN: ButtonId = ButtonId(1);
const SELECT: ButtonId = ButtonId(2);

fn main() -> Result<(), MenuError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let config = MenuConfig::from_toml_str(
        r#"
        origin_x = 20
        origin_y = 40
        span_y = 16
        text_offset_x = 10
        show_index = true
        "#,
    )?;

    let mut canvas = SimCanvas::new();
    let mut menu = Menu::create(&mut canvas, config, 5);
    menu.bind_inputs(UP, DOWN, SELECT);
    menu.set_item_text(&mut canvas, 2, "Score: 10")?;
    menu.on_select(|| tracing::info!("item selected"));

    // Five up presses walk 1..4 and wrap back to 0 with the full
    // rewind; one down press wraps to the bottom; then select. Scripts
    // advance one sample per poll, so the later buttons idle first.
    let mut buttons = ScriptedButtons::new();
    for _ in 0..5 {
        buttons.push_press(UP);
    }
    buttons.push_idle(DOWN, 10);
    buttons.push_press(DOWN);
    buttons.push_idle(SELECT, 12);
    buttons.push_press(SELECT);

    let mut pacer = TickPacer::new();
    while !buttons.is_exhausted() {
        menu.poll(&mut canvas, &mut buttons, &mut pacer);
        tracing::info!(cursor = menu.current_index(), "polled");
    }

    tracing::info!(
        cursor = menu.current_index(),
        ticks = pacer.elapsed(),
        widgets = canvas.widget_count(),
        "walkthrough complete"
    );

    menu.dismantle(&mut canvas);
    tracing::info!(widgets = canvas.widget_count(), "menu dismantled");
    Ok(())
}
