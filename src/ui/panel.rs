//! Overlay panel helpers for the demo scenes.
//!
//! The exercises draw their controls as floating elements over the 3D
//! viewport: instruction text near the bottom, a large readout near the
//! top, and a centered row of buttons. These helpers handle the
//! positioning so the demos only describe content.

use imgui::{Condition, Ui, WindowFlags};

/// Draws a borderless, auto-sized window centered at the given fractions
/// of the display (0.5, 0.5 is dead center). The content closure fills
/// it with regular imgui widgets.
pub fn overlay_window<F: FnOnce()>(ui: &Ui, id: &str, x_frac: f32, y_frac: f32, content: F) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window(id)
        .position(
            [display_size[0] * x_frac, display_size[1] * y_frac],
            Condition::Always,
        )
        .position_pivot([0.5, 0.5])
        .flags(
            WindowFlags::NO_DECORATION
                | WindowFlags::NO_BACKGROUND
                | WindowFlags::ALWAYS_AUTO_RESIZE
                | WindowFlags::NO_MOVE
                | WindowFlags::NO_SAVED_SETTINGS,
        )
        .build(content);
}

/// Non-interactive variant for pure text overlays; clicks pass through
/// to the scene underneath.
pub fn text_overlay(ui: &Ui, id: &str, x_frac: f32, y_frac: f32, lines: &[&str]) {
    let display_size = ui.io().display_size;
    if display_size[0] <= 0.0 || display_size[1] <= 0.0 {
        return;
    }

    ui.window(id)
        .position(
            [display_size[0] * x_frac, display_size[1] * y_frac],
            Condition::Always,
        )
        .position_pivot([0.5, 0.5])
        .flags(
            WindowFlags::NO_DECORATION
                | WindowFlags::NO_BACKGROUND
                | WindowFlags::ALWAYS_AUTO_RESIZE
                | WindowFlags::NO_MOVE
                | WindowFlags::NO_INPUTS
                | WindowFlags::NO_SAVED_SETTINGS,
        )
        .build(|| {
            for line in lines {
                ui.text(line);
            }
        });
}

/// Draws `text` scaled up relative to the base font. Call inside a
/// window closure.
pub fn big_label(ui: &Ui, text: &str, scale: f32) {
    ui.set_window_font_scale(scale);
    ui.text(text);
    ui.set_window_font_scale(1.0);
}
