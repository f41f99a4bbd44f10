use bevy::prelude::*;

/// Night-blue cabin palette.
pub fn wall() -> Color {
    Color::srgb(0.090, 0.110, 0.161)
}

pub fn trim() -> Color {
    Color::srgb(0.137, 0.169, 0.243)
}

pub fn cabin_floor() -> Color {
    Color::srgb(0.055, 0.071, 0.110)
}

pub fn door() -> Color {
    Color::srgb(0.059, 0.090, 0.149)
}

pub fn panel() -> Color {
    Color::srgb(0.141, 0.176, 0.259)
}

pub fn button_idle() -> Color {
    Color::srgb(0.227, 0.271, 0.384)
}

pub fn button_hover() -> Color {
    Color::srgb(0.306, 0.365, 0.506)
}

/// Violet accent used for the pressed button while a navigation runs.
pub fn button_active() -> Color {
    Color::srgb(0.486, 0.361, 1.0)
}

pub fn handle() -> Color {
    Color::srgb(0.169, 0.208, 0.314)
}

pub fn label_plate() -> Color {
    Color::srgb(0.059, 0.071, 0.102)
}

pub fn reveal_backdrop() -> Color {
    Color::srgb(0.043, 0.102, 0.165)
}

pub fn reveal_light() -> Color {
    Color::srgb(0.533, 0.733, 1.0)
}

/// UI chrome shared by the HUD, indicator, and drawer.
pub fn ui_panel_background() -> Color {
    Color::srgba(0.10, 0.11, 0.13, 0.96)
}

pub fn ui_header_background() -> Color {
    Color::srgb(0.14, 0.16, 0.20)
}

pub fn ui_button_background() -> Color {
    Color::srgb(0.22, 0.24, 0.28)
}

pub fn ui_text() -> Color {
    Color::srgb(0.95, 0.96, 0.98)
}

pub fn ui_text_muted() -> Color {
    Color::srgb(0.70, 0.73, 0.80)
}
