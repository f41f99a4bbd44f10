//! Interaction tools: pointer picking against the button panel and the
//! 2D drawer/HUD overlay.

/// Ray against oriented-box intersection used by button picking.
pub mod ray;

/// Pointer gesture classification and floor button selection.
pub mod floor_select;

/// HUD (floor indicator, reset) and the sliding content drawer.
pub mod info_drawer;
