//! Static scene construction: the cabin shell, the button panel and the
//! behind-the-doors reveal. Everything spawned here is `ViewScoped` so a
//! teardown removes it in one pass.

/// Cabin shell: walls, floor, ceiling, door frame and the two door panels.
pub mod cabin;

/// Button panel with one clickable button and label plate per floor.
pub mod panel;

/// Backdrop plane and point light revealed behind the open doors.
pub mod reveal;
