/// Cabin interior dimensions in metres.
pub const CABIN_WIDTH: f32 = 3.0;
pub const CABIN_DEPTH: f32 = 3.0;
pub const CABIN_HEIGHT: f32 = 2.5;

/// Door opening cut into the front wall.
pub const OPENING_WIDTH: f32 = 1.7;
pub const OPENING_HEIGHT: f32 = 2.2;
pub const FRAME_THICKNESS: f32 = 0.08;

/// Each sliding panel covers half the opening when closed.
pub const DOOR_PANEL_WIDTH: f32 = OPENING_WIDTH / 2.0;
pub const DOOR_PANEL_HEIGHT: f32 = OPENING_HEIGHT;
pub const DOOR_PANEL_THICKNESS: f32 = 0.10;

/// Lateral door offsets. Closed panels meet at the seam; open panels
/// retract fully behind the jambs.
pub const DOOR_LEFT_CLOSED_X: f32 = -DOOR_PANEL_WIDTH / 2.0;
pub const DOOR_RIGHT_CLOSED_X: f32 = DOOR_PANEL_WIDTH / 2.0;
pub const DOOR_LEFT_OPEN_X: f32 = -DOOR_PANEL_WIDTH;
pub const DOOR_RIGHT_OPEN_X: f32 = DOOR_PANEL_WIDTH;

/// Button panel mounted on the front wall, right of the doors.
pub const PANEL_WIDTH: f32 = 0.42;
pub const PANEL_HEIGHT: f32 = 1.55;
pub const PANEL_THICKNESS: f32 = 0.06;
pub const PANEL_X: f32 = OPENING_WIDTH / 2.0 + 0.40;
pub const PANEL_Y: f32 = 1.25;

/// Button column layout, top to bottom in floor order.
pub const BUTTON_RADIUS: f32 = 0.06;
pub const BUTTON_DEPTH: f32 = 0.025;
pub const BUTTON_COLUMN_X_OFFSET: f32 = 0.13;
pub const BUTTON_START_Y: f32 = PANEL_Y + 0.45;
pub const BUTTON_GAP_Y: f32 = 0.22;

/// Label plate beside each button.
pub const LABEL_PLATE_WIDTH: f32 = 0.32;
pub const LABEL_PLATE_HEIGHT: f32 = 0.08;
pub const LABEL_PLATE_X_OFFSET: f32 = -0.07;

/// Reveal backdrop behind the open doors.
pub const REVEAL_PLANE_WIDTH: f32 = OPENING_WIDTH + 0.8;
pub const REVEAL_PLANE_HEIGHT: f32 = OPENING_HEIGHT + 0.2;
pub const REVEAL_PLANE_Z_OFFSET: f32 = 0.35;
pub const REVEAL_LIGHT_HEIGHT: f32 = 1.6;
pub const REVEAL_LIGHT_Z_OFFSET: f32 = 0.65;
