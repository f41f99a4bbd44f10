//! View lifecycle: mount verification, the loading → running → torn-down
//! state machine, and disposal of everything the view owns.

/// Mount/unmount state machine and the mount-container check.
pub mod view_state;

/// Teardown request handling and idempotent resource disposal.
pub mod teardown;
