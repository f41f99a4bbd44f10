//! Time-driven animation systems and the navigation state machine that
//! sequences them: doors close fully before travel, travel completes before
//! doors open, and content is presented only once the reveal has finished.

/// Busy-gated navigation phase machine and its request/complete transitions.
pub mod navigation;

/// Door slide and reveal fade animations.
pub mod doors;

/// Simulated multi-floor transit: camera rumble, light flicker, indicator.
pub mod travel;
