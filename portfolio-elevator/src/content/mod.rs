//! Externally supplied portfolio content: floor table, profile, skills and
//! project records, plus the renderers that turn a floor selection into
//! drawer blocks.

/// Content manifest loading, validation and the built-in fallback library.
pub mod library;

/// Closed set of content kinds and their block renderers.
pub mod render;
