use thiserror::Error;

/// Failure modes of the elevator view. Nothing here propagates out of the
/// widget; every variant degrades to a visible but non-fatal in-view state.
#[derive(Debug, Error)]
pub enum ElevatorError {
    /// The mount container (primary window / canvas) is missing or detached.
    /// The view refuses to mount and spawns nothing.
    #[error("mount container missing or detached, refusing to mount")]
    Mount,

    /// An external visual asset failed to load. The affected surface falls
    /// back to a placeholder appearance for the lifetime of the mount.
    #[error("asset failed to load: {path}")]
    AssetLoad { path: String },

    /// The externally supplied floor configuration is malformed. The view
    /// falls back to the built-in content library.
    #[error("invalid content configuration: {reason}")]
    Config { reason: String },

    /// A floor key with no matching renderer. Rendered as a generic
    /// "not wired yet" panel naming the key, never thrown to a caller.
    #[error("no content renderer wired for key `{key}`")]
    UnrecognizedSelection { key: String },
}
