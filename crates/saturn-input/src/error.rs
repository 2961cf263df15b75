use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    /// Destination buffer cannot hold the encoded save-state record.
    #[error("save-state buffer too small (requires {required} bytes, got {actual})")]
    BufferTooSmall { required: usize, actual: usize },

    /// Record belongs to another subsystem.
    #[error("save-state section mismatch: expected {expected}, found {found}")]
    SectionMismatch {
        expected: &'static str,
        found: String,
    },

    /// Bytes left over after a complete record.
    #[error("save-state record followed by {count} trailing bytes")]
    TrailingBytes { count: usize },

    /// Persisted setting outside its accepted range.
    #[error("setting {name} out of range: {value}")]
    InvalidSetting { name: &'static str, value: i32 },

    #[error("save-state codec error: {0}")]
    Codec(#[from] postcard::Error),
}
