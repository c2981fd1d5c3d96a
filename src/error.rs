/// Conditions that stop the game before the first frame is drawn.
#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Your terminal does not support color.")]
    NoColorSupport,

    #[error("Your terminal is too small, you need at least {min_width} x {min_height}.")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StartupError {
    /// True for the precondition failures that are reported to the player
    /// rather than propagated as errors.
    pub fn is_diagnostic(&self) -> bool {
        !matches!(self, StartupError::Io(_))
    }
}
