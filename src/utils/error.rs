#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: usize, height: usize },
    #[error("grid of {width}x{height} cells cannot be allocated")]
    TooLarge { width: usize, height: usize },
    #[error("alive probability must be within 0..=100 percent, got {0}")]
    ProbabilityOutOfRange(u32),
    #[error("unexpected character {ch:?} in pattern line {line}")]
    UnexpectedChar { ch: char, line: usize },
    #[error("pattern contains no cells")]
    EmptyPattern,
}
