use super::MatrixError;

/// Construction parameters of a [`CellMatrix`](crate::CellMatrix).
///
/// Dimensions are counted in cells, not pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Params {
    /// Chance of every cell being alive after seeding, in percent.
    pub alive_probability_percent: u32,
    pub width: usize,
    pub height: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            alive_probability_percent: 35,
            width: 30,
            height: 27,
        }
    }
}

impl Params {
    pub const MAX_PROBABILITY_PERCENT: u32 = 100;

    pub fn new(
        alive_probability_percent: u32,
        width: usize,
        height: usize,
    ) -> Result<Self, MatrixError> {
        let params = Self {
            alive_probability_percent,
            width,
            height,
        };
        params.validate()?;
        Ok(params)
    }

    /// Rejects empty grids and probabilities above 100%.
    ///
    /// Out-of-range values are never clamped.
    pub fn validate(&self) -> Result<(), MatrixError> {
        check_dimensions(self.width, self.height)?;
        check_probability(self.alive_probability_percent)
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), MatrixError> {
    if width == 0 || height == 0 {
        return Err(MatrixError::ZeroDimension { width, height });
    }
    Ok(())
}

pub(crate) fn check_probability(percent: u32) -> Result<(), MatrixError> {
    if percent > Params::MAX_PROBABILITY_PERCENT {
        return Err(MatrixError::ProbabilityOutOfRange(percent));
    }
    Ok(())
}
