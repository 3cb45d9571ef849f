mod error;
mod params;
mod pattern;
mod traits;

pub use error::MatrixError;
pub(crate) use params::{check_dimensions, check_probability};
pub use params::Params;
pub use traits::{Evolve, GridView};
