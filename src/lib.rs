mod gui;
mod matrix;
mod utils;

pub use gui::{App, Config, Ticker};
pub use matrix::CellMatrix;
pub use utils::{Evolve, GridView, MatrixError, Params};
