use crate::utils::{check_dimensions, check_probability};
use crate::{Evolve, GridView, MatrixError, Params};
use rand::Rng;

/// Offsets of the eight neighbours: N, NE, E, SE, S, SW, W, NW.
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Game of Life on a fixed `width x height` field.
///
/// Cells beyond the edges do not exist: they are never counted as
/// neighbours and the field does not wrap around.
#[derive(Clone)]
pub struct CellMatrix {
    cells_curr: Vec<bool>,
    cells_next: Vec<bool>,
    width: usize,
    height: usize,
    generation: u64,
}

impl CellMatrix {
    /// Creates a field where every cell is dead.
    pub fn blank(width: usize, height: usize) -> Result<Self, MatrixError> {
        check_dimensions(width, height)?;
        let size = width
            .checked_mul(height)
            .ok_or(MatrixError::TooLarge { width, height })?;
        Ok(Self {
            cells_curr: alloc_cells(size, width, height)?,
            cells_next: alloc_cells(size, width, height)?,
            width,
            height,
            generation: 0,
        })
    }

    /// Creates a field seeded from `rng` according to `params`.
    pub fn new<R: Rng + ?Sized>(params: Params, rng: &mut R) -> Result<Self, MatrixError> {
        params.validate()?;
        let mut result = Self::blank(params.width, params.height)?;
        result.init(params.alive_probability_percent, rng)?;
        Ok(result)
    }

    /// Creates a field seeded by ChaCha8.
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(params: Params, seed: Option<u64>) -> Result<Self, MatrixError> {
        use rand::SeedableRng;
        use rand_chacha::ChaCha8Rng;

        let mut rng = if let Some(x) = seed {
            ChaCha8Rng::seed_from_u64(x)
        } else {
            ChaCha8Rng::from_entropy()
        };
        Self::new(params, &mut rng)
    }

    /// Overwrites every cell: alive iff a uniform draw from `[0, 1)` is below
    /// `percent / 100`. Resets the generation counter.
    ///
    /// Cells are drawn column by column (`x` outer, `y` inner), one draw each.
    pub fn init<R: Rng + ?Sized>(&mut self, percent: u32, rng: &mut R) -> Result<(), MatrixError> {
        check_probability(percent)?;
        let threshold = percent as f64 / 100.;
        for x in 0..self.width {
            for y in 0..self.height {
                let r: f64 = rng.gen();
                self.set_cell(x, y, r < threshold);
            }
        }
        self.generation = 0;
        log::debug!(
            "seeded {}x{} field at {}%: {} alive",
            self.width,
            self.height,
            percent,
            self.population()
        );
        Ok(())
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of generations advanced since the last seeding.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn get_cell(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height);
        self.cells_curr[x + y * self.width]
    }

    pub fn set_cell(&mut self, x: usize, y: usize, state: bool) {
        debug_assert!(x < self.width && y < self.height);
        self.cells_curr[x + y * self.width] = state;
    }

    /// Kills every cell.
    pub fn clear(&mut self) {
        self.cells_curr.fill(false);
    }

    /// Counts alive cells among the in-bounds neighbours of `(x, y)`.
    ///
    /// Returns a value in `0..=8`; at most 3 for corners and 5 for edges.
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOUR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx).filter(|&nx| nx < self.width)?;
                let ny = y.checked_add_signed(dy).filter(|&ny| ny < self.height)?;
                Some(self.get_cell(nx, ny))
            })
            .filter(|&alive| alive)
            .count() as u8
    }

    /// Computes the next generation from the current one only, then swaps
    /// it in.
    pub fn advance_generation(&mut self) {
        for y in 0..self.height {
            for x in 0..self.width {
                let neibs = self.count_neighbors(x, y);
                let idx = x + y * self.width;
                self.cells_next[idx] = if self.cells_curr[idx] {
                    neibs == 2 || neibs == 3
                } else {
                    neibs == 3
                };
            }
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
        log::trace!(
            "generation {}: {} alive",
            self.generation,
            self.population()
        );
    }
}

fn alloc_cells(size: usize, width: usize, height: usize) -> Result<Vec<bool>, MatrixError> {
    let mut cells = Vec::new();
    cells
        .try_reserve_exact(size)
        .map_err(|_| MatrixError::TooLarge { width, height })?;
    cells.resize(size, false);
    Ok(cells)
}

/// Two fields are equal when they have the same dimensions and the same
/// alive cells. The generation counter and the scratch buffer are ignored.
impl PartialEq for CellMatrix {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.cells_curr == other.cells_curr
    }
}

impl Eq for CellMatrix {}

impl std::fmt::Debug for CellMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CellMatrix")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("generation", &self.generation)
            .field("cells", &format_args!("\n{}", self))
            .finish()
    }
}

impl GridView for CellMatrix {
    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn get_cell(&self, x: usize, y: usize) -> bool {
        CellMatrix::get_cell(self, x, y)
    }

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> usize {
        self.cells_curr.iter().filter(|&&alive| alive).count()
    }
}

impl Evolve for CellMatrix {
    fn advance_generation(&mut self) {
        CellMatrix::advance_generation(self);
    }
}
