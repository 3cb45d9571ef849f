/// Read-only view of a rectangular field of cells.
///
/// This is everything a renderer needs to draw one frame.
pub trait GridView {
    /// Returns `(width, height)` in cells.
    fn size(&self) -> (usize, usize);

    /// `x < width`, `y < height`
    fn get_cell(&self, x: usize, y: usize) -> bool;

    /// Generations advanced since the field was seeded.
    fn generation(&self) -> u64;

    /// Number of alive cells.
    fn population(&self) -> usize {
        let (w, h) = self.size();
        (0..h)
            .map(|y| (0..w).filter(|&x| self.get_cell(x, y)).count())
            .sum()
    }

    /// Coordinates of alive cells in row-major order.
    fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_
    where
        Self: Sized,
    {
        let (w, h) = self.size();
        (0..h)
            .flat_map(move |y| (0..w).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.get_cell(x, y))
    }
}

/// A field that can be moved forward in time.
pub trait Evolve: GridView {
    /// Replaces the current generation with the next one.
    fn advance_generation(&mut self);

    fn advance(&mut self, generations: u64) {
        for _ in 0..generations {
            self.advance_generation();
        }
    }
}
