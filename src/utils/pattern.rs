//! Plaintext patterns: one line per row, `.` for dead and `O` for alive.

use crate::{CellMatrix, MatrixError};
use std::fmt::{Display, Write};
use std::str::FromStr;

impl FromStr for CellMatrix {
    type Err = MatrixError;

    /// Blank lines and lines starting with `!` are skipped; rows shorter
    /// than the longest one are padded with dead cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = vec![];
        for (i, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('!') {
                continue;
            }
            let row = line
                .chars()
                .map(|ch| match ch {
                    '.' => Ok(false),
                    'O' | 'o' | '*' => Ok(true),
                    _ => Err(MatrixError::UnexpectedChar { ch, line: i + 1 }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if width == 0 {
            return Err(MatrixError::EmptyPattern);
        }
        let mut result = CellMatrix::blank(width, rows.len())?;
        for (y, row) in rows.iter().enumerate() {
            for (x, &state) in row.iter().enumerate() {
                result.set_cell(x, y, state);
            }
        }
        Ok(result)
    }
}

impl Display for CellMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.height() {
            if y != 0 {
                f.write_char('\n')?;
            }
            for x in 0..self.width() {
                f.write_char(if self.get_cell(x, y) { 'O' } else { '.' })?;
            }
        }
        Ok(())
    }
}
