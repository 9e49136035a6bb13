//! Life "plaintext" patterns: `!` starts a comment line, `.` is a dead cell,
//! `O` (or `*`) a live one.

use std::fmt;
use std::str::FromStr;

use crate::error::GridError;
use crate::grid::CellState::{self, Alive, Dead};
use crate::grid::Grid;

impl FromStr for Grid {
    type Err = GridError;

    /// Rows shorter than the widest one are padded with dead cells.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut rows: Vec<Vec<CellState>> = Vec::new();

        for (line_index, line) in text.lines().enumerate() {
            if line.starts_with('!') {
                continue;
            }
            let row = line
                .trim_end_matches('\r')
                .chars()
                .enumerate()
                .map(|(column, ch)| match ch {
                    '.' => Ok(Dead),
                    'O' | '*' => Ok(Alive),
                    _ => Err(GridError::UnexpectedChar {
                        ch,
                        line: line_index + 1,
                        column: column + 1,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(row);
        }

        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Dead);
        }
        Grid::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter_rows() {
            for cell in row {
                let ch = match cell {
                    Alive => 'O',
                    Dead => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
