/**
* A live cell dies if it has fewer than two live neighbors.
* A live cell with two or three live neighbors lives on to the next generation.
* A live cell with more than three live neighbors dies.
* A dead cell will be brought back to live if it has exactly three live neighbors.
*
* The grid is a torus: neighbors of edge cells wrap around to the opposite edge.
*/

pub mod error;
pub mod grid;
pub mod life;
mod pattern;

pub use error::GridError;
pub use grid::{CellState, Grid};
pub use life::Life;
