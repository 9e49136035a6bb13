use log::debug;

use crate::grid::Grid;

/// Owner of the current generation.
///
/// Each step computes the whole successor from the current grid and then
/// replaces it, so no cell ever reads a neighbor from the generation being built.
#[derive(Debug, Clone)]
pub struct Life {
    current: Grid,
    generation: u64,
    settled: bool,
}

impl Life {
    pub fn new(seed: Grid) -> Self {
        Self {
            current: seed,
            generation: 0,
            settled: false,
        }
    }

    /// Read-only view of the current generation, e.g. for drawing.
    pub fn current(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the last step reproduced its predecessor. A settled grid
    /// never changes again.
    pub fn is_settled(&self) -> bool {
        self.settled
    }

    /// Advance by one generation. Returns `false` when the new generation is
    /// identical to the previous one.
    pub fn step(&mut self) -> bool {
        let next = self.current.advance();
        let changed = next != self.current;
        self.current = next;
        self.generation += 1;
        self.settled = !changed;

        if !changed {
            debug!(
                "generation {} repeats its predecessor (population {})",
                self.generation,
                self.current.population()
            );
        }
        changed
    }

    /// Steps until the grid settles or `max_generations` steps have been
    /// taken. Returns the number of steps taken, which is zero once settled.
    pub fn run(&mut self, max_generations: u64) -> u64 {
        let mut steps = 0;
        while steps < max_generations && !self.settled {
            self.step();
            steps += 1;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_counts_generations() {
        let mut life = Life::new(Grid::from_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap());
        let start = life.current().clone();
        assert_eq!(life.generation(), 0);

        assert!(life.step());
        assert_eq!(life.generation(), 1);
        assert_ne!(life.current(), &start);

        assert!(life.step());
        assert_eq!(life.generation(), 2);
        assert_eq!(life.current(), &start);
    }

    #[test]
    fn test_step_reports_still_life() {
        let block = Grid::from_alive(6, 6, &[(1, 1), (1, 2), (2, 1), (2, 2)]).unwrap();
        let mut life = Life::new(block.clone());
        assert!(!life.is_settled());
        assert!(!life.step());
        assert!(life.is_settled());
        assert_eq!(life.current(), &block);
        assert_eq!(life.generation(), 1);
    }

    #[test]
    fn test_run_stops_when_settled() {
        // A lone pair dies out after one step and then stays empty.
        let mut life = Life::new(Grid::from_alive(5, 5, &[(0, 0), (0, 1)]).unwrap());
        assert_eq!(life.run(100), 2);
        assert_eq!(life.generation(), 2);
        assert_eq!(life.current().population(), 0);
        assert!(life.is_settled());

        assert_eq!(life.run(100), 0);
        assert_eq!(life.generation(), 2);
    }

    #[test]
    fn test_single_steps_match_bulk_run() {
        let seed = Grid::seeded(12, 12, 0.3, 11).unwrap();
        let mut bulk = Life::new(seed.clone());
        let mut ticked = Life::new(seed);

        let steps = bulk.run(500);
        let mut ticks = 0;
        while ticked.run(1) == 1 {
            ticks += 1;
            if ticks == 500 {
                break;
            }
        }
        assert_eq!(ticks, steps);
        assert_eq!(ticked.current(), bulk.current());
        assert_eq!(ticked.is_settled(), bulk.is_settled());
    }

    #[test]
    fn test_run_respects_bound() {
        let mut life = Life::new(Grid::from_alive(5, 5, &[(2, 1), (2, 2), (2, 3)]).unwrap());
        assert_eq!(life.run(7), 7);
        assert_eq!(life.generation(), 7);
        assert_eq!(life.current().population(), 3);

        let mut idle = Life::new(Grid::new(3, 3).unwrap());
        assert_eq!(idle.run(0), 0);
        assert_eq!(idle.generation(), 0);
    }

    #[test]
    fn test_random_soup_is_deterministic() {
        let seed = Grid::seeded(32, 32, 0.3, 7).unwrap();
        let mut a = Life::new(seed.clone());
        let mut b = Life::new(seed);
        a.run(40);
        b.run(40);
        assert_eq!(a.generation(), b.generation());
        assert_eq!(a.current(), b.current());
        assert_eq!(a.current().dimensions(), (32, 32));
    }
}
