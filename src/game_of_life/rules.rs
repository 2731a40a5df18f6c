//! Game of Life rules implementation (B3/S23)

use super::Grid;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Next state of a cell given its current state and live neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        match (current_state, neighbor_count) {
            (true, 2) | (true, 3) | (false, 3) => true,
            _ => false,
        }
    }

    /// Evolve the grid in place for multiple generations
    pub fn evolve_generations(grid: &mut Grid, generations: usize) {
        for _ in 0..generations {
            grid.step();
        }
    }

    /// Neighbor counts that would result in birth (dead -> alive)
    pub fn birth_neighbor_counts() -> Vec<u8> {
        vec![3]
    }

    /// Neighbor counts that would result in survival (alive -> alive)
    pub fn survival_neighbor_counts() -> Vec<u8> {
        vec![2, 3]
    }

    /// Get the maximum possible neighbor count for any cell
    pub fn max_neighbor_count() -> u8 {
        8 // Moore neighborhood
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let cells = rows
            .iter()
            .map(|row| row.chars().map(|c| c == '#').collect())
            .collect();
        Grid::from_cells(cells).unwrap()
    }

    #[test]
    fn test_still_life_block() {
        let grid = grid_from(&["....", ".##.", ".##.", "...."]);
        let mut evolved = grid.clone();
        evolved.step();

        assert_eq!(grid.living_cells(), evolved.living_cells());
    }

    #[test]
    fn test_oscillator_blinker() {
        let grid = grid_from(&["...", "###", "..."]);
        let mut evolved = grid.clone();
        evolved.step();

        let expected = grid_from(&[".#.", ".#.", ".#."]);
        assert_eq!(evolved.living_cells(), expected.living_cells());

        GameOfLifeRules::evolve_generations(&mut evolved, 1);
        assert_eq!(evolved.living_cells(), grid.living_cells());
        assert_eq!(evolved.generation(), 2);
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 0));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(true, 8));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
        assert!(!GameOfLifeRules::should_be_alive(false, 4));
    }

    #[test]
    fn test_rule_tables_agree_with_should_be_alive() {
        for count in 0..=GameOfLifeRules::max_neighbor_count() {
            assert_eq!(
                GameOfLifeRules::should_be_alive(false, count),
                GameOfLifeRules::birth_neighbor_counts().contains(&count)
            );
            assert_eq!(
                GameOfLifeRules::should_be_alive(true, count),
                GameOfLifeRules::survival_neighbor_counts().contains(&count)
            );
        }
    }
}
