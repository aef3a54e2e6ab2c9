use super::board::CellState;

/// Birth/survival rule. Only the default B3/S23 rule is ever constructed by
/// the client; the shape exists so the transition table reads declaratively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub birth: Vec<usize>,
    pub survive: Vec<usize>,
}

impl Default for Rule {
    fn default() -> Self {
        Self {
            birth: vec![3],
            survive: vec![2, 3],
        }
    }
}

impl Rule {
    pub fn next_state(&self, current: CellState, live_neighbors: usize) -> CellState {
        let alive = match current {
            CellState::Alive => self.survive.contains(&live_neighbors),
            CellState::Dead => self.birth.contains(&live_neighbors),
        };

        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CellState::{Alive, Dead};

    #[test]
    fn alive_cell_survives_only_on_two_or_three() {
        let rule = Rule::default();

        for live_neighbors in 0..=8 {
            let expected = if live_neighbors == 2 || live_neighbors == 3 {
                Alive
            } else {
                Dead
            };

            assert_eq!(rule.next_state(Alive, live_neighbors), expected);
        }
    }

    #[test]
    fn dead_cell_births_only_on_three() {
        let rule = Rule::default();

        for live_neighbors in 0..=8 {
            let expected = if live_neighbors == 3 { Alive } else { Dead };

            assert_eq!(rule.next_state(Dead, live_neighbors), expected);
        }
    }
}
