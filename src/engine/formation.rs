use super::position::Position;

/// Inclusive per-category bounds for a starting set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormationRules {
    pub starting_size: usize,
    pub goalkeepers: (u32, u32),
    pub defenders: (u32, u32),
    pub midfielders: (u32, u32),
    pub forwards: (u32, u32),
}

impl Default for FormationRules {
    fn default() -> Self {
        Self {
            starting_size: 10,
            goalkeepers: (1, 1),
            defenders: (2, 3),
            midfielders: (3, 5),
            forwards: (2, 3),
        }
    }
}

impl FormationRules {
    pub fn bounds(&self, position: Position) -> (u32, u32) {
        match position {
            Position::Goalkeeper => self.goalkeepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }

    pub fn max_for(&self, position: Position) -> u32 {
        self.bounds(position).1
    }

    /// True when `positions` is a full starting set within every bound.
    pub fn is_legal(&self, positions: &[Position]) -> bool {
        if positions.len() != self.starting_size {
            return false;
        }
        self.counts_are_legal(&FormationCounts::from_positions(positions))
    }

    pub fn counts_are_legal(&self, counts: &FormationCounts) -> bool {
        Position::ALL.iter().all(|&position| {
            let (min, max) = self.bounds(position);
            (min..=max).contains(&counts.count(position))
        })
    }

    pub fn would_exceed_max(&self, counts: &FormationCounts, position: Position) -> bool {
        counts.count(position) + 1 > self.max_for(position)
    }
}

/// Running tally of canonical positions in a (partial) starting set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormationCounts {
    goalkeepers: u32,
    defenders: u32,
    midfielders: u32,
    forwards: u32,
}

impl FormationCounts {
    pub fn from_positions(positions: &[Position]) -> Self {
        let mut counts = Self::default();
        for &position in positions {
            counts.add(position);
        }
        counts
    }

    pub fn add(&mut self, position: Position) {
        *self.slot_mut(position) += 1;
    }

    pub fn count(&self, position: Position) -> u32 {
        match position {
            Position::Goalkeeper => self.goalkeepers,
            Position::Defender => self.defenders,
            Position::Midfielder => self.midfielders,
            Position::Forward => self.forwards,
        }
    }

    pub fn total(&self) -> u32 {
        self.goalkeepers + self.defenders + self.midfielders + self.forwards
    }

    fn slot_mut(&mut self, position: Position) -> &mut u32 {
        match position {
            Position::Goalkeeper => &mut self.goalkeepers,
            Position::Defender => &mut self.defenders,
            Position::Midfielder => &mut self.midfielders,
            Position::Forward => &mut self.forwards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Position::{Defender as D, Forward as F, Goalkeeper as G, Midfielder as M};

    #[test]
    fn accepts_standard_shapes() {
        let rules = FormationRules::default();
        assert!(rules.is_legal(&[G, D, D, M, M, M, M, F, F, F]));
        assert!(rules.is_legal(&[G, D, D, D, M, M, M, F, F, F]));
        assert!(rules.is_legal(&[G, D, D, M, M, M, M, M, F, F]));
    }

    #[test]
    fn rejects_bounds_violations() {
        let rules = FormationRules::default();
        assert!(!rules.is_legal(&[G, G, D, D, M, M, M, F, F, F]));
        assert!(!rules.is_legal(&[G, D, D, D, D, M, M, M, F, F]));
        assert!(!rules.is_legal(&[G, D, M, M, M, M, M, M, F, F]));
        assert!(!rules.is_legal(&[G, D, D, M, M, M, M, M, M, F]));
    }

    #[test]
    fn rejects_wrong_size() {
        let rules = FormationRules::default();
        assert!(!rules.is_legal(&[G, D, D, M, M, M, F, F, F]));
        assert!(!rules.is_legal(&[]));
    }

    #[test]
    fn maximum_is_inclusive() {
        let rules = FormationRules::default();
        let counts = FormationCounts::from_positions(&[G, D, D]);
        assert!(!rules.would_exceed_max(&counts, D));

        let counts = FormationCounts::from_positions(&[G, D, D, D]);
        assert!(rules.would_exceed_max(&counts, D));
        assert_eq!(rules.max_for(M), 5);
        assert_eq!(rules.max_for(F), 3);
        assert_eq!(counts.total(), 4);
    }
}
