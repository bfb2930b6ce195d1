use arrayvec::ArrayVec;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{successors, Move, State, GOAL};

/// Random walk of `steps` moves away from the goal, never undoing the previous
/// move. The result is always solvable, in at most `steps` moves.
pub fn scramble(rng: &mut impl Rng, steps: usize) -> State {
    let mut state = GOAL;
    let mut last = None::<Move>;
    for _ in 0..steps {
        let choices = successors(&state)
            .into_iter()
            .filter(|&(dir, _)| Some(dir.reversed()) != last)
            .collect::<ArrayVec<_, 4>>();
        // Every cell has at least two neighbours.
        let &(dir, next) = choices.choose(rng).expect("Must have a move");
        state = next;
        last = Some(dir);
    }
    state
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    use super::*;
    use crate::distances;

    #[test]
    fn stays_within_reach() {
        let dist = distances(GOAL);
        let mut rng = SmallRng::seed_from_u64(42);
        for steps in [0, 1, 5, 20, 60] {
            let state = scramble(&mut rng, steps);
            assert!((dist[&state] as usize) <= steps, "{state} after {steps}");
        }
        assert_eq!(scramble(&mut rng, 0), GOAL);
    }

    #[test]
    fn seeded_is_reproducible() {
        let a = scramble(&mut SmallRng::seed_from_u64(7), 30);
        let b = scramble(&mut SmallRng::seed_from_u64(7), 30);
        assert_eq!(a, b);
    }
}
