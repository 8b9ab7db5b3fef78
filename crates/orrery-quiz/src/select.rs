//! Round selection: which bodies go into the next round.

use rand::Rng;
use rand::rngs::StdRng;

use orrery_core::{Body, Catalog};

use crate::error::{QuizError, QuizResult};
use crate::round::{ComparisonRound, IdentificationRound};

/// Bodies needed for a comparison round.
pub const MIN_COMPARISON_BODIES: usize = 2;

/// Bodies needed for an identification round (target plus two distractors).
pub const MIN_IDENTIFICATION_BODIES: usize = 3;

/// Pick two different bodies, each uniformly at random.
///
/// The second draw is repeated until it lands on a different index.
pub fn pick_comparison_pair(catalog: &Catalog, rng: &mut StdRng) -> QuizResult<ComparisonRound> {
    let len = catalog.len();
    if len < MIN_COMPARISON_BODIES {
        return Err(QuizError::EmptyCatalog { len });
    }
    let bodies = catalog.bodies();

    let first = rng.random_range(0..len);
    let mut second = rng.random_range(0..len);
    while second == first {
        second = rng.random_range(0..len);
    }

    let round = ComparisonRound::new(bodies[first].clone(), bodies[second].clone())
        .ok_or(QuizError::EmptyCatalog { len })?;
    tracing::debug!(
        left = %round.left().name,
        right = %round.right().name,
        "picked comparison pair"
    );
    Ok(round)
}

/// Pick a target and two distractors, then shuffle them into display order.
///
/// Distractors come from every other body and are drawn by rejection:
/// a draw that repeats an already chosen name is thrown away.
pub fn pick_identification_round(
    catalog: &Catalog,
    rng: &mut StdRng,
) -> QuizResult<IdentificationRound> {
    let len = catalog.len();
    if len < MIN_IDENTIFICATION_BODIES {
        return Err(QuizError::InsufficientCatalog { len });
    }
    let bodies = catalog.bodies();

    let target = &bodies[rng.random_range(0..len)];
    let pool: Vec<&Body> = bodies.iter().filter(|b| b.name != target.name).collect();

    let mut picked: Vec<&Body> = vec![target];
    while picked.len() < MIN_IDENTIFICATION_BODIES {
        let candidate = pool[rng.random_range(0..pool.len())];
        if !picked.iter().any(|p| p.name == candidate.name) {
            picked.push(candidate);
        }
    }
    shuffle(&mut picked, rng);

    let options = [picked[0].clone(), picked[1].clone(), picked[2].clone()];
    let round = IdentificationRound::new(options, &target.name)
        .ok_or(QuizError::InsufficientCatalog { len })?;
    tracing::debug!(
        target = %round.target().name,
        position = round.target_position(),
        "picked identification round"
    );
    Ok(round)
}

/// Fisher-Yates shuffle: walk from the last index down to 1, swapping each
/// element with a uniformly chosen index at or before it.
pub fn shuffle<T>(items: &mut [T], rng: &mut StdRng) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
