//! Rounds: the bodies shown for one decision, and how a choice is judged.

use std::fmt;

use orrery_core::Body;

/// Position of a body in a comparison round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First body, display slot 0.
    Left,
    /// Second body, display slot 1.
    Right,
}

impl Side {
    /// Display slot of this side.
    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }

    /// Side for a display slot.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Left),
            1 => Some(Self::Right),
            _ => None,
        }
    }

    /// The opposite side.
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Two distinct bodies; the player picks the bigger one.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRound {
    left: Body,
    right: Body,
}

impl ComparisonRound {
    /// Pair two bodies. Returns `None` if they share a name.
    pub fn new(left: Body, right: Body) -> Option<Self> {
        (left.name != right.name).then_some(Self { left, right })
    }

    /// Body on the left.
    pub fn left(&self) -> &Body {
        &self.left
    }

    /// Body on the right.
    pub fn right(&self) -> &Body {
        &self.right
    }

    /// Body on one side.
    pub fn body(&self, side: Side) -> &Body {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Picking `side` is correct iff that body is strictly bigger than the other.
    pub fn is_correct(&self, side: Side) -> bool {
        self.body(side).is_larger_than(self.body(side.other()))
    }
}

/// One target body shown alongside two distractors, in shuffled order.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentificationRound {
    options: [Body; 3],
    target: usize,
}

impl IdentificationRound {
    /// Build a round from three options in display order and the target's name.
    ///
    /// Returns `None` unless the names are unique and the target is among them.
    pub fn new(options: [Body; 3], target_name: &str) -> Option<Self> {
        let [a, b, c] = &options;
        if a.name == b.name || a.name == c.name || b.name == c.name {
            return None;
        }
        let target = options.iter().position(|o| o.name == target_name)?;
        Some(Self { options, target })
    }

    /// The body the player has to name.
    pub fn target(&self) -> &Body {
        &self.options[self.target]
    }

    /// Display slot of the target.
    pub fn target_position(&self) -> usize {
        self.target
    }

    /// The three options, in display order.
    pub fn options(&self) -> &[Body; 3] {
        &self.options
    }

    /// Whether `chosen` is the target, compared by name.
    pub fn is_correct(&self, chosen: &Body) -> bool {
        chosen.name == self.target().name
    }
}

/// A player's pick, as translated by the front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    /// A display slot (0 = left / first option).
    Slot(usize),
    /// A body name. An exact match wins; otherwise case is ignored.
    Named(String),
}

/// The round currently in play.
#[derive(Debug, Clone, PartialEq)]
pub enum Round {
    /// Which of two is bigger?
    Comparison(ComparisonRound),
    /// What is this body called?
    Identification(IdentificationRound),
}

impl Round {
    /// Bodies a player can pick, in display order.
    pub fn options(&self) -> Vec<&Body> {
        match self {
            Self::Comparison(r) => vec![r.left(), r.right()],
            Self::Identification(r) => r.options().iter().collect(),
        }
    }

    /// Body in a display slot.
    pub fn slot(&self, index: usize) -> Option<&Body> {
        match self {
            Self::Comparison(r) => Side::from_index(index).map(|s| r.body(s)),
            Self::Identification(r) => r.options().get(index),
        }
    }

    /// Map a choice to a display slot, if it names a displayed body.
    pub fn resolve(&self, choice: &Choice) -> Option<usize> {
        match choice {
            Choice::Slot(index) => self.slot(*index).map(|_| *index),
            Choice::Named(name) => {
                let wanted = name.trim();
                let options = self.options();
                options
                    .iter()
                    .position(|b| b.name == wanted)
                    .or_else(|| options.iter().position(|b| b.name.eq_ignore_ascii_case(wanted)))
            }
        }
    }

    /// Whether picking the body in `slot` is correct. Unknown slots are not.
    pub fn is_correct_slot(&self, slot: usize) -> bool {
        match self {
            Self::Comparison(r) => Side::from_index(slot).is_some_and(|s| r.is_correct(s)),
            Self::Identification(r) => r.options().get(slot).is_some_and(|b| r.is_correct(b)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trio() -> [Body; 3] {
        [
            Body::new("Titan", 5149.5),
            Body::new("Mars", 6779.0),
            Body::new("Pluto", 2376.6),
        ]
    }

    #[test]
    fn side_helpers() {
        assert_eq!(Side::Left.other(), Side::Right);
        assert_eq!(Side::from_index(1), Some(Side::Right));
        assert_eq!(Side::from_index(2), None);
        assert_eq!(Side::Right.index(), 1);
    }

    #[test]
    fn comparison_bigger_wins() {
        let r = ComparisonRound::new(Body::new("A", 10.0), Body::new("B", 5.0)).unwrap();
        assert!(r.is_correct(Side::Left));
        assert!(!r.is_correct(Side::Right));
    }

    #[test]
    fn comparison_tie_is_never_correct() {
        let r = ComparisonRound::new(Body::new("A", 5.0), Body::new("B", 5.0)).unwrap();
        assert!(!r.is_correct(Side::Left));
        assert!(!r.is_correct(Side::Right));
    }

    #[test]
    fn comparison_rejects_same_body() {
        assert!(ComparisonRound::new(Body::new("A", 1.0), Body::new("A", 2.0)).is_none());
    }

    #[test]
    fn identification_checks_construction() {
        assert!(IdentificationRound::new(trio(), "Mars").is_some());
        assert!(IdentificationRound::new(trio(), "Venus").is_none());
        let dup = [Body::new("A", 1.0), Body::new("A", 1.0), Body::new("B", 1.0)];
        assert!(IdentificationRound::new(dup, "B").is_none());
    }

    #[test]
    fn identification_correct_in_any_position() {
        for target in ["Titan", "Mars", "Pluto"] {
            let r = IdentificationRound::new(trio(), target).unwrap();
            let round = Round::Identification(r.clone());
            for (slot, body) in r.options().iter().enumerate() {
                assert_eq!(round.is_correct_slot(slot), body.name == target);
            }
        }
    }

    #[test]
    fn resolve_slots_and_names() {
        let round = Round::Identification(IdentificationRound::new(trio(), "Mars").unwrap());
        assert_eq!(round.resolve(&Choice::Slot(2)), Some(2));
        assert_eq!(round.resolve(&Choice::Slot(3)), None);
        assert_eq!(round.resolve(&Choice::Named(" mars ".into())), Some(1));
        assert_eq!(round.resolve(&Choice::Named("Venus".into())), None);

        let pair = Round::Comparison(
            ComparisonRound::new(Body::new("A", 1.0), Body::new("B", 2.0)).unwrap(),
        );
        assert_eq!(pair.resolve(&Choice::Slot(1)), Some(1));
        assert_eq!(pair.resolve(&Choice::Slot(2)), None);
        assert!(pair.is_correct_slot(1));
        assert!(!pair.is_correct_slot(5));
    }

    #[test]
    fn exact_name_beats_case_insensitive_match() {
        let options = [
            Body::new("Io", 3643.2),
            Body::new("IO", 1.0),
            Body::new("Europa", 3121.6),
        ];
        let round = Round::Identification(IdentificationRound::new(options, "IO").unwrap());

        let slot = round.resolve(&Choice::Named("IO".into())).unwrap();
        assert_eq!(slot, 1);
        assert!(round.is_correct_slot(slot));

        assert_eq!(round.resolve(&Choice::Named("Io".into())), Some(0));
        assert_eq!(round.resolve(&Choice::Named("europa".into())), Some(2));
    }
}
