//! First-class invariants for the game state machine.
//!
//! Invariants are logical properties that must hold after every transition.
//! They are testable independently and are asserted after each accepted move
//! in debug builds.

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples of two to four invariants.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns every violation, not just the first.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

type Check<S> = (fn(&S) -> bool, fn() -> &'static str);

fn check_each<S>(checks: &[Check<S>], state: &S) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(holds, _)| !holds(state))
        .map(|(_, description)| InvariantViolation::new(description()))
        .collect();

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [Check<S>; 2] = [
            (I1::holds, I1::description),
            (I2::holds, I2::description),
        ];
        check_each(&checks, state)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [Check<S>; 3] = [
            (I1::holds, I1::description),
            (I2::holds, I2::description),
            (I3::holds, I3::description),
        ];
        check_each(&checks, state)
    }
}

impl<S, I1, I2, I3, I4> InvariantSet<S> for (I1, I2, I3, I4)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
    I4: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let checks: [Check<S>; 4] = [
            (I1::holds, I1::description),
            (I2::holds, I2::description),
            (I3::holds, I3::description),
            (I4::holds, I4::description),
        ];
        check_each(&checks, state)
    }
}

pub mod alternating_turn;
pub mod origin_empty;
pub mod pointer_in_range;
pub mod single_step;

pub use alternating_turn::AlternatingTurnInvariant;
pub use origin_empty::OriginEmptyInvariant;
pub use pointer_in_range::PointerInRangeInvariant;
pub use single_step::SingleStepInvariant;

/// All game invariants as a composable set.
pub type GameInvariants = (
    OriginEmptyInvariant,
    SingleStepInvariant,
    AlternatingTurnInvariant,
    PointerInRangeInvariant,
);
