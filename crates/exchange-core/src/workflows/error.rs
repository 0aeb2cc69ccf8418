use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EquationError {
    #[error(
        "Malformed equation: expected exactly one '->' separating two sides, found {sides} side(s)"
    )]
    Malformed { sides: usize },
}
