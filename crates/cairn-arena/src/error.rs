//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// The backing store cannot satisfy the request — no more elements
    /// can be handed out until the arena is reset.
    CapacityExceeded {
        /// Number of elements requested.
        requested: usize,
        /// Number of elements still unallocated.
        remaining: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded {
                requested,
                remaining,
            } => {
                write!(
                    f,
                    "arena capacity exceeded: requested {requested} elements, {remaining} remaining"
                )
            }
        }
    }
}

impl Error for ArenaError {}
