//! Axis roles of path command arguments.
//!
//! Translation only touches arguments that actually carry a coordinate, so
//! each eligible command maps to a fixed role sequence, indexed cyclically
//! over however many arguments the command carries.

/// What a single path-command argument represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// An x-axis coordinate, shifted by dx.
    X,
    /// A y-axis coordinate, shifted by dy.
    Y,
    /// A non-positional value (radius, rotation, flag); never shifted.
    Other,
}

/// Role sequence for a command letter, or `None` when the command is not
/// translation-eligible and must be re-emitted untouched.
///
/// Only absolute commands with defined translation semantics have entries.
/// Relative commands are untouched on purpose (interior relative segments are
/// translation-invariant). `Q`, `S` and `Z` have no entries either, matching
/// long-standing behavior even though absolute `Q`/`S` do carry coordinates.
pub fn roles_for(letter: char) -> Option<&'static [Role]> {
    use Role::*;
    Some(match letter {
        'M' | 'L' | 'T' => &[X, Y],
        'H' => &[X],
        'V' => &[Y],
        'C' => &[X, Y, X, Y, X, Y],
        // radii, rotation and the two flags come before the endpoint
        'A' => &[Other, Other, Other, Other, Other, X, Y],
        _ => return None,
    })
}
