//! Selection of the activity to relocate from a conflicting pair.

use crate::models::Activity;

/// Selects which of two conflicting activities must move.
///
/// 1. Different priorities: the lower-priority activity moves.
/// 2. Equal priorities: the activity with strictly longer instructions
///    moves; equal lengths select `b`.
///
/// Rule 2 moves the more detailed activity, not the less constrained one.
pub fn select_to_move<'a>(a: &'a Activity, b: &'a Activity) -> &'a Activity {
    if a.priority != b.priority {
        return if a.priority < b.priority { a } else { b };
    }
    if a.instructions.chars().count() > b.instructions.chars().count() {
        a
    } else {
        b
    }
}
