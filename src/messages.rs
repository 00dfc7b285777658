//! App messages - selection events flowing from the entry list to the
//! display views.

use bevy::prelude::Message;

/// One user interaction with an entry row (click anywhere in the row,
/// or keyboard navigation). Written exactly once per interaction -
/// reselecting the same row sends a fresh message, nothing is coalesced.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectLayoutMsg {
    pub index: usize,
}
