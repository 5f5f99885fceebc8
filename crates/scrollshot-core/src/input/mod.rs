mod combination;
mod key;
mod matcher;
mod recorder;
mod scroll;
mod state;

pub use {
    combination::{CombinationSpec, ShiftMode},
    key::{KeyCode, ParseKeyError},
    matcher::CombinationMatcher,
    recorder::CombinationRecorder,
    scroll::ScrollAccumulator,
    state::PressedKeys,
};
