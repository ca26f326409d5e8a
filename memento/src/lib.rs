//! # memento
//!
//! Capture and restore the contents of a [`TextBox`]. A [`Snapshot`] is an immutable copy of the
//! text at one moment; a [`Caretaker`] keeps the most recent one for later restoration.

mod caretaker;
mod snapshot;
mod text_box;

pub use caretaker::Caretaker;
pub use snapshot::Snapshot;
pub use text_box::TextBox;
