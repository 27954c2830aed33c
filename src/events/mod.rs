pub mod pointer;
pub mod scroll;

pub use pointer::{wire_cursor, wire_field_pointer, wire_hover_class, wire_orbs, wire_tilt_cards};
pub use scroll::{wire_anchors, wire_cube, wire_showcase};
