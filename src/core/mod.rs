pub mod constants;
pub mod input;
pub mod particles;
pub mod scramble;
pub mod scroll;
pub mod theme;

pub use particles::*;
pub use scramble::{render_html, TextScramble};
pub use scroll::*;
pub use theme::*;
