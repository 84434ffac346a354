//! State and layer rotations of an `NxN` Rubik's Cube.
//!
//! A [`Cube`] owns six square [`Face`]s of integer stickers. Turning a layer about one of the
//! three [`Axis`] values spins the polar face touched by that layer (if any) and cycles the four
//! strips of the belt around it. Rotations only ever permute stickers.

#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

pub mod axis;
pub mod cube;
pub mod face;
pub mod render;
pub mod turn;

pub use axis::{Axis, AxisDef, BeltStrip, Line};
pub use cube::{Cube, CubeError, OutOfBounds};
pub use face::{Face, FaceName, Sticker};
pub use turn::{Turn, invert_sequence};
