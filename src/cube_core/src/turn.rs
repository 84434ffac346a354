use std::fmt::Display;

use itertools::Itertools;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    Axis, Cube, CubeError,
    cube::Layer,
};

fn one() -> i32 {
    1
}

/// A single layer turn: the arguments of one [`Cube::rotate`] call.
///
/// Omitted fields default to a clockwise quarter turn of the first outer layer, which is a
/// standard face turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub axis: Axis,
    #[serde(default)]
    pub layer: isize,
    #[serde(default = "one")]
    pub amount: i32,
}

impl Turn {
    #[must_use]
    pub fn new(axis: Axis) -> Turn {
        Turn {
            axis,
            layer: 0,
            amount: 1,
        }
    }

    #[must_use]
    pub fn up_down() -> Turn {
        Turn::new(Axis::UpDown)
    }

    #[must_use]
    pub fn left_right() -> Turn {
        Turn::new(Axis::LeftRight)
    }

    #[must_use]
    pub fn front_back() -> Turn {
        Turn::new(Axis::FrontBack)
    }

    #[must_use]
    pub fn with_layer(self, layer: isize) -> Turn {
        Turn { layer, ..self }
    }

    #[must_use]
    pub fn with_amount(self, amount: i32) -> Turn {
        Turn { amount, ..self }
    }

    #[must_use]
    pub fn inverse(self) -> Turn {
        Turn {
            amount: -self.amount,
            ..self
        }
    }

    /// The amount as clockwise quarter turns in `0..4`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn quarter_turns(self) -> u8 {
        self.amount.rem_euclid(4) as u8
    }
}

impl Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]{:+}", self.axis, self.layer, self.amount)
    }
}

/// The sequence that undoes `turns`.
#[must_use]
pub fn invert_sequence(turns: &[Turn]) -> Vec<Turn> {
    turns.iter().rev().map(|turn| turn.inverse()).collect_vec()
}

impl Cube {
    /// Perform a single turn.
    ///
    /// # Errors
    ///
    /// See [`Cube::rotate`]
    pub fn apply(&mut self, turn: Turn) -> Result<(), CubeError> {
        self.rotate(turn.axis, turn.layer, turn.amount)
    }

    /// Perform every turn in order. All layers are validated before anything is turned so a
    /// rejected sequence leaves the cube untouched.
    ///
    /// # Errors
    ///
    /// If any turn names a layer outside of `-n..n`
    pub fn apply_all(&mut self, turns: &[Turn]) -> Result<(), CubeError> {
        let layers = turns
            .iter()
            .map(|turn| Layer::resolve(turn.layer, self.n()))
            .collect::<Result<Vec<_>, _>>()?;

        debug!("Applying {}", turns.iter().join(" "));

        for (turn, layer) in turns.iter().zip(layers) {
            self.rotate_resolved(turn.axis, layer, turn.amount);
        }

        Ok(())
    }
}
