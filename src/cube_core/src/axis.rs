use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CubeError, FaceName};

/// The three axes a layer can be turned about.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    #[serde(alias = "ud", alias = "up_down")]
    UpDown = 0,
    #[serde(alias = "lr", alias = "left_right")]
    LeftRight = 1,
    #[serde(alias = "fb", alias = "front_back")]
    FrontBack = 2,
}

/// Which line of a face a layer index selects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Line {
    Row,
    Column,
}

/// One face of an axis's belt together with the line of that face the layer index selects.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct BeltStrip {
    pub face: FaceName,
    pub line: Line,
}

/// The faces an axis touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisDef {
    /// The faces perpendicular to the axis. Layer `0` touches the first, layer `n - 1` the
    /// second.
    pub polar: [FaceName; 2],
    /// The faces parallel to the axis in the order a clockwise quarter turn carries strips
    /// along: strip `i` moves to belt position `i + 1`.
    pub belt: [BeltStrip; 4],
}

const fn strip(face: FaceName, line: Line) -> BeltStrip {
    BeltStrip { face, line }
}

/// Indexed by `Axis as usize`.
#[allow(clippy::enum_glob_use)]
pub static AXIS_DEFS: [AxisDef; 3] = {
    use FaceName::*;
    use Line::*;

    [
        AxisDef {
            polar: [Top, Bottom],
            belt: [
                strip(Front, Row),
                strip(Left, Row),
                strip(Back, Row),
                strip(Right, Row),
            ],
        },
        AxisDef {
            polar: [Left, Right],
            belt: [
                strip(Top, Column),
                strip(Back, Column),
                strip(Bottom, Column),
                strip(Front, Column),
            ],
        },
        AxisDef {
            polar: [Front, Back],
            belt: [
                strip(Top, Row),
                strip(Right, Column),
                strip(Bottom, Row),
                strip(Left, Column),
            ],
        },
    ]
};

impl Axis {
    #[allow(clippy::enum_glob_use)]
    pub const ALL: [Self; 3] = {
        use Axis::*;
        let v = [UpDown, LeftRight, FrontBack];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub fn def(self) -> &'static AxisDef {
        &AXIS_DEFS[self as usize]
    }

    #[must_use]
    pub fn polar_faces(self) -> [FaceName; 2] {
        self.def().polar
    }

    #[must_use]
    pub fn belt(self) -> &'static [BeltStrip; 4] {
        &self.def().belt
    }

    #[must_use]
    pub fn short_name(self) -> &'static str {
        match self {
            Axis::UpDown => "UD",
            Axis::LeftRight => "LR",
            Axis::FrontBack => "FB",
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

impl TryFrom<i64> for Axis {
    type Error = CubeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .ok()
            .and_then(|i| Axis::ALL.get(i).copied())
            .ok_or_else(|| CubeError::InvalidAxis(value.to_string()))
    }
}

impl FromStr for Axis {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ud" | "updown" | "up_down" | "up-down" => Ok(Axis::UpDown),
            "lr" | "leftright" | "left_right" | "left-right" => Ok(Axis::LeftRight),
            "fb" | "frontback" | "front_back" | "front-back" => Ok(Axis::FrontBack),
            _ => Err(CubeError::InvalidAxis(s.to_owned())),
        }
    }
}
