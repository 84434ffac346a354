use std::{fmt::Display, ops::Index};

use itertools::Itertools;
use log::{debug, trace};
use thiserror::Error;

use crate::{
    axis::Axis,
    face::{Face, FaceName, Sticker},
    render::{self, Layout},
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("A cube must have a positive side length, got {0}")]
    InvalidDimension(isize),
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(OutOfBounds),
    #[error("There are only three axes (UD, LR, FB), got {0}")]
    InvalidAxis(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OutOfBounds {
    #[error("sticker ({row}, {col}) does not exist on a {n}x{n} face")]
    Sticker { row: usize, col: usize, n: usize },
    #[error("layer {layer} does not exist on a cube of side {n}")]
    Layer { layer: isize, n: usize },
}

/// A layer index resolved against the side length of a cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layer {
    /// The row or column the layer selects on each belt face.
    pub(crate) index: usize,
    /// Which of the axis's polar faces the layer touches, if any.
    pub(crate) pole: Option<usize>,
}

impl Layer {
    pub(crate) fn resolve(layer: isize, n: usize) -> Result<Layer, CubeError> {
        let signed_n = n as isize;
        if layer < -signed_n || layer >= signed_n {
            return Err(CubeError::IndexOutOfBounds(OutOfBounds::Layer { layer, n }));
        }

        // With n = 1 the only layer touches both poles; the first one wins.
        let pole = if layer == 0 || layer == -signed_n {
            Some(0)
        } else if layer == -1 || layer == signed_n - 1 {
            Some(1)
        } else {
            None
        };

        let index = if layer < 0 { layer + signed_n } else { layer };

        Ok(Layer {
            index: index as usize,
            pole,
        })
    }
}

/// An `NxN` cube. Face `i` of a fresh cube is filled with the sticker `i`.
///
/// All mutation goes through `&mut self`; to share a cube between threads put the whole cube
/// behind a single lock, since every rotation touches five faces at once.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cube {
    n: usize,
    faces: [Face; 6],
}

impl Cube {
    /// Create a cube of side length `n` in the solved state.
    ///
    /// # Errors
    ///
    /// If `n` is not positive, or so large that a face's sticker count overflows a `usize`
    pub fn new(n: isize) -> Result<Cube, CubeError> {
        let Ok(side) = usize::try_from(n) else {
            return Err(CubeError::InvalidDimension(n));
        };
        if side == 0 || side.checked_mul(side).is_none() {
            return Err(CubeError::InvalidDimension(n));
        }

        debug!("Creating a {side}x{side} cube");

        Ok(Cube {
            n: side,
            faces: FaceName::ALL.map(|name| Face::filled(side, name as Sticker)),
        })
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    #[must_use]
    pub fn face(&self, face: FaceName) -> &Face {
        &self.faces[face as usize]
    }

    fn face_mut(&mut self, face: FaceName) -> &mut Face {
        &mut self.faces[face as usize]
    }

    /// The faces in enumeration order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceName, &Face)> {
        FaceName::ALL.into_iter().zip(self.faces.iter())
    }

    /// Every sticker of the cube, face by face in enumeration order and row-major within a face.
    pub fn stickers(&self) -> impl Iterator<Item = Sticker> + '_ {
        self.faces
            .iter()
            .flat_map(|face| face.stickers().iter().copied())
    }

    /// Read a single sticker.
    ///
    /// # Errors
    ///
    /// If `row` or `col` is not below the side length of the cube
    pub fn get(&self, face: FaceName, row: usize, col: usize) -> Result<Sticker, CubeError> {
        self.face(face).get(row, col)
    }

    /// Overwrite a single sticker.
    ///
    /// # Errors
    ///
    /// If `row` or `col` is not below the side length of the cube
    pub fn set(
        &mut self,
        face: FaceName,
        row: usize,
        col: usize,
        sticker: Sticker,
    ) -> Result<(), CubeError> {
        self.face_mut(face).set(row, col, sticker)
    }

    /// Whether every face shows a single label.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(Face::is_uniform)
    }

    /// Turn a layer about `axis` by `amount` clockwise quarter turns. Negative amounts turn
    /// counter-clockwise.
    ///
    /// Layers are numbered from the first polar face of the axis, so layer `0` on
    /// [`Axis::UpDown`] is the top layer. Negative indices count from the second polar face:
    /// `-1` is the same layer as `n - 1`.
    ///
    /// # Errors
    ///
    /// If `layer_index` is outside of `-n..n`. The cube is left untouched.
    pub fn rotate(
        &mut self,
        axis: Axis,
        layer_index: isize,
        amount: i32,
    ) -> Result<(), CubeError> {
        let layer = Layer::resolve(layer_index, self.n)?;
        self.rotate_resolved(axis, layer, amount);
        Ok(())
    }

    pub(crate) fn rotate_resolved(&mut self, axis: Axis, layer: Layer, amount: i32) {
        let def = axis.def();
        let quarter_turns = amount.rem_euclid(4);

        trace!(
            "Turning {axis} layer {} by {quarter_turns} quarter turns",
            layer.index
        );

        if let Some(pole) = layer.pole {
            let polar = def.polar[pole];
            trace!("Spinning the {polar} face");
            // Turns are clockwise positive but the grid primitive is counter-clockwise positive
            self.face_mut(polar).rotate_counter_clockwise(-quarter_turns);
        }

        let strips = def
            .belt
            .iter()
            .map(|strip| self.face(strip.face).line(strip.line, layer.index))
            .collect_vec();

        let shift = quarter_turns as usize;
        for (i, strip) in def.belt.iter().enumerate() {
            let incoming = &strips[(i + 4 - shift) % 4];
            self.face_mut(strip.face)
                .write_line(strip.line, layer.index, incoming);
        }
    }

    /// Turn a layer about the up-down axis. `(0, 1)` is a clockwise turn of the top face.
    ///
    /// # Errors
    ///
    /// See [`Cube::rotate`]
    pub fn rotate_up_down(&mut self, layer_index: isize, amount: i32) -> Result<(), CubeError> {
        self.rotate(Axis::UpDown, layer_index, amount)
    }

    /// Turn a layer about the left-right axis. `(0, 1)` is a clockwise turn of the left face.
    ///
    /// # Errors
    ///
    /// See [`Cube::rotate`]
    pub fn rotate_left_right(&mut self, layer_index: isize, amount: i32) -> Result<(), CubeError> {
        self.rotate(Axis::LeftRight, layer_index, amount)
    }

    /// Turn a layer about the front-back axis. `(0, 1)` is a clockwise turn of the front face.
    ///
    /// # Errors
    ///
    /// See [`Cube::rotate`]
    pub fn rotate_front_back(&mut self, layer_index: isize, amount: i32) -> Result<(), CubeError> {
        self.rotate(Axis::FrontBack, layer_index, amount)
    }

    /// List every face with its grid, see [`Layout::List`].
    #[must_use]
    pub fn render(&self) -> String {
        render::render(self, Layout::List, |_, text| text.to_owned())
    }

    /// Draw the cube unfolded, see [`Layout::Net`].
    #[must_use]
    pub fn render_net(&self) -> String {
        render::render(self, Layout::Net, |_, text| text.to_owned())
    }
}

impl Index<FaceName> for Cube {
    type Output = Face;

    fn index(&self, index: FaceName) -> &Self::Output {
        self.face(index)
    }
}

impl Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
