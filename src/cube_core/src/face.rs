use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::{
    axis::Line,
    cube::{CubeError, OutOfBounds},
};

/// The label of a single sticker. A fresh cube labels every sticker with its face's index.
pub type Sticker = i32;

/// The six faces of the cube. The discriminant is the index of the face in a [`crate::Cube`]
/// and the sticker label a fresh cube fills it with.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceName {
    Top = 0,
    Front = 1,
    Left = 2,
    Right = 3,
    Back = 4,
    Bottom = 5,
}

impl FaceName {
    #[allow(clippy::enum_glob_use)]
    pub const ALL: [Self; 6] = {
        use FaceName::*;
        let v = [Top, Front, Left, Right, Back, Bottom];

        let mut i = 0;
        while i < v.len() {
            assert!(i == v[i] as usize);
            i += 1;
        }

        v
    };

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FaceName::Top => "top",
            FaceName::Front => "front",
            FaceName::Left => "left",
            FaceName::Right => "right",
            FaceName::Back => "back",
            FaceName::Bottom => "bottom",
        }
    }
}

impl Display for FaceName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An `NxN` grid of stickers stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Face {
    n: usize,
    stickers: Box<[Sticker]>,
}

impl Face {
    /// A face of side `n` with every sticker set to `sticker`. `n` must be positive and its
    /// square must fit in a `usize`; [`crate::Cube::new`] checks both.
    pub(crate) fn filled(n: usize, sticker: Sticker) -> Face {
        debug_assert!(n > 0);
        Face {
            n,
            stickers: vec![sticker; n * n].into_boxed_slice(),
        }
    }

    #[must_use]
    pub fn n(&self) -> usize {
        self.n
    }

    fn offset(&self, row: usize, col: usize) -> Result<usize, CubeError> {
        if row >= self.n || col >= self.n {
            return Err(CubeError::IndexOutOfBounds(OutOfBounds::Sticker {
                row,
                col,
                n: self.n,
            }));
        }

        Ok(row * self.n + col)
    }

    /// Read the sticker at `(row, col)`.
    ///
    /// # Errors
    ///
    /// If `row` or `col` is not below the side length of the face
    pub fn get(&self, row: usize, col: usize) -> Result<Sticker, CubeError> {
        self.offset(row, col).map(|i| self.stickers[i])
    }

    /// Overwrite the sticker at `(row, col)`.
    ///
    /// # Errors
    ///
    /// If `row` or `col` is not below the side length of the face
    pub fn set(&mut self, row: usize, col: usize, sticker: Sticker) -> Result<(), CubeError> {
        let i = self.offset(row, col)?;
        self.stickers[i] = sticker;
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Sticker]> {
        self.stickers.chunks_exact(self.n)
    }

    #[must_use]
    pub fn stickers(&self) -> &[Sticker] {
        &self.stickers
    }

    #[must_use]
    pub fn is_uniform(&self) -> bool {
        self.stickers.iter().all(|&s| s == self.stickers[0])
    }

    /// Copy out the row or column at `index`, left to right or top to bottom.
    ///
    /// `index` must already be validated against `n`.
    pub(crate) fn line(&self, line: Line, index: usize) -> Vec<Sticker> {
        match line {
            Line::Row => self.stickers[index * self.n..(index + 1) * self.n].to_vec(),
            Line::Column => self
                .stickers
                .iter()
                .skip(index)
                .step_by(self.n)
                .copied()
                .collect(),
        }
    }

    /// Overwrite the row or column at `index` with `strip`, in the same orientation `line`
    /// reads it.
    pub(crate) fn write_line(&mut self, line: Line, index: usize, strip: &[Sticker]) {
        debug_assert_eq!(strip.len(), self.n);

        match line {
            Line::Row => {
                self.stickers[index * self.n..(index + 1) * self.n].copy_from_slice(strip);
            }
            Line::Column => {
                for (cell, &sticker) in self
                    .stickers
                    .iter_mut()
                    .skip(index)
                    .step_by(self.n)
                    .zip(strip)
                {
                    *cell = sticker;
                }
            }
        }
    }

    /// Rotate the grid in place by a number of quarter turns, counter-clockwise positive.
    ///
    /// Any integer is accepted; four quarter turns are the identity.
    pub fn rotate_counter_clockwise(&mut self, quarter_turns: i32) {
        let n = self.n;
        let turns = quarter_turns.rem_euclid(4);
        if turns == 0 {
            return;
        }

        let source = self.stickers.clone();

        for row in 0..n {
            for col in 0..n {
                let (src_row, src_col) = match turns {
                    1 => (col, n - 1 - row),
                    2 => (n - 1 - row, n - 1 - col),
                    _ => (n - 1 - col, row),
                };
                self.stickers[row * n + col] = source[src_row * n + src_col];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    fn numbered(n: usize) -> Face {
        let mut face = Face::filled(n, 0);
        for row in 0..n {
            for col in 0..n {
                face.set(row, col, (row * n + col) as Sticker).unwrap();
            }
        }
        face
    }

    fn rows(face: &Face) -> Vec<Vec<Sticker>> {
        face.rows().map(<[Sticker]>::to_vec).collect_vec()
    }

    #[test]
    fn face_name_order() {
        assert_eq!(
            FaceName::ALL.iter().map(|f| f.to_string()).join(" "),
            "top front left right back bottom"
        );
    }

    #[test]
    fn counter_clockwise_quarter_turn() {
        let mut face = numbered(2);
        face.rotate_counter_clockwise(1);
        assert_eq!(rows(&face), vec![vec![1, 3], vec![0, 2]]);
    }

    #[test]
    fn clockwise_is_negative() {
        let mut face = numbered(3);
        face.rotate_counter_clockwise(-1);
        assert_eq!(
            rows(&face),
            vec![vec![6, 3, 0], vec![7, 4, 1], vec![8, 5, 2]]
        );

        let mut three_ccw = numbered(3);
        three_ccw.rotate_counter_clockwise(3);
        assert_eq!(face, three_ccw);
    }

    #[test]
    fn half_turn_and_identity() {
        let mut face = numbered(3);
        face.rotate_counter_clockwise(2);
        assert_eq!(
            rows(&face),
            vec![vec![8, 7, 6], vec![5, 4, 3], vec![2, 1, 0]]
        );

        for turns in [4, -4, 8, 0] {
            let mut face = numbered(4);
            face.rotate_counter_clockwise(turns);
            assert_eq!(face, numbered(4));
        }
    }

    #[test]
    fn lines() {
        let mut face = numbered(3);
        assert_eq!(face.line(Line::Row, 1), vec![3, 4, 5]);
        assert_eq!(face.line(Line::Column, 2), vec![2, 5, 8]);

        face.write_line(Line::Column, 0, &[20, 21, 22]);
        assert_eq!(
            rows(&face),
            vec![vec![20, 1, 2], vec![21, 4, 5], vec![22, 7, 8]]
        );

        face.write_line(Line::Row, 2, &[30, 31, 32]);
        assert_eq!(face.line(Line::Row, 2), vec![30, 31, 32]);
        assert_eq!(face.line(Line::Column, 0), vec![20, 21, 30]);
    }

    #[test]
    fn out_of_bounds() {
        let mut face = Face::filled(2, 7);
        assert!(matches!(
            face.get(2, 0),
            Err(CubeError::IndexOutOfBounds(OutOfBounds::Sticker {
                row: 2,
                col: 0,
                n: 2
            }))
        ));
        assert!(face.set(0, 5, 1).is_err());
        assert!(face.is_uniform());
        face.set(1, 1, 3).unwrap();
        assert!(!face.is_uniform());
    }
}
