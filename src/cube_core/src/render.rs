//! Text renderings of a cube, for diagnostics.

use itertools::Itertools;

use crate::{Cube, FaceName, Sticker};

const GAP: &str = "  ";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Layout {
    /// Every face name followed by its grid, in enumeration order.
    #[default]
    List,
    /// The cube unfolded into a cross:
    ///
    /// ```text
    ///       top
    /// left  front right back
    ///       bottom
    /// ```
    Net,
}

/// Render `cube` in the given layout. `paint` receives every sticker together with its text,
/// already padded to the common column width, and returns what to print in its place.
pub fn render<F: Fn(Sticker, &str) -> String>(cube: &Cube, layout: Layout, paint: F) -> String {
    let width = cube
        .stickers()
        .map(|sticker| sticker.to_string().len())
        .max()
        .unwrap_or(1);

    let row = |face: FaceName, row: usize| {
        cube[face]
            .rows()
            .nth(row)
            .into_iter()
            .flatten()
            .map(|&sticker| paint(sticker, &format!("{sticker:>width$}")))
            .join(" ")
    };

    let n = cube.n();

    match layout {
        Layout::List => FaceName::ALL
            .iter()
            .flat_map(|&face| {
                std::iter::once(format!("{face}:")).chain((0..n).map(move |i| row(face, i)))
            })
            .join("\n"),
        Layout::Net => {
            let indent = " ".repeat(n * width + n - 1) + GAP;
            let middle = [
                FaceName::Left,
                FaceName::Front,
                FaceName::Right,
                FaceName::Back,
            ];

            (0..n)
                .map(|i| format!("{indent}{}", row(FaceName::Top, i)))
                .chain((0..n).map(|i| middle.iter().map(|&face| row(face, i)).join(GAP)))
                .chain((0..n).map(|i| format!("{indent}{}", row(FaceName::Bottom, i))))
                .join("\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list() {
        let mut cube = Cube::new(2).unwrap();
        cube.set(FaceName::Left, 0, 1, 10).unwrap();

        assert_eq!(
            cube.render(),
            [
                "top:", " 0  0", " 0  0", "front:", " 1  1", " 1  1", "left:", " 2 10", " 2  2",
                "right:", " 3  3", " 3  3", "back:", " 4  4", " 4  4", "bottom:", " 5  5",
                " 5  5",
            ]
            .join("\n")
        );
        assert_eq!(cube.to_string(), cube.render());
    }

    #[test]
    fn net() {
        let cube = Cube::new(1).unwrap();
        assert_eq!(cube.render_net(), "   0\n2  1  3  4\n   5");

        let cube = Cube::new(2).unwrap();
        assert_eq!(
            cube.render_net(),
            [
                "     0 0",
                "     0 0",
                "2 2  1 1  3 3  4 4",
                "2 2  1 1  3 3  4 4",
                "     5 5",
                "     5 5",
            ]
            .join("\n")
        );
    }

    #[test]
    fn paint_sees_padded_text() {
        let mut cube = Cube::new(1).unwrap();
        cube.set(FaceName::Top, 0, 0, 100).unwrap();

        let painted = render(&cube, Layout::List, |sticker, text| {
            if sticker == 100 {
                format!("<{text}>")
            } else {
                format!("[{text}]")
            }
        });

        assert!(painted.starts_with("top:\n<100>\nfront:\n[  1]"));
    }
}
