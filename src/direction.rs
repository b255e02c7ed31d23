//! The eight straight-line directions a word can run in.
//!
//! [`Direction::PROBE_ORDER`] fixes the order anchors are probed in. The
//! classic locator lets the *last* matching neighbor in this order win, so the
//! order is observable in results and must not be changed.

use std::fmt;

/// A step vector through the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    UpRight,
    UpLeft,
    DownRight,
    DownLeft,
}

/// Which set of names to print directions with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// `Right`, `Left`, `Down`, `Up`, `Up-Right`, ...
    #[default]
    Compass,
    /// The historical tool's wording: `Forward`, `Backwards`, `Down`, `Upwards`, ...
    Classic,
}

impl Direction {
    /// Neighbor probe order at an anchor cell.
    pub const PROBE_ORDER: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::UpRight,
        Direction::UpLeft,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// `(Δrow, Δcol)` for one step.
    #[must_use]
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        self.label_in(LabelStyle::Compass)
    }

    #[must_use]
    pub fn label_in(self, style: LabelStyle) -> &'static str {
        match (self, style) {
            (Direction::Right, LabelStyle::Compass) => "Right",
            (Direction::Right, LabelStyle::Classic) => "Forward",
            (Direction::Left, LabelStyle::Compass) => "Left",
            (Direction::Left, LabelStyle::Classic) => "Backwards",
            (Direction::Down, _) => "Down",
            (Direction::Up, LabelStyle::Compass) => "Up",
            (Direction::Up, LabelStyle::Classic) => "Upwards",
            (Direction::UpRight, _) => "Up-Right",
            (Direction::UpLeft, _) => "Up-Left",
            (Direction::DownRight, _) => "Down-Right",
            (Direction::DownLeft, _) => "Down-Left",
        }
    }

    /// The cell `steps` steps away from `(row, col)`, or `None` once it leaves a `size`x`size` grid.
    #[must_use]
    pub fn step_from(self, row: usize, col: usize, steps: usize, size: usize) -> Option<(usize, usize)> {
        let (d_row, d_col) = self.delta();
        let steps = isize::try_from(steps).ok()?;
        let r = isize::try_from(row).ok()?.checked_add(d_row.checked_mul(steps)?)?;
        let c = isize::try_from(col).ok()?.checked_add(d_col.checked_mul(steps)?)?;
        let r = usize::try_from(r).ok()?;
        let c = usize::try_from(c).ok()?;
        (r < size && c < size).then_some((r, c))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
