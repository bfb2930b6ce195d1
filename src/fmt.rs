use std::fmt::{self, Display};

use crate::{Move, OutOfBoard, State, BLANK, SIDE};

/// `12345678_` normally, a 3x3 grid with `{:#}`.
impl Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grid = f.alternate();
        for (pos, tile) in self.cells() {
            if tile == BLANK {
                "_".fmt(f)?;
            } else {
                tile.fmt(f)?;
            }
            if grid && pos.col() + 1 == SIDE {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label().fmt(f)
    }
}

impl Display for OutOfBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        "Move leaves the board".fmt(f)
    }
}

impl std::error::Error for OutOfBoard {}
