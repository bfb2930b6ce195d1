use std::str::FromStr;

use anyhow::{bail, ensure, Result};

use crate::{Move, State, BLANK, CELLS};

impl TryFrom<[u8; CELLS]> for State {
    type Error = anyhow::Error;

    fn try_from(tiles: [u8; CELLS]) -> Result<Self, Self::Error> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            ensure!(
                (tile as usize) < CELLS,
                "Invalid state: unknown tile {tile}"
            );
            ensure!(
                !std::mem::replace(&mut seen[tile as usize], true),
                "Invalid state: repeated tile {tile}"
            );
        }
        // Nine distinct values below nine cover every tile and the blank.
        Ok(State { tiles })
    }
}

impl FromStr for State {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let len = s.chars().count();
        ensure!(
            len == CELLS,
            "Invalid state {s:?}: expecting {CELLS} cells, got {len}"
        );
        ensure!(s.contains('_'), "Invalid state {s:?}: missing blank");

        let mut tiles = [BLANK; CELLS];
        for (slot, ch) in tiles.iter_mut().zip(s.chars()) {
            *slot = match ch {
                '_' => BLANK,
                '1'..='8' => ch as u8 - b'0',
                _ => bail!("Invalid state {s:?}: invalid cell {ch:?}"),
            };
        }
        State::try_from(tiles)
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "esquerda" | "left" | "L" => Move::Left,
            "direita" | "right" | "R" => Move::Right,
            "acima" | "up" | "U" => Move::Up,
            "abaixo" | "down" | "D" => Move::Down,
            _ => bail!("Invalid move: {s:?}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GOAL;

    #[test]
    fn parse_goal() {
        assert_eq!("12345678_".parse::<State>().unwrap(), GOAL);
        assert_eq!(" 12345678_\n".parse::<State>().unwrap(), GOAL);
    }

    #[test]
    fn reject_malformed() {
        for (input, msg) in [
            ("1234567_", "expecting 9 cells"),
            ("12345678_9", "expecting 9 cells"),
            ("123456789", "missing blank"),
            ("1234567__", "repeated tile 0"),
            ("1234567x_", "invalid cell 'x'"),
            ("12345671_", "repeated tile 1"),
        ] {
            let err = input.parse::<State>().unwrap_err().to_string();
            assert!(err.starts_with("Invalid state"), "{input}: {err}");
            assert!(err.contains(msg), "{input}: {err}");
        }
        assert!(State::try_from([9, 1, 2, 3, 4, 5, 6, 7, 0]).is_err());
    }

    #[test]
    fn parse_moves() {
        for dir in Move::ALL {
            assert_eq!(dir.label().parse::<Move>().unwrap(), dir);
        }
        assert_eq!("U".parse::<Move>().unwrap(), Move::Up);
        assert_eq!("down".parse::<Move>().unwrap(), Move::Down);
        assert!("north".parse::<Move>().is_err());
    }
}
