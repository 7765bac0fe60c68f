//! Box-drawing rendering of polysticks, top row first.

use std::fmt;

use super::polystick::Polystick;

const NORTH: u8 = 0b1000;
const EAST: u8 = 0b0100;
const SOUTH: u8 = 0b0010;
const WEST: u8 = 0b0001;

/// Glyph per arm bitmask `NESW`.
const GLYPHS: [char; 16] = [
    ' ', '╴', '╷', '┐', '╶', '─', '┌', '┬', '╵', '┘', '│', '┤', '└', '┴', '├', '┼',
];

/// The circle has no edges; it renders as a single ring.
const CIRCLE: char = '○';

impl Polystick {
    /// Rows of glyphs, one per lattice row from top to bottom.
    pub fn render_rows(&self) -> Vec<String> {
        let Some(((x0, y0), (x1, y1))) = self.bounds() else {
            return vec![CIRCLE.to_string()];
        };
        let width = (x1 - x0 + 1) as usize;
        let height = (y1 - y0 + 1) as usize;
        let mut arms = vec![0u8; width * height];
        let cell = |x: i32, y: i32| (y - y0) as usize * width + (x - x0) as usize;
        for e in self.edges() {
            let (t, h) = (e.tail(), e.head());
            if e.is_vertical() {
                arms[cell(t.x, t.y)] |= NORTH;
                arms[cell(h.x, h.y)] |= SOUTH;
            } else {
                arms[cell(t.x, t.y)] |= EAST;
                arms[cell(h.x, h.y)] |= WEST;
            }
        }
        arms.chunks(width)
            .rev()
            .map(|row| row.iter().map(|&m| GLYPHS[m as usize]).collect())
            .collect()
    }
}

impl fmt::Display for Polystick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.render_rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Edge;

    #[test]
    fn unit_square_renders_as_box() {
        let square = Polystick::from_edges([
            Edge::horizontal(0, 0),
            Edge::horizontal(0, 1),
            Edge::vertical(0, 0),
            Edge::vertical(1, 0),
        ]);
        assert_eq!(square.render_rows(), vec!["┌┐".to_string(), "└┘".to_string()]);
    }

    #[test]
    fn plus_sign_and_circle() {
        let plus = Polystick::from_edges([
            Edge::horizontal(-1, 0),
            Edge::horizontal(0, 0),
            Edge::vertical(0, -1),
            Edge::vertical(0, 0),
        ]);
        assert_eq!(plus.to_string(), " ╷ \n╶┼╴\n ╵ \n");
        assert_eq!(Polystick::empty().to_string(), "○\n");
    }
}
