use core::fmt;

use sweeper_world::{Cell, Position};

/// Cardinal heading of the agent.
///
/// Canonical order is North, East, South, West; left/right rotation is
/// index arithmetic modulo 4, so exhaustiveness is checkable and there is
/// no angle-keyed lookup anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// All headings in canonical order. Every sweep over directions uses
    /// this order so tie-breaks are reproducible.
    pub const ALL: [Heading; 4] = [
        Heading::North,
        Heading::East,
        Heading::South,
        Heading::West,
    ];

    fn from_index(index: u8) -> Self {
        match index % 4 {
            0 => Heading::North,
            1 => Heading::East,
            2 => Heading::South,
            _ => Heading::West,
        }
    }

    pub fn left(self) -> Self {
        Self::from_index(self as u8 + 3)
    }

    pub fn right(self) -> Self {
        Self::from_index(self as u8 + 1)
    }

    /// Compass angle in degrees, for display only.
    pub fn angle_degrees(self) -> u16 {
        self as u16 * 90
    }

    /// Unit movement vector; North is +y.
    pub fn vector(self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    /// The position one step from `from` in this heading.
    pub fn step(self, from: Position) -> Position {
        let (dx, dy) = self.vector();
        from.offset(dx, dy)
    }

    /// Minimum number of 90-degree turns to face `target`.
    pub fn turns_to(self, target: Heading) -> u32 {
        let diff = (target as u8 + 4 - self as u8) % 4;
        u32::from(diff.min(4 - diff))
    }

    /// The height delta recorded on `cell` for a step in this heading.
    pub fn delta_of(self, cell: &Cell) -> i32 {
        match self {
            Heading::North => cell.delta_up,
            Heading::East => cell.delta_right,
            Heading::South => cell.delta_down,
            Heading::West => cell.delta_left,
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Heading::North => "north",
            Heading::East => "east",
            Heading::South => "south",
            Heading::West => "west",
        };
        f.write_str(name)
    }
}

/// A heading relative to the agent's current facing. The agent's sensors
/// cover forward, left, and right; there is no rear sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeHeading {
    Forward,
    Left,
    Right,
}

impl RelativeHeading {
    /// The three sensed headings, in sensing order.
    pub const SWEEP: [RelativeHeading; 3] = [
        RelativeHeading::Forward,
        RelativeHeading::Left,
        RelativeHeading::Right,
    ];

    /// Resolve against an absolute facing.
    pub fn resolve(self, facing: Heading) -> Heading {
        match self {
            RelativeHeading::Forward => facing,
            RelativeHeading::Left => facing.left(),
            RelativeHeading::Right => facing.right(),
        }
    }
}
