//! The [`Status`] of a single grid cell.

use std::fmt;

/// What occupies a cell. Start and End are traversable; Blocked is a wall.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    #[default]
    Open,
    Blocked,
    Start,
    End,
}

impl Status {
    /// Whether a search may step onto a cell with this status.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Blocked)
    }

    /// Layout character: `.` open, `#` blocked, `S` start, `E` end.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Self::Open => '.',
            Self::Blocked => '#',
            Self::Start => 'S',
            Self::End => 'E',
        }
    }

    /// Inverse of [`to_char`](Self::to_char).
    #[inline]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            '.' => Some(Self::Open),
            '#' => Some(Self::Blocked),
            'S' => Some(Self::Start),
            'E' => Some(Self::End),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Open => "open",
            Self::Blocked => "blocked",
            Self::Start => "start",
            Self::End => "end",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_blocked_is_impassable() {
        assert!(Status::Open.is_passable());
        assert!(Status::Start.is_passable());
        assert!(Status::End.is_passable());
        assert!(!Status::Blocked.is_passable());
    }

    #[test]
    fn chars() {
        for s in [Status::Open, Status::Blocked, Status::Start, Status::End] {
            assert_eq!(Status::from_char(s.to_char()), Some(s));
        }
        assert_eq!(Status::from_char('x'), None);
    }
}
