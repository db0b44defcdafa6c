//! The four cardinal positions of the ring.
//!
//! Each `Cardinal` names both a node (the point at its angle) and the edge
//! leaving that node counter-clockwise.  Cycle order is
//! `Bottom → Right → Top → Left → Bottom`.

use std::f64::consts::{FRAC_PI_2, PI};
use std::fmt;
use std::str::FromStr;

use crate::RingError;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Cardinal {
    Bottom,
    Right,
    Top,
    Left,
}

impl Cardinal {
    /// All four positions in cycle order.
    pub const ALL: [Cardinal; 4] = [Cardinal::Bottom, Cardinal::Right, Cardinal::Top, Cardinal::Left];

    /// Position in [`Cardinal::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Cardinal::Bottom => 0,
            Cardinal::Right  => 1,
            Cardinal::Top    => 2,
            Cardinal::Left   => 3,
        }
    }

    /// Lower-case name used for node and edge ids.
    pub fn name(self) -> &'static str {
        match self {
            Cardinal::Bottom => "bottom",
            Cardinal::Right  => "right",
            Cardinal::Top    => "top",
            Cardinal::Left   => "left",
        }
    }

    /// Capitalized name, as used in rerouter ids (`rerouterTop`).
    pub fn title(self) -> &'static str {
        match self {
            Cardinal::Bottom => "Bottom",
            Cardinal::Right  => "Right",
            Cardinal::Top    => "Top",
            Cardinal::Left   => "Left",
        }
    }

    /// Angle of this position's node, in radians.
    ///
    /// Left is reported as `π` so that the arc leaving it spans `[π, 3π/2]`.
    pub fn angle(self) -> f64 {
        match self {
            Cardinal::Bottom => -FRAC_PI_2,
            Cardinal::Right  => 0.0,
            Cardinal::Top    => FRAC_PI_2,
            Cardinal::Left   => PI,
        }
    }

    /// `(start, end)` angles of the quarter-arc edge leaving this node.
    #[inline]
    pub fn arc(self) -> (f64, f64) {
        let start = self.angle();
        (start, start + FRAC_PI_2)
    }

    /// The next position counter-clockwise.
    #[inline]
    pub fn next(self) -> Cardinal {
        Cardinal::ALL[(self.index() + 1) % 4]
    }

    /// The diametrically opposite position.
    #[inline]
    pub fn opposite(self) -> Cardinal {
        Cardinal::ALL[(self.index() + 2) % 4]
    }

    /// The four positions in cycle order starting at `self`.
    pub fn cycle_from(self) -> [Cardinal; 4] {
        let i = self.index();
        [
            Cardinal::ALL[i],
            Cardinal::ALL[(i + 1) % 4],
            Cardinal::ALL[(i + 2) % 4],
            Cardinal::ALL[(i + 3) % 4],
        ]
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Cardinal {
    type Err = RingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "bottom" => Ok(Cardinal::Bottom),
            "right"  => Ok(Cardinal::Right),
            "top"    => Ok(Cardinal::Top),
            "left"   => Ok(Cardinal::Left),
            other => Err(RingError::Parse(format!(
                "invalid ring position {other:?}: expected \"bottom\", \"right\", \"top\" or \"left\""
            ))),
        }
    }
}
