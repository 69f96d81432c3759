//! Basic types for the slanted hexagon grid that the game board lives on.
//!
//! ## Board Coordinates
//!
//! The board is addressed with a two-component axial coordinate `(x, y)`.
//! Both components are integers, and unlike the usual Cartesian pair the two
//! axes are *not* perpendicular: `+x` points east and `+y` points northwest
//! at a 120° angle from `+x`. The payoff of slanting the second axis is that
//! all six hexagonal neighbors of a cell are reachable by adding one of six
//! unit vectors (`(1, 0)`, `(0, 1)`, `(1, 1)` and their negations), so
//! every piece of
//! motion math in the crate is plain integer vector addition. No fractional
//! coordinates, no three-component cube bookkeeping.
//!
//! The same type, [AxialPoint], is used for positions *and* velocities. A
//! velocity is just a per-turn displacement, and displacing a position is
//! `position + velocity`.
//!
//! ## Directions
//!
//! [Direction] enumerates the six compass directions a ship can accelerate
//! in, plus the null direction (no acceleration). The six compass variants
//! form a closed cycle in 60° steps; rotation and inversion are derived from
//! offsets into one canonical clockwise table rather than per-variant
//! arithmetic.
//!
//! ## Screen Coordinates
//!
//! Rendering collaborators work in conventional Cartesian screen space:
//!
//! +-------------------+
//! |        +y         |
//! |         ^         |
//! |         |         |
//! | -x <----o----> +x |
//! |         |         |
//! |         v         |
//! |        -y         |
//! +-------------------+
//!
//! [AxialPoint::to_screen_space] un-slants the `y` axis to produce a
//! [Point2](crate::Point2) with unit cell spacing. The core never renders
//! anything itself; the conversion exists so guidance markers can be placed
//! by whatever does.

mod data_structure;
mod unit;

pub use self::{data_structure::*, unit::*};
