//! Piece-relative movement directions and reach values.
//!
//! Directions are expressed from the moving piece's own side of the board:
//! "forward" is towards the opponent for both colors. A profile authored once
//! therefore applies unchanged to White and Black.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight linear directions, or the knight's jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum MoveDirection {
    Forward = 0,
    Backward = 1,
    Left = 2,
    Right = 3,
    ForwardLeftDiag = 4,
    ForwardRightDiag = 5,
    BackwardLeftDiag = 6,
    BackwardRightDiag = 7,
    LShape = 8,
}

impl MoveDirection {
    /// Every direction, linear ones first.
    pub const ALL: [MoveDirection; 9] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
        MoveDirection::ForwardLeftDiag,
        MoveDirection::ForwardRightDiag,
        MoveDirection::BackwardLeftDiag,
        MoveDirection::BackwardRightDiag,
        MoveDirection::LShape,
    ];

    /// The four diagonals.
    pub const DIAGONALS: [MoveDirection; 4] = [
        MoveDirection::ForwardLeftDiag,
        MoveDirection::ForwardRightDiag,
        MoveDirection::BackwardLeftDiag,
        MoveDirection::BackwardRightDiag,
    ];

    /// The four rank/file directions.
    pub const ORTHOGONALS: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// Returns the index of this direction (0-8).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns true for the four diagonal directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            MoveDirection::ForwardLeftDiag
                | MoveDirection::ForwardRightDiag
                | MoveDirection::BackwardLeftDiag
                | MoveDirection::BackwardRightDiag
        )
    }

    /// Unit step as seen by the piece: (towards its right, towards its front).
    const fn relative_step(self) -> Option<(i8, i8)> {
        match self {
            MoveDirection::Forward => Some((0, 1)),
            MoveDirection::Backward => Some((0, -1)),
            MoveDirection::Left => Some((-1, 0)),
            MoveDirection::Right => Some((1, 0)),
            MoveDirection::ForwardLeftDiag => Some((-1, 1)),
            MoveDirection::ForwardRightDiag => Some((1, 1)),
            MoveDirection::BackwardLeftDiag => Some((-1, -1)),
            MoveDirection::BackwardRightDiag => Some((1, -1)),
            MoveDirection::LShape => None,
        }
    }

    /// Absolute board step (file delta, rank delta) for a piece of `color`.
    ///
    /// Returns `None` for [`MoveDirection::LShape`], which has no single step.
    pub const fn step(self, color: Color) -> Option<(i8, i8)> {
        let sign = color.forward_sign();
        match self.relative_step() {
            Some((f, r)) => Some((f * sign, r * sign)),
            None => None,
        }
    }

    /// Classifies an absolute board displacement for a piece of `color`.
    ///
    /// Returns the single direction explaining the displacement together with
    /// the number of squares travelled, or `None` if the delta is zero or not a
    /// multiple of any unit direction. Knight offsets report one step.
    /// Deltas larger than the board (outside -7..=7) are never explained.
    pub fn from_delta(
        color: Color,
        file_delta: i8,
        rank_delta: i8,
    ) -> Option<(MoveDirection, u8)> {
        let (abs_f, abs_r) = (file_delta.unsigned_abs(), rank_delta.unsigned_abs());
        if abs_f > 7 || abs_r > 7 {
            return None;
        }
        if matches!((abs_f, abs_r), (1, 2) | (2, 1)) {
            return Some((MoveDirection::LShape, 1));
        }

        let sign = color.forward_sign();
        let (right, front) = (file_delta * sign, rank_delta * sign);

        let direction = match (right.signum(), front.signum()) {
            (0, 0) => return None,
            (0, 1) => MoveDirection::Forward,
            (0, -1) => MoveDirection::Backward,
            (-1, 0) => MoveDirection::Left,
            (1, 0) => MoveDirection::Right,
            _ if abs_f != abs_r => return None,
            (-1, 1) => MoveDirection::ForwardLeftDiag,
            (1, 1) => MoveDirection::ForwardRightDiag,
            (-1, -1) => MoveDirection::BackwardLeftDiag,
            _ => MoveDirection::BackwardRightDiag,
        };
        Some((direction, abs_f.max(abs_r)))
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MoveDirection::Forward => "forward",
            MoveDirection::Backward => "backward",
            MoveDirection::Left => "left",
            MoveDirection::Right => "right",
            MoveDirection::ForwardLeftDiag => "forward-left diagonal",
            MoveDirection::ForwardRightDiag => "forward-right diagonal",
            MoveDirection::BackwardLeftDiag => "backward-left diagonal",
            MoveDirection::BackwardRightDiag => "backward-right diagonal",
            MoveDirection::LShape => "l-shape",
        };
        write!(f, "{}", name)
    }
}

/// How far a piece may travel in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reach {
    /// Up to this many squares, stopped by the first occupied square.
    Limited(u8),
    /// Any distance until blocked or the board edge.
    Unbounded,
    /// Knight jump, unaffected by pieces in between.
    Jump,
}

impl Reach {
    /// Returns true if travelling `steps` squares is within this reach.
    #[inline]
    pub const fn allows(self, steps: u8) -> bool {
        match self {
            Reach::Limited(n) => steps <= n,
            Reach::Unbounded => true,
            Reach::Jump => steps == 1,
        }
    }

    /// Numeric encoding used by tabular profiles: `n` for a limited reach and
    /// `-1` for an unbounded one. A jump has no numeric form.
    pub const fn as_raw(self) -> Option<i8> {
        match self {
            Reach::Limited(n) => Some(n as i8),
            Reach::Unbounded => Some(-1),
            Reach::Jump => None,
        }
    }
}

impl fmt::Display for Reach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reach::Limited(n) => write!(f, "{}", n),
            Reach::Unbounded => write!(f, "unbounded"),
            Reach::Jump => write!(f, "jump"),
        }
    }
}
