//! Movement profiles: which directions a piece may move in and how far.

use crate::{MoveDirection, Reach};
use std::fmt;

/// Mapping from [`MoveDirection`] to the [`Reach`] allowed in that direction.
///
/// A direction with no entry is illegal for the piece. Profiles are small
/// `Copy` values; reading a piece's profile hands out a snapshot, so the only
/// way to change a piece's profile is through the piece itself.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MovementProfile {
    reaches: [Option<Reach>; 9],
}

impl MovementProfile {
    /// A profile with no legal directions.
    pub const EMPTY: MovementProfile = MovementProfile {
        reaches: [None; 9],
    };

    /// Builds a profile from `(direction, reach)` pairs. Later entries win.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (MoveDirection, Reach)>,
    {
        let mut profile = Self::EMPTY;
        for (direction, reach) in entries {
            profile.set(direction, reach);
        }
        profile
    }

    /// Returns the reach for `direction`, or `None` if the direction is illegal.
    #[inline]
    pub const fn get(&self, direction: MoveDirection) -> Option<Reach> {
        self.reaches[direction.index()]
    }

    /// Returns true if `direction` has an entry.
    #[inline]
    pub const fn contains(&self, direction: MoveDirection) -> bool {
        self.reaches[direction.index()].is_some()
    }

    /// Number of legal directions.
    pub fn len(&self) -> usize {
        self.reaches.iter().filter(|r| r.is_some()).count()
    }

    /// Returns true if no direction is legal.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the legal directions in [`MoveDirection::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveDirection, Reach)> + '_ {
        MoveDirection::ALL
            .iter()
            .filter_map(|&d| self.get(d).map(|reach| (d, reach)))
    }

    pub(crate) fn set(&mut self, direction: MoveDirection, reach: Reach) {
        self.reaches[direction.index()] = Some(reach);
    }
}

impl fmt::Debug for MovementProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl FromIterator<(MoveDirection, Reach)> for MovementProfile {
    fn from_iter<I: IntoIterator<Item = (MoveDirection, Reach)>>(iter: I) -> Self {
        Self::from_entries(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile() {
        assert!(MovementProfile::EMPTY.is_empty());
        assert_eq!(MovementProfile::default(), MovementProfile::EMPTY);
        assert_eq!(MovementProfile::EMPTY.get(MoveDirection::Forward), None);
    }

    #[test]
    fn later_entries_win() {
        let profile = MovementProfile::from_entries([
            (MoveDirection::Forward, Reach::Limited(2)),
            (MoveDirection::Forward, Reach::Limited(1)),
        ]);
        assert_eq!(profile.len(), 1);
        assert_eq!(profile.get(MoveDirection::Forward), Some(Reach::Limited(1)));
    }

    #[test]
    fn iter_follows_direction_order() {
        let profile: MovementProfile = [
            (MoveDirection::Right, Reach::Unbounded),
            (MoveDirection::Forward, Reach::Unbounded),
        ]
        .into_iter()
        .collect();
        let dirs: Vec<_> = profile.iter().map(|(d, _)| d).collect();
        assert_eq!(dirs, vec![MoveDirection::Forward, MoveDirection::Right]);
    }
}
