//! Re-orientable two-seat storage.
//!
//! A match has exactly two seats. [`Pair`] stores one value per seat and
//! a perspective bit: [`me`](Pair::me) is whichever seat is currently
//! acting, [`opponent`](Pair::opponent) is the other. Flipping the
//! perspective never moves the values.
//!
//! ```
//! use dice_duel::core::Pair;
//!
//! let mut life = Pair::new(10, 8);
//! assert_eq!((*life.me(), *life.opponent()), (10, 8));
//!
//! life.flip();
//! assert_eq!((*life.me(), *life.opponent()), (8, 10));
//!
//! let (me, opponent) = life.split_mut();
//! *me -= 1;
//! *opponent += 1;
//! assert_eq!(life.seats(), &[11, 7]);
//! ```

use serde::{Deserialize, Serialize};

/// One value per seat, with a movable perspective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair<T> {
    seats: [T; 2],
    flipped: bool,
}

impl<T> Pair<T> {
    /// Create a pair; `first` starts as "me".
    pub fn new(first: T, second: T) -> Self {
        Self { seats: [first, second], flipped: false }
    }

    #[inline]
    fn me_index(&self) -> usize {
        usize::from(self.flipped)
    }

    /// The seat currently acting.
    #[must_use]
    pub fn me(&self) -> &T {
        &self.seats[self.me_index()]
    }

    /// The seat not currently acting.
    #[must_use]
    pub fn opponent(&self) -> &T {
        &self.seats[1 - self.me_index()]
    }

    pub fn me_mut(&mut self) -> &mut T {
        let i = self.me_index();
        &mut self.seats[i]
    }

    pub fn opponent_mut(&mut self) -> &mut T {
        let i = 1 - self.me_index();
        &mut self.seats[i]
    }

    /// Borrow both seats as `(me, opponent)`.
    #[must_use]
    pub fn split(&self) -> (&T, &T) {
        (self.me(), self.opponent())
    }

    /// Mutably borrow both seats as `(me, opponent)`.
    pub fn split_mut(&mut self) -> (&mut T, &mut T) {
        let [a, b] = &mut self.seats;
        if self.flipped {
            (b, a)
        } else {
            (a, b)
        }
    }

    /// Swap which seat is "me".
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Check if the perspective is flipped from construction order.
    #[must_use]
    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Both seats in construction order, ignoring perspective.
    #[must_use]
    pub fn seats(&self) -> &[T; 2] {
        &self.seats
    }

    /// Mutable seats in construction order, ignoring perspective.
    pub fn seats_mut(&mut self) -> &mut [T; 2] {
        &mut self.seats
    }

    /// Consume the pair, returning seats in construction order.
    pub fn into_seats(self) -> [T; 2] {
        self.seats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perspective() {
        let mut pair = Pair::new("a", "b");
        assert_eq!(pair.split(), (&"a", &"b"));
        assert!(!pair.is_flipped());

        pair.flip();
        assert_eq!(pair.split(), (&"b", &"a"));
        assert!(pair.is_flipped());

        pair.flip();
        assert_eq!(*pair.me(), "a");
    }

    #[test]
    fn test_mutation_follows_perspective() {
        let mut pair = Pair::new(0, 0);
        pair.flip();
        *pair.me_mut() = 5;
        *pair.opponent_mut() = 3;
        assert_eq!(pair.seats(), &[3, 5]);
    }

    #[test]
    fn test_split_mut_disjoint() {
        let mut pair = Pair::new(vec![1], vec![2]);
        let (me, opponent) = pair.split_mut();
        me.append(opponent);
        assert_eq!(pair.into_seats(), [vec![1, 2], vec![]]);
    }
}
