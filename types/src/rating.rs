//! The five-level Likert scale.

use thiserror::Error;

/// A single answer on the 1-5 agreement scale.
///
/// Construction is the only place the range is checked; every `Rating` in
/// circulation is known to be valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rating(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating {value} is outside the 1-5 scale")]
pub struct InvalidRating {
    pub value: u8,
}

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Every level, lowest first.
    pub const ALL: [Rating; 5] = [Rating(1), Rating(2), Rating(3), Rating(4), Rating(5)];

    pub const fn new(value: u8) -> Result<Self, InvalidRating> {
        if value >= Self::MIN && value <= Self::MAX {
            Ok(Self(value))
        } else {
            Err(InvalidRating { value })
        }
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position on the scale (`Rating(1)` is 0).
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - Self::MIN) as usize
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "Not true",
            2 => "Rarely",
            3 => "Sometimes",
            4 => "Often",
            _ => "Very true",
        }
    }

    /// Next level up, saturating at the top of the scale.
    #[must_use]
    pub const fn raise(self) -> Self {
        if self.0 < Self::MAX {
            Self(self.0 + 1)
        } else {
            self
        }
    }

    /// Next level down, saturating at the bottom of the scale.
    #[must_use]
    pub const fn lower(self) -> Self {
        if self.0 > Self::MIN {
            Self(self.0 - 1)
        } else {
            self
        }
    }
}

impl TryFrom<u8> for Rating {
    type Error = InvalidRating;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl From<Rating> for u32 {
    fn from(rating: Rating) -> Self {
        u32::from(rating.0)
    }
}
