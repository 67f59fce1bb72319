use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, IntoStaticStr};

pub const CLASS_COUNT: usize = 3;

/// Snowiness class, ordered by severity.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
pub enum Label {
    #[strum(serialize = "No Snow")]
    NoSnow = 0,
    #[strum(serialize = "Light Snow")]
    LightSnow = 1,
    #[strum(serialize = "Heavy Snow")]
    HeavySnow = 2,
}

impl Label {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Label::iter().nth(index)
    }

    /// Human-readable name, e.g. `"Heavy Snow"`.
    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn indices_follow_severity() {
        assert_eq!(Label::NoSnow.index(), 0);
        assert_eq!(Label::LightSnow.index(), 1);
        assert_eq!(Label::HeavySnow.index(), 2);
        assert!(Label::NoSnow < Label::LightSnow);
        assert!(Label::LightSnow < Label::HeavySnow);
        assert_eq!(Label::COUNT, CLASS_COUNT);
    }

    #[test]
    fn from_index_round_trips_and_rejects_out_of_range() {
        for label in Label::iter() {
            assert_eq!(Label::from_index(label.index()), Some(label));
        }
        assert_eq!(Label::from_index(3), None);
    }

    #[test]
    fn names_are_human_readable() {
        assert_eq!(Label::NoSnow.name(), "No Snow");
        assert_eq!(Label::LightSnow.to_string(), "Light Snow");
        assert_eq!(Label::HeavySnow.name(), "Heavy Snow");
    }
}
