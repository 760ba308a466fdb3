use serde::{Deserialize, Serialize};

/// Ordered repaint classes. A hover-only change is `Cursor`; anything that
/// moves geometry is `Full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum InvalidationLevel {
    #[default]
    None,
    Cursor,
    Full,
}

impl InvalidationLevel {
    #[must_use]
    pub const fn max(self, other: Self) -> Self {
        if self as u8 >= other as u8 {
            self
        } else {
            other
        }
    }
}

/// Watched input that requested a repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    Dataset,
    Viewport,
    Style,
    Hover,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Dataset => 1 << 0,
            Self::Viewport => 1 << 1,
            Self::Style => 1 << 2,
            Self::Hover => 1 << 3,
        }
    }

    #[must_use]
    pub const fn level(self) -> InvalidationLevel {
        match self {
            Self::Hover => InvalidationLevel::Cursor,
            Self::Dataset | Self::Viewport | Self::Style => InvalidationLevel::Full,
        }
    }
}

/// Bitmask of pending invalidation topics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Dataset.bit()
        | InvalidationTopic::Viewport.bit()
        | InvalidationTopic::Style.bit()
        | InvalidationTopic::Hover.bit();

    const ORDERED: [InvalidationTopic; 4] = [
        InvalidationTopic::Dataset,
        InvalidationTopic::Viewport,
        InvalidationTopic::Style,
        InvalidationTopic::Hover,
    ];

    #[must_use]
    pub const fn none() -> Self {
        Self { bits: 0 }
    }

    #[must_use]
    pub const fn all() -> Self {
        Self {
            bits: Self::ALL_BITS,
        }
    }

    #[must_use]
    pub const fn from_topic(topic: InvalidationTopic) -> Self {
        Self { bits: topic.bit() }
    }

    #[must_use]
    pub const fn with_topic(self, topic: InvalidationTopic) -> Self {
        Self {
            bits: self.bits | topic.bit(),
        }
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        (self.bits & topic.bit()) != 0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }

    /// Highest repaint class among the pending topics.
    #[must_use]
    pub fn level(self) -> InvalidationLevel {
        Self::ORDERED
            .into_iter()
            .filter(|topic| self.contains_topic(*topic))
            .fold(InvalidationLevel::None, |level, topic| {
                level.max(topic.level())
            })
    }

    pub fn insert(&mut self, topic: InvalidationTopic) {
        self.bits |= topic.bit();
    }

    pub fn clear(&mut self) {
        self.bits = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidationLevel, InvalidationTopic, InvalidationTopics};

    #[test]
    fn topics_union_and_contains_work() {
        let topics = InvalidationTopics::from_topic(InvalidationTopic::Dataset)
            .with_topic(InvalidationTopic::Hover);
        assert!(topics.contains_topic(InvalidationTopic::Dataset));
        assert!(topics.contains_topic(InvalidationTopic::Hover));
        assert!(!topics.contains_topic(InvalidationTopic::Style));
        assert!(InvalidationTopics::all().contains_topic(InvalidationTopic::Viewport));
    }

    #[test]
    fn level_is_highest_pending_class() {
        let mut topics = InvalidationTopics::none();
        assert_eq!(topics.level(), InvalidationLevel::None);

        topics.insert(InvalidationTopic::Hover);
        assert_eq!(topics.level(), InvalidationLevel::Cursor);

        topics.insert(InvalidationTopic::Style);
        assert_eq!(topics.level(), InvalidationLevel::Full);

        topics.clear();
        assert!(topics.is_none());
    }
}
