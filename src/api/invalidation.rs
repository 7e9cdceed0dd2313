use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Viewport;
use crate::render::Renderer;

use super::ChartEngine;

/// What changed since the last layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvalidationTopic {
    /// Series added, removed, moved or replaced.
    Series,
    /// Values or visibility inside a series.
    Values,
    /// Chart style, geometry options or opacity.
    Style,
    /// Axis bounds, sections, formats or custom labels.
    Axis,
    /// Legend labels, hide policy or series colors.
    Legend,
    /// Container size.
    Viewport,
}

impl InvalidationTopic {
    const fn bit(self) -> u8 {
        match self {
            Self::Series => 1 << 0,
            Self::Values => 1 << 1,
            Self::Style => 1 << 2,
            Self::Axis => 1 << 3,
            Self::Legend => 1 << 4,
            Self::Viewport => 1 << 5,
        }
    }
}

/// Bitmask of pending invalidation topics. Any set bit makes the next
/// `layout()` call recompute the frame; repeated marks coalesce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct InvalidationTopics {
    bits: u8,
}

impl InvalidationTopics {
    const ALL_BITS: u8 = InvalidationTopic::Series.bit()
        | InvalidationTopic::Values.bit()
        | InvalidationTopic::Style.bit()
        | InvalidationTopic::Axis.bit()
        | InvalidationTopic::Legend.bit()
        | InvalidationTopic::Viewport.bit();

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
    pub const fn intersects(self, other: Self) -> bool {
        (self.bits & other.bits) != 0
    }

    #[must_use]
    pub const fn contains_topic(self, topic: InvalidationTopic) -> bool {
        self.intersects(Self::from_topic(topic))
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.bits == 0
    }
}

impl<R: Renderer> ChartEngine<R> {
    #[must_use]
    pub fn pending_invalidation(&self) -> InvalidationTopics {
        self.pending
    }

    /// Marks `topics` dirty without recomputing.
    pub fn invalidate(&mut self, topics: InvalidationTopics) {
        self.pending = self.pending.union(topics);
        trace!(?topics, "invalidate");
    }

    pub(super) fn invalidate_topic(&mut self, topic: InvalidationTopic) {
        self.invalidate(InvalidationTopics::from_topic(topic));
    }

    /// Host notification: series content changed outside the engine API.
    pub fn on_series_changed(&mut self) {
        self.invalidate(
            InvalidationTopics::from_topic(InvalidationTopic::Series)
                .with_topic(InvalidationTopic::Values),
        );
    }

    /// Host notification: presentation settings changed.
    pub fn on_config_changed(&mut self) {
        self.invalidate(
            InvalidationTopics::from_topic(InvalidationTopic::Style)
                .with_topic(InvalidationTopic::Axis)
                .with_topic(InvalidationTopic::Legend),
        );
    }

    /// Host notification: the container was resized.
    pub fn on_resized(&mut self, width: u32, height: u32) {
        let viewport = Viewport::new(width, height);
        if viewport == self.config.viewport {
            return;
        }
        self.config.viewport = viewport;
        self.invalidate_topic(InvalidationTopic::Viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::{InvalidationTopic, InvalidationTopics};

    #[test]
    fn topics_union_and_query() {
        let topics = InvalidationTopics::none()
            .with_topic(InvalidationTopic::Axis)
            .union(InvalidationTopics::from_topic(InvalidationTopic::Viewport));
        assert!(topics.contains_topic(InvalidationTopic::Axis));
        assert!(topics.contains_topic(InvalidationTopic::Viewport));
        assert!(!topics.contains_topic(InvalidationTopic::Series));
        assert!(InvalidationTopics::all().contains_topic(InvalidationTopic::Legend));
        assert!(InvalidationTopics::none().is_none());
    }
}
