use serde::{Deserialize, Serialize};

use crate::core::{LegendSource, SeriesId};
use crate::error::{ChartError, ChartResult};
use crate::render::Renderer;

use super::{ChartEngine, InvalidationTopics};

/// Notifications delivered to registered listeners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    /// A data point was activated (double-click or equivalent gesture).
    PointActivated {
        series: SeriesId,
        series_index: usize,
        value_index: usize,
    },
    /// A legend entry was activated.
    LegendActivated {
        entry_index: usize,
        source: LegendSource,
    },
    SeriesAdded {
        series: SeriesId,
        series_index: usize,
    },
    SeriesRemoved {
        series: SeriesId,
        series_index: usize,
    },
    /// A layout pass finished; `topics` is what triggered it.
    Recomputed {
        pass: u64,
        topics: InvalidationTopics,
    },
}

/// Host hook for discrete chart notifications.
///
/// Listeners observe events; they cannot mutate the engine while it is
/// dispatching.
pub trait ChartEventListener {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &ChartEvent);
}

impl<R: Renderer> ChartEngine<R> {
    /// Registers a listener with a unique identifier.
    pub fn register_listener(&mut self, listener: Box<dyn ChartEventListener>) -> ChartResult<()> {
        let listener_id = listener.id().to_owned();
        if listener_id.is_empty() {
            return Err(ChartError::InvalidData(
                "listener id must not be empty".to_owned(),
            ));
        }
        if self.listeners.iter().any(|entry| entry.id() == listener_id) {
            return Err(ChartError::InvalidData(format!(
                "listener with id `{listener_id}` is already registered"
            )));
        }
        self.listeners.push(listener);
        Ok(())
    }

    /// Unregisters a listener by id. Returns `true` when removed.
    pub fn unregister_listener(&mut self, listener_id: &str) -> bool {
        if let Some(position) = self
            .listeners
            .iter()
            .position(|entry| entry.id() == listener_id)
        {
            self.listeners.remove(position);
            return true;
        }
        false
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub(super) fn emit_event(&mut self, event: ChartEvent) {
        for listener in &mut self.listeners {
            listener.on_event(&event);
        }
    }
}
