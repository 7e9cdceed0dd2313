use tracing::debug;

use crate::core::{ColorSlot, PaletteKind, Series, SeriesId};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, Renderer};

use super::{ChartEngine, ChartEvent, InvalidationTopic, InvalidationTopics};

impl<R: Renderer> ChartEngine<R> {
    /// Appends a series, assigning palette colors to unset slots.
    pub fn add_series(&mut self, series: Series) -> SeriesId {
        let position = self.series.len();
        self.insert_at(position, series)
    }

    /// Inserts a series at `index`, shifting later series down by one.
    pub fn insert_series(&mut self, index: usize, series: Series) -> ChartResult<SeriesId> {
        let len = self.series.len();
        if index > len {
            return Err(ChartError::IndexOutOfRange { index, len });
        }
        Ok(self.insert_at(index, series))
    }

    /// Removes a series, returning its auto-assigned colors to the palette.
    pub fn remove_series(&mut self, id: SeriesId) -> ChartResult<Series> {
        let (index, _, mut series) = self
            .series
            .shift_remove_full(&id)
            .ok_or(ChartError::SeriesNotFound(id.raw()))?;
        self.release_slots(&mut series);
        self.reindex();
        self.invalidate_topic(InvalidationTopic::Series);
        debug!(series = id.raw(), index, "series removed");
        self.emit_event(ChartEvent::SeriesRemoved {
            series: id,
            series_index: index,
        });
        Ok(series)
    }

    /// Moves a series to `new_index`, keeping its colors.
    pub fn move_series(&mut self, id: SeriesId, new_index: usize) -> ChartResult<()> {
        let from = self.index_of(id)?;
        let len = self.series.len();
        if new_index >= len {
            return Err(ChartError::IndexOutOfRange {
                index: new_index,
                len,
            });
        }
        if from == new_index {
            return Ok(());
        }
        self.series.move_index(from, new_index);
        self.reindex();
        self.invalidate_topic(InvalidationTopic::Series);
        debug!(series = id.raw(), from, to = new_index, "series moved");
        Ok(())
    }

    /// Swaps the series behind `id` for `series` at the same position.
    ///
    /// The old series releases its auto colors before the new one allocates,
    /// so a replacement without fixed colors typically inherits the same brush.
    pub fn replace_series(&mut self, id: SeriesId, mut series: Series) -> ChartResult<Series> {
        let index = self.index_of(id)?;
        series.set_index(index);
        let mut previous = std::mem::replace(&mut self.series[index], series);
        self.release_slots(&mut previous);
        self.reassign_slots(index);
        self.invalidate_topic(InvalidationTopic::Series);
        debug!(series = id.raw(), index, "series replaced");
        Ok(previous)
    }

    /// Drops every series and resets the palette counters.
    pub fn clear_series(&mut self) {
        let removed: Vec<SeriesId> = self.series.keys().copied().collect();
        self.series.clear();
        self.colors.reset();
        self.invalidate_topic(InvalidationTopic::Series);
        debug!(count = removed.len(), "series cleared");
        for (series_index, series) in removed.into_iter().enumerate() {
            self.emit_event(ChartEvent::SeriesRemoved {
                series,
                series_index,
            });
        }
    }

    /// Mutates a series in place (values, name) and marks it changed.
    pub fn update_series<T>(
        &mut self,
        id: SeriesId,
        update: impl FnOnce(&mut Series) -> T,
    ) -> ChartResult<T> {
        let series = self
            .series
            .get_mut(&id)
            .ok_or(ChartError::SeriesNotFound(id.raw()))?;
        let output = update(series);
        self.invalidate(
            InvalidationTopics::from_topic(InvalidationTopic::Values)
                .with_topic(InvalidationTopic::Legend),
        );
        Ok(output)
    }

    /// Shows or hides one value. Returns whether anything changed.
    pub fn set_value_visibility(
        &mut self,
        id: SeriesId,
        value_index: usize,
        visible: bool,
    ) -> ChartResult<bool> {
        let series = self
            .series
            .get_mut(&id)
            .ok_or(ChartError::SeriesNotFound(id.raw()))?;
        let changed = series.set_value_visible(value_index, visible)?;
        if changed {
            debug!(series = id.raw(), value_index, visible, "value visibility changed");
            self.invalidate(
                InvalidationTopics::from_topic(InvalidationTopic::Values)
                    .with_topic(InvalidationTopic::Legend),
            );
        }
        Ok(changed)
    }

    /// Shows or hides a whole series. Returns whether anything changed.
    pub fn set_series_visibility(&mut self, id: SeriesId, visible: bool) -> ChartResult<bool> {
        let series = self
            .series
            .get_mut(&id)
            .ok_or(ChartError::SeriesNotFound(id.raw()))?;
        let changed = series.set_visible(visible);
        if changed {
            debug!(series = id.raw(), visible, "series visibility changed");
            self.invalidate(
                InvalidationTopics::from_topic(InvalidationTopic::Series)
                    .with_topic(InvalidationTopic::Legend),
            );
        }
        Ok(changed)
    }

    /// Overrides series brushes. `Some` pins a fixed color; `None` returns a
    /// fixed brush to palette allocation and keeps an existing auto brush.
    pub fn set_series_colors(
        &mut self,
        id: SeriesId,
        main: Option<Color>,
        secondary: Option<Color>,
    ) -> ChartResult<()> {
        let index = self.index_of(id)?;
        for (palette, color) in [
            (PaletteKind::Primary, main),
            (PaletteKind::Secondary, secondary),
        ] {
            let current = slot_of(&self.series[index], palette);
            let next = match (color, current) {
                (Some(color), _) => ColorSlot::Fixed(color),
                (None, Some(slot)) if slot.is_auto() => continue,
                (None, _) => self.colors.allocate(palette),
            };
            if let Some(old) = set_slot(&mut self.series[index], palette, Some(next)) {
                self.colors.release(old);
            }
        }
        self.invalidate(
            InvalidationTopics::from_topic(InvalidationTopic::Style)
                .with_topic(InvalidationTopic::Legend),
        );
        Ok(())
    }

    #[must_use]
    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.series.get(&id)
    }

    /// Series currently at dense position `index`.
    #[must_use]
    pub fn series_at(&self, index: usize) -> Option<(SeriesId, &Series)> {
        self.series
            .get_index(index)
            .map(|(id, series)| (*id, series))
    }

    #[must_use]
    pub fn series_ids(&self) -> Vec<SeriesId> {
        self.series.keys().copied().collect()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    pub fn iter_series(&self) -> impl Iterator<Item = (SeriesId, &Series)> {
        self.series.iter().map(|(id, series)| (*id, series))
    }

    fn insert_at(&mut self, index: usize, mut series: Series) -> SeriesId {
        let id = SeriesId::new(self.next_series_id);
        self.next_series_id += 1;
        self.assign_slots(&mut series);
        self.series.shift_insert(index, id, series);
        self.reindex();
        self.invalidate_topic(InvalidationTopic::Series);
        debug!(series = id.raw(), index, "series added");
        self.emit_event(ChartEvent::SeriesAdded {
            series: id,
            series_index: index,
        });
        id
    }

    fn index_of(&self, id: SeriesId) -> ChartResult<usize> {
        self.series
            .get_index_of(&id)
            .ok_or(ChartError::SeriesNotFound(id.raw()))
    }

    /// Dense 0..N-1 positions after any structural change.
    fn reindex(&mut self) {
        for (index, series) in self.series.values_mut().enumerate() {
            series.set_index(index);
        }
    }

    /// Allocates palette colors for every slot the allocator does not own.
    ///
    /// Incoming `Auto` slots (clones of live series, deserialized series) were
    /// never counted here, so they are allocated again like unset slots.
    fn assign_slots(&mut self, series: &mut Series) {
        for palette in [PaletteKind::Primary, PaletteKind::Secondary] {
            if needs_allocation(slot_of(series, palette)) {
                let slot = self.colors.allocate(palette);
                set_slot(series, palette, Some(slot));
            }
        }
    }

    /// Same as [`Self::assign_slots`] for a series already in the collection.
    fn reassign_slots(&mut self, index: usize) {
        for palette in [PaletteKind::Primary, PaletteKind::Secondary] {
            if needs_allocation(slot_of(&self.series[index], palette)) {
                let slot = self.colors.allocate(palette);
                set_slot(&mut self.series[index], palette, Some(slot));
            }
        }
    }

    fn release_slots(&mut self, series: &mut Series) {
        for slot in [series.set_main_slot(None), series.set_secondary_slot(None)]
            .into_iter()
            .flatten()
        {
            self.colors.release(slot);
        }
    }
}

fn needs_allocation(slot: Option<ColorSlot>) -> bool {
    slot.is_none_or(ColorSlot::is_auto)
}

fn slot_of(series: &Series, palette: PaletteKind) -> Option<ColorSlot> {
    match palette {
        PaletteKind::Primary => series.main_slot(),
        PaletteKind::Secondary => series.secondary_slot(),
    }
}

fn set_slot(series: &mut Series, palette: PaletteKind, slot: Option<ColorSlot>) -> Option<ColorSlot> {
    match palette {
        PaletteKind::Primary => series.set_main_slot(slot),
        PaletteKind::Secondary => series.set_secondary_slot(slot),
    }
}
