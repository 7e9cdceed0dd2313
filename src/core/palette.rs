use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Which of the two palettes a slot comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PaletteKind {
    /// Main brush of a series (lines, fills, rising values).
    Primary,
    /// Secondary brush (falling values, doughnut hole outline, etc).
    Secondary,
}

/// Color owned by a series.
///
/// `Auto` slots were handed out by the allocator and go back to it when the
/// series is removed; `Fixed` colors were set by the host and never touch
/// palette counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColorSlot {
    Auto { palette: PaletteKind, slot: usize },
    Fixed(Color),
}

impl ColorSlot {
    #[must_use]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto { .. })
    }
}

/// Immutable palette definition handed to the allocator at construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub primary: Vec<Color>,
    pub secondary: Vec<Color>,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            primary: vec![
                Color::from_hex(0x1F77B4),
                Color::from_hex(0xFF7F0E),
                Color::from_hex(0x2CA02C),
                Color::from_hex(0xD62728),
                Color::from_hex(0x9467BD),
                Color::from_hex(0x8C564B),
                Color::from_hex(0xE377C2),
                Color::from_hex(0x7F7F7F),
                Color::from_hex(0xBCBD22),
                Color::from_hex(0x17BECF),
            ],
            secondary: vec![
                Color::from_hex(0xAEC7E8),
                Color::from_hex(0xFFBB78),
                Color::from_hex(0x98DF8A),
                Color::from_hex(0xFF9896),
                Color::from_hex(0xC5B0D5),
                Color::from_hex(0xC49C94),
                Color::from_hex(0xF7B6D2),
                Color::from_hex(0xC7C7C7),
                Color::from_hex(0xDBDB8D),
                Color::from_hex(0x9EDAE5),
            ],
        }
    }
}

impl PaletteConfig {
    pub fn new(primary: Vec<Color>, secondary: Vec<Color>) -> ChartResult<Self> {
        if primary.is_empty() || secondary.is_empty() {
            return Err(ChartError::InvalidConfig(
                "palettes must contain at least one color each".to_owned(),
            ));
        }
        for color in primary.iter().chain(secondary.iter()) {
            color.validate()?;
        }
        Ok(Self { primary, secondary })
    }

    #[must_use]
    pub fn colors(&self, palette: PaletteKind) -> &[Color] {
        match palette {
            PaletteKind::Primary => &self.primary,
            PaletteKind::Secondary => &self.secondary,
        }
    }
}

/// Least-used-first color allocator over two fixed palettes.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorAllocator {
    config: PaletteConfig,
    primary_usage: Vec<u32>,
    secondary_usage: Vec<u32>,
}

impl ColorAllocator {
    #[must_use]
    pub fn new(config: PaletteConfig) -> Self {
        let primary_usage = vec![0; config.primary.len()];
        let secondary_usage = vec![0; config.secondary.len()];
        Self {
            config,
            primary_usage,
            secondary_usage,
        }
    }

    #[must_use]
    pub fn config(&self) -> &PaletteConfig {
        &self.config
    }

    #[must_use]
    pub fn usage(&self, palette: PaletteKind) -> &[u32] {
        match palette {
            PaletteKind::Primary => &self.primary_usage,
            PaletteKind::Secondary => &self.secondary_usage,
        }
    }

    /// Picks the first slot with the lowest usage count and claims it.
    ///
    /// An empty palette (only possible through a hand-built config) yields a
    /// fixed black brush instead of failing the render pass.
    pub fn allocate(&mut self, palette: PaletteKind) -> ColorSlot {
        let usage = self.usage_mut(palette);
        let Some(slot) = usage
            .iter()
            .enumerate()
            .min_by_key(|(slot, count)| (**count, *slot))
            .map(|(slot, _)| slot)
        else {
            return ColorSlot::Fixed(Color::rgb(0.0, 0.0, 0.0));
        };
        usage[slot] = usage[slot].saturating_add(1);
        trace!(?palette, slot, usage = usage[slot], "allocate palette slot");
        ColorSlot::Auto { palette, slot }
    }

    /// Returns an auto slot to its palette. Fixed colors are ignored and the
    /// counter never goes below zero.
    pub fn release(&mut self, slot: ColorSlot) {
        let ColorSlot::Auto { palette, slot } = slot else {
            return;
        };
        if let Some(count) = self.usage_mut(palette).get_mut(slot) {
            *count = count.saturating_sub(1);
            trace!(?palette, slot, usage = *count, "release palette slot");
        }
    }

    pub fn reset(&mut self) {
        self.primary_usage.iter_mut().for_each(|count| *count = 0);
        self.secondary_usage.iter_mut().for_each(|count| *count = 0);
    }

    #[must_use]
    pub fn resolve(&self, slot: ColorSlot) -> Color {
        match slot {
            ColorSlot::Fixed(color) => color,
            ColorSlot::Auto { palette, slot } => {
                let colors = self.config.colors(palette);
                colors
                    .get(slot)
                    .or_else(|| colors.first())
                    .copied()
                    .unwrap_or(Color::rgb(0.0, 0.0, 0.0))
            }
        }
    }

    /// Primary palette color for per-value brushes, wrapping around the
    /// palette length. Does not touch usage counters.
    #[must_use]
    pub fn indexed(&self, index: usize) -> Color {
        let colors = &self.config.primary;
        if colors.is_empty() {
            return Color::rgb(0.0, 0.0, 0.0);
        }
        colors[index % colors.len()]
    }

    fn usage_mut(&mut self, palette: PaletteKind) -> &mut Vec<u32> {
        match palette {
            PaletteKind::Primary => &mut self.primary_usage,
            PaletteKind::Secondary => &mut self.secondary_usage,
        }
    }
}

impl Default for ColorAllocator {
    fn default() -> Self {
        Self::new(PaletteConfig::default())
    }
}
