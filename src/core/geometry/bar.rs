use crate::core::geometry::mapping::BAR_GROUP_FRACTION;
use crate::core::geometry::{
    BrushRole, Fragment, GeometryBuilder, GeometryContext, HitRegion, SeriesGeometry, Shape,
    stack_extents,
};
use crate::core::style::StackMode;

/// Column (vertical) and bar (horizontal) styles.
///
/// Unstacked series share each category slot side by side, ordered by their
/// position among participants; stacked series share the full group width.
#[derive(Debug, Clone, Copy, Default)]
pub struct BarBuilder;

impl GeometryBuilder for BarBuilder {
    fn build(&self, context: &GeometryContext<'_>, position: usize) -> SeriesGeometry {
        let mapping = context.mapping();
        let mode = context.style.stack_mode();
        let slot = mapping.slot_width();
        let group = slot * BAR_GROUP_FRACTION;
        let gap = (slot - group) / 2.0;
        let (bar_width, bar_offset) = match mode {
            StackMode::None => {
                let siblings = context.participants.len().max(1) as f64;
                let width = group / siblings;
                (width, width * position as f64)
            }
            StackMode::Stacked | StackMode::FullStacked => (group, 0.0),
        };

        let mut geometry = SeriesGeometry::default();
        for (index, extent) in stack_extents(context.participants, position, mode)
            .into_iter()
            .enumerate()
        {
            let start = mapping.slot_start(index) + gap + bar_offset;
            let rect = mapping.band(start, bar_width, extent.lower, extent.upper);
            geometry
                .fragments
                .push(Fragment::for_value(Shape::Rect(rect), BrushRole::Main, index));
            geometry
                .hit_regions
                .push(HitRegion::rect(index, rect, rect.center()));
        }
        geometry
    }
}
