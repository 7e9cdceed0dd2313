use crate::core::series::Series;
use crate::core::style::StackMode;

/// Lower and upper data bound of one stacked segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackExtent {
    pub lower: f64,
    pub upper: f64,
}

/// Segment extents of the participant at `position` for each of its values.
///
/// - `None`: each value stands on zero.
/// - `Stacked`: each value sits on the sum of the series before it.
/// - `FullStacked`: like `Stacked` on absolute values normalized so every
///   index totals 100; an all-zero index collapses to empty segments.
///
/// Series shorter than their neighbours contribute zero at missing indices.
#[must_use]
pub fn stack_extents(participants: &[&Series], position: usize, mode: StackMode) -> Vec<StackExtent> {
    let Some(series) = participants.get(position) else {
        return Vec::new();
    };

    (0..series.len())
        .map(|index| {
            let value = series.plain_at(index);
            match mode {
                StackMode::None => StackExtent {
                    lower: 0.0,
                    upper: value,
                },
                StackMode::Stacked => {
                    let lower: f64 = participants[..position]
                        .iter()
                        .map(|below| below.plain_at(index))
                        .sum();
                    StackExtent {
                        lower,
                        upper: lower + value,
                    }
                }
                StackMode::FullStacked => {
                    let total: f64 = participants
                        .iter()
                        .map(|item| item.plain_at(index).abs())
                        .sum();
                    if total <= 0.0 {
                        return StackExtent {
                            lower: 0.0,
                            upper: 0.0,
                        };
                    }
                    let below: f64 = participants[..position]
                        .iter()
                        .map(|item| item.plain_at(index).abs())
                        .sum();
                    let lower = below / total * 100.0;
                    StackExtent {
                        lower,
                        upper: lower + value.abs() / total * 100.0,
                    }
                }
            }
        })
        .collect()
}
