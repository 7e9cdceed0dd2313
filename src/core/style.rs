use serde::{Deserialize, Serialize};

use crate::core::value::SeriesKind;

/// Every supported rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartStyle {
    #[default]
    Lines,
    StackedLines,
    FullStackedLines,
    SmoothLines,
    SmoothStackedLines,
    SmoothFullStackedLines,
    LinesWithMarkers,
    StackedLinesWithMarkers,
    FullStackedLinesWithMarkers,
    SmoothLinesWithMarkers,
    SmoothStackedLinesWithMarkers,
    SmoothFullStackedLinesWithMarkers,
    Columns,
    StackedColumns,
    FullStackedColumns,
    Bars,
    StackedBars,
    FullStackedBars,
    Area,
    StackedArea,
    FullStackedArea,
    SolidPie,
    SlicedPie,
    Doughnut,
    Radar,
    RadarWithMarkers,
    RadarArea,
    Waterfall,
    Funnel,
    HighLowClose,
    OpenHighLowClose,
    Bubbles,
}

/// Group of styles sharing one geometry builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StyleFamily {
    Line,
    Area,
    Bar,
    Pie,
    Radar,
    Waterfall,
    Funnel,
    Stock,
    Bubble,
}

/// How values at the same index combine across series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackMode {
    None,
    Stacked,
    FullStacked,
}

/// Physical axis carrying a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisKind {
    X,
    Y,
}

impl ChartStyle {
    pub const ALL: [Self; 32] = [
        Self::Lines,
        Self::StackedLines,
        Self::FullStackedLines,
        Self::SmoothLines,
        Self::SmoothStackedLines,
        Self::SmoothFullStackedLines,
        Self::LinesWithMarkers,
        Self::StackedLinesWithMarkers,
        Self::FullStackedLinesWithMarkers,
        Self::SmoothLinesWithMarkers,
        Self::SmoothStackedLinesWithMarkers,
        Self::SmoothFullStackedLinesWithMarkers,
        Self::Columns,
        Self::StackedColumns,
        Self::FullStackedColumns,
        Self::Bars,
        Self::StackedBars,
        Self::FullStackedBars,
        Self::Area,
        Self::StackedArea,
        Self::FullStackedArea,
        Self::SolidPie,
        Self::SlicedPie,
        Self::Doughnut,
        Self::Radar,
        Self::RadarWithMarkers,
        Self::RadarArea,
        Self::Waterfall,
        Self::Funnel,
        Self::HighLowClose,
        Self::OpenHighLowClose,
        Self::Bubbles,
    ];

    #[must_use]
    pub const fn family(self) -> StyleFamily {
        match self {
            Self::Lines
            | Self::StackedLines
            | Self::FullStackedLines
            | Self::SmoothLines
            | Self::SmoothStackedLines
            | Self::SmoothFullStackedLines
            | Self::LinesWithMarkers
            | Self::StackedLinesWithMarkers
            | Self::FullStackedLinesWithMarkers
            | Self::SmoothLinesWithMarkers
            | Self::SmoothStackedLinesWithMarkers
            | Self::SmoothFullStackedLinesWithMarkers => StyleFamily::Line,
            Self::Columns
            | Self::StackedColumns
            | Self::FullStackedColumns
            | Self::Bars
            | Self::StackedBars
            | Self::FullStackedBars => StyleFamily::Bar,
            Self::Area | Self::StackedArea | Self::FullStackedArea => StyleFamily::Area,
            Self::SolidPie | Self::SlicedPie | Self::Doughnut => StyleFamily::Pie,
            Self::Radar | Self::RadarWithMarkers | Self::RadarArea => StyleFamily::Radar,
            Self::Waterfall => StyleFamily::Waterfall,
            Self::Funnel => StyleFamily::Funnel,
            Self::HighLowClose | Self::OpenHighLowClose => StyleFamily::Stock,
            Self::Bubbles => StyleFamily::Bubble,
        }
    }

    #[must_use]
    pub const fn stack_mode(self) -> StackMode {
        match self {
            Self::StackedLines
            | Self::SmoothStackedLines
            | Self::StackedLinesWithMarkers
            | Self::SmoothStackedLinesWithMarkers
            | Self::StackedColumns
            | Self::StackedBars
            | Self::StackedArea => StackMode::Stacked,
            Self::FullStackedLines
            | Self::SmoothFullStackedLines
            | Self::FullStackedLinesWithMarkers
            | Self::SmoothFullStackedLinesWithMarkers
            | Self::FullStackedColumns
            | Self::FullStackedBars
            | Self::FullStackedArea => StackMode::FullStacked,
            _ => StackMode::None,
        }
    }

    #[must_use]
    pub const fn is_smooth(self) -> bool {
        matches!(
            self,
            Self::SmoothLines
                | Self::SmoothStackedLines
                | Self::SmoothFullStackedLines
                | Self::SmoothLinesWithMarkers
                | Self::SmoothStackedLinesWithMarkers
                | Self::SmoothFullStackedLinesWithMarkers
        )
    }

    #[must_use]
    pub const fn has_markers(self) -> bool {
        matches!(
            self,
            Self::LinesWithMarkers
                | Self::StackedLinesWithMarkers
                | Self::FullStackedLinesWithMarkers
                | Self::SmoothLinesWithMarkers
                | Self::SmoothStackedLinesWithMarkers
                | Self::SmoothFullStackedLinesWithMarkers
                | Self::RadarWithMarkers
        )
    }

    /// Horizontal bar styles lay categories out along Y and values along X.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Bars | Self::StackedBars | Self::FullStackedBars)
    }

    #[must_use]
    pub const fn value_axis(self) -> AxisKind {
        if self.is_horizontal() {
            AxisKind::X
        } else {
            AxisKind::Y
        }
    }

    /// Pie-like styles and funnels have no cartesian axes.
    #[must_use]
    pub const fn has_axes(self) -> bool {
        !matches!(self.family(), StyleFamily::Pie | StyleFamily::Funnel)
    }

    /// Only the first participating series is drawn.
    #[must_use]
    pub const fn uses_single_series(self) -> bool {
        matches!(
            self.family(),
            StyleFamily::Pie | StyleFamily::Waterfall | StyleFamily::Funnel
        )
    }

    /// Whether a series of `kind` is drawn by this style.
    #[must_use]
    pub const fn accepts(self, kind: SeriesKind) -> bool {
        match self {
            Self::HighLowClose => kind.is_stock(),
            Self::OpenHighLowClose => matches!(kind, SeriesKind::OpenHighLowClose),
            _ => matches!(kind, SeriesKind::Plain),
        }
    }
}

/// Marker drawn at each data point of `...WithMarkers` styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MarkerShape {
    #[default]
    Circle,
    Square,
    Diamond,
    Triangle,
    Star,
}

/// Whether categories sit half a step away from the plot edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ChartBoundary {
    #[default]
    WithOffset,
    WithoutOffset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum FlowDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

/// Axes whose range follows the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AutoAdjust {
    None,
    Horizontal,
    Vertical,
    #[default]
    Both,
}

impl AutoAdjust {
    #[must_use]
    pub const fn covers(self, axis: AxisKind) -> bool {
        matches!(
            (self, axis),
            (Self::Both, _) | (Self::Horizontal, AxisKind::X) | (Self::Vertical, AxisKind::Y)
        )
    }
}
