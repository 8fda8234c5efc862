pub mod axis;
pub mod ticks;
pub mod types;
pub mod windowing;
pub mod year_format;

pub use axis::{MAX_PX_PER_YEAR, MIN_PX_PER_YEAR, ScaleBounds, YEAR_MAX, YEAR_MIN, YearAxis};
pub use ticks::{AxisTick, TickDensity, ZoomBand, axis_ticks};
pub use types::{Dated, MarkerKind, TimelineMarker, YearInterval};
pub use windowing::{
    DEFAULT_BUFFER_YEARS, VisibleYearRange, filter_by_interval, markers_in_range, visible_range,
};
pub use year_format::{YearNotation, astronomical_year, format_year, parse_year};
