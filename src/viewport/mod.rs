//! Interactive sub-range selection over the fetched series.
//!
//! Drag-select, wheel-zoom and pinch-zoom all funnel into one explicit state
//! machine so the transitions stay testable. The selector owns only bounds;
//! the series itself lives in the forecast store and is borrowed per frame.

use chrono::{Duration, NaiveDateTime};

use crate::domain::ForecastPoint;

/// Fraction of the current span one zoom tick moves.
const ZOOM_STEP: f64 = 0.10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragPhase {
    #[default]
    Idle,
    Selecting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

#[derive(Debug, Default)]
pub struct ViewportSelector {
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    phase: DragPhase,
    drag_left: Option<NaiveDateTime>,
    drag_right: Option<NaiveDateTime>,
}

impl ViewportSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed bounds; `None` means the full series is visible.
    pub fn bounds(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        self.start.zip(self.end)
    }

    pub fn is_selecting(&self) -> bool {
        self.phase == DragPhase::Selecting
    }

    pub fn is_zoomed(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Provisional selection while a drag is in progress, for drawing overlays.
    pub fn pending_selection(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let (left, right) = self.drag_left.zip(self.drag_right)?;
        Some((left.min(right), left.max(right)))
    }

    pub fn pointer_down(&mut self, at: NaiveDateTime) {
        self.phase = DragPhase::Selecting;
        self.drag_left = Some(at);
        self.drag_right = None;
    }

    pub fn pointer_move(&mut self, at: NaiveDateTime) {
        if self.phase == DragPhase::Selecting {
            self.drag_right = Some(at);
        }
    }

    /// Pointer up or leave: commit `[min, max]` when both edges exist, else
    /// leave the window unchanged.
    pub fn pointer_up(&mut self) {
        if let (Some(left), Some(right)) = (self.drag_left, self.drag_right) {
            self.start = Some(left.min(right));
            self.end = Some(left.max(right));
        }
        self.drag_left = None;
        self.drag_right = None;
        self.phase = DragPhase::Idle;
    }

    /// Back to the full span. Idempotent.
    pub fn reset(&mut self) {
        self.start = None;
        self.end = None;
        self.drag_left = None;
        self.drag_right = None;
        self.phase = DragPhase::Idle;
    }

    /// One zoom tick around the focal fraction of the chart width.
    ///
    /// The window shrinks (or grows) by [`ZOOM_STEP`] of its current span,
    /// split asymmetrically: the left edge moves by `(1 - focal)` of the
    /// amount and the right edge by `focal`, so zooming at 25% of the width
    /// over a 100-day window trims ~7.5 days from the left and ~2.5 from the
    /// right.
    pub fn zoom(&mut self, direction: ZoomDirection, focal: f64, full: &[ForecastPoint]) {
        let (Some(first), Some(last)) = (full.first(), full.last()) else {
            return;
        };
        let focal = focal.clamp(0.0, 1.0);
        let cur_start = self.start.unwrap_or(first.stamp);
        let cur_end = self.end.unwrap_or(last.stamp);
        let span_secs = (cur_end - cur_start).num_seconds();
        if span_secs <= 0 {
            return;
        }

        let signed = match direction {
            ZoomDirection::In => 1.0,
            ZoomDirection::Out => -1.0,
        };
        let amount = span_secs as f64 * ZOOM_STEP * signed;
        let new_start = cur_start + Duration::seconds((amount * (1.0 - focal)) as i64);
        let new_end = cur_end - Duration::seconds((amount * focal) as i64);

        // A window that collapsed to nothing is useless; keep the current one.
        if new_start >= new_end {
            return;
        }
        self.start = Some(new_start);
        self.end = Some(new_end);
    }

    /// The visible window: always a contiguous, date-ordered subslice of
    /// `full`, never reordered or duplicated.
    ///
    /// Expects `full` sorted ascending by stamp (the fetch order). A window
    /// that would hold fewer than 2 points widens to the first two points of
    /// the full series so the chart stays renderable.
    pub fn visible<'a>(&self, full: &'a [ForecastPoint]) -> &'a [ForecastPoint] {
        let Some((start, end)) = self.bounds() else {
            return full;
        };
        let lo = full.partition_point(|p| p.stamp < start);
        let hi = full.partition_point(|p| p.stamp <= end);
        let window = &full[lo..hi];
        if window.len() >= 2 {
            window
        } else {
            &full[..full.len().min(2)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day_stamp(day: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(chrono::Days::new((day - 1) as u64))
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    }

    fn daily_series(days: u32) -> Vec<ForecastPoint> {
        (1..=days)
            .map(|d| ForecastPoint {
                stamp: day_stamp(d),
                prediction: 100 + d as i64,
                actual: None,
            })
            .collect()
    }

    #[test]
    fn drag_commit_sorts_inverted_edges() {
        let mut selector = ViewportSelector::new();
        selector.pointer_down(day_stamp(20));
        assert!(selector.is_selecting());
        selector.pointer_move(day_stamp(5));
        selector.pointer_up();

        assert!(!selector.is_selecting());
        assert_eq!(selector.bounds(), Some((day_stamp(5), day_stamp(20))));
    }

    #[test]
    fn drag_without_movement_leaves_window_unchanged() {
        let mut selector = ViewportSelector::new();
        selector.pointer_down(day_stamp(3));
        selector.pointer_up();
        assert_eq!(selector.bounds(), None);
    }

    #[test]
    fn visible_is_a_contiguous_inclusive_slice() {
        let full = daily_series(10);
        let mut selector = ViewportSelector::new();
        selector.pointer_down(day_stamp(3));
        selector.pointer_move(day_stamp(7));
        selector.pointer_up();

        let window = selector.visible(&full);
        assert_eq!(window.len(), 5);
        assert_eq!(window.first().unwrap().stamp, day_stamp(3));
        assert_eq!(window.last().unwrap().stamp, day_stamp(7));
    }

    #[test]
    fn tiny_window_widens_to_first_two_points() {
        let full = daily_series(10);
        let mut selector = ViewportSelector::new();
        selector.pointer_down(day_stamp(4));
        selector.pointer_move(day_stamp(4));
        selector.pointer_up();

        let window = selector.visible(&full);
        assert_eq!(window.len(), 2);
        assert_eq!(window[0].stamp, day_stamp(1));
        assert_eq!(window[1].stamp, day_stamp(2));
    }

    #[test]
    fn reset_is_idempotent() {
        let full = daily_series(10);
        let mut selector = ViewportSelector::new();
        selector.pointer_down(day_stamp(2));
        selector.pointer_move(day_stamp(8));
        selector.pointer_up();

        selector.reset();
        assert_eq!(selector.bounds(), None);
        assert_eq!(selector.visible(&full).len(), 10);

        selector.reset();
        assert_eq!(selector.bounds(), None);
        assert_eq!(selector.visible(&full).len(), 10);
    }

    #[test]
    fn zoom_in_splits_the_step_around_the_focal_point() {
        // 100-day window, one zoom-in tick at the 25% focal point:
        // ~10 days total, ~7.5 trimmed from the left, ~2.5 from the right.
        let full = daily_series(101); // spans exactly 100 days
        let mut selector = ViewportSelector::new();
        selector.zoom(ZoomDirection::In, 0.25, &full);

        let (start, end) = selector.bounds().unwrap();
        let left_trim = (start - day_stamp(1)).num_hours();
        let right_trim = (day_stamp(101) - end).num_hours();
        assert_eq!(left_trim, 7 * 24 + 12); // 7.5 days
        assert_eq!(right_trim, 2 * 24 + 12); // 2.5 days
    }

    #[test]
    fn zoom_out_is_the_inverse_direction() {
        let full = daily_series(101);
        let mut selector = ViewportSelector::new();
        selector.zoom(ZoomDirection::In, 0.5, &full);
        let (zoomed_start, zoomed_end) = selector.bounds().unwrap();

        selector.zoom(ZoomDirection::Out, 0.5, &full);
        let (widened_start, widened_end) = selector.bounds().unwrap();
        assert!(widened_start < zoomed_start);
        assert!(widened_end > zoomed_end);
    }

    #[test]
    fn zoom_never_collapses_the_window() {
        let full = daily_series(2);
        let mut selector = ViewportSelector::new();
        for _ in 0..200 {
            selector.zoom(ZoomDirection::In, 0.5, &full);
        }
        if let Some((start, end)) = selector.bounds() {
            assert!(start < end);
        }
    }

    #[test]
    fn zoom_on_empty_series_is_a_no_op() {
        let mut selector = ViewportSelector::new();
        selector.zoom(ZoomDirection::In, 0.5, &[]);
        assert_eq!(selector.bounds(), None);
    }
}
