use crate::mood_log::{MoodLog, RECENT_WINDOW};
use serde::Serialize;
use std::iter::FusedIterator;

pub const SCORE_MIN: f64 = 1.0;
pub const SCORE_MAX: f64 = 5.0;

/// Drawn when nothing has been logged yet: a flat mid-range baseline.
pub const PLACEHOLDER_TREND: [u8; 4] = [3, 3, 3, 3];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl ChartFrame {
    pub const TREND: ChartFrame = ChartFrame {
        width: 560.0,
        height: 160.0,
        padding: 16.0,
    };

    pub fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Lazily maps scores onto chart coordinates. Clone it to walk the points again.
#[derive(Debug, Clone)]
pub struct Projection<'a, T> {
    values: std::slice::Iter<'a, T>,
    index: usize,
    step_x: f64,
    frame: ChartFrame,
}

pub fn project<T>(values: &[T], frame: ChartFrame) -> Projection<'_, T>
where
    T: Copy + Into<f64>,
{
    let intervals = values.len().saturating_sub(1).max(1);
    Projection {
        values: values.iter(),
        index: 0,
        step_x: (frame.width - frame.padding * 2.0) / intervals as f64,
        frame,
    }
}

impl<T> Projection<'_, T> {
    fn to_y(&self, value: f64) -> f64 {
        let t = (value - SCORE_MIN) / (SCORE_MAX - SCORE_MIN);
        self.frame.height - self.frame.padding - t * (self.frame.height - self.frame.padding * 2.0)
    }
}

impl<T> Iterator for Projection<'_, T>
where
    T: Copy + Into<f64>,
{
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        let value: f64 = (*self.values.next()?).into();
        let point = Point {
            x: self.frame.padding + self.index as f64 * self.step_x,
            y: self.to_y(value),
        };
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> ExactSizeIterator for Projection<'_, T> where T: Copy + Into<f64> {}

impl<T> FusedIterator for Projection<'_, T> where T: Copy + Into<f64> {}

/// Chronological scores for the chart, falling back to the placeholder baseline.
pub fn trend_values(log: &MoodLog) -> Vec<u8> {
    let values = log.recent_scores(RECENT_WINDOW);
    if values.is_empty() {
        return PLACEHOLDER_TREND.to_vec();
    }
    values
}

/// Formats points as an SVG `points` attribute.
pub fn polyline_points(points: impl IntoIterator<Item = Point>) -> String {
    points
        .into_iter()
        .map(|point| format!("{},{}", point.x, point.y))
        .collect::<Vec<_>>()
        .join(" ")
}
