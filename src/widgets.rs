//! Mock canvas widgets.
//!
//! The board pane of the prototype is scattered with sticky notes, shapes,
//! and text blocks. This module generates that data; drawing it is the
//! embedder's concern. Positions are percentages of the pane so the layout
//! scales with it, and the color/corner fields carry the style classes the
//! shell styles widgets with.

#[cfg(test)]
#[path = "widgets_test.rs"]
mod widgets_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fewest widgets generated for one pane.
pub const MIN_WIDGETS: usize = 8;

/// Most widgets generated for one pane.
pub const MAX_WIDGETS: usize = 19;

/// Background color classes widgets draw from.
pub const WIDGET_COLORS: [&str; 5] = [
    "bg-yellow-200",
    "bg-blue-200",
    "bg-green-200",
    "bg-pink-200",
    "bg-purple-200",
];

/// Corner-rounding classes widgets draw from. The empty entry leaves the
/// corners square.
pub const WIDGET_CORNERS: [&str; 3] = ["rounded-md", "rounded-lg", ""];

const TEXT_CONTENT: &str = "Some descriptive text here.";

/// The kind of a mock widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WidgetKind {
    StickyNote,
    Shape,
    Text,
}

const WIDGET_KINDS: [WidgetKind; 3] = [WidgetKind::StickyNote, WidgetKind::Shape, WidgetKind::Text];

/// One generated widget on the mock canvas pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Widget {
    /// Identifier unique within one generated set, `widget-{i}`.
    pub id: String,
    pub kind: WidgetKind,
    /// Offset from the pane's top edge, in percent of the pane height.
    pub top_pct: f64,
    /// Offset from the pane's left edge, in percent of the pane width.
    pub left_pct: f64,
    /// Slight tilt either way, in degrees.
    pub rotation_deg: f64,
    /// Fixed width in pixels; text widgets are wider.
    pub width_px: u32,
    /// Fixed height in pixels.
    pub height_px: u32,
    /// Background color class from [`WIDGET_COLORS`].
    pub color: String,
    /// Corner class from [`WIDGET_CORNERS`].
    pub corner: String,
    /// Display text.
    pub content: String,
}

/// Generates a widget set with the thread-local RNG.
#[must_use]
pub fn generate_widgets() -> Vec<Widget> {
    generate_widgets_with(&mut rand::rng())
}

/// Generates between [`MIN_WIDGETS`] and [`MAX_WIDGETS`] widgets, all
/// randomness drawn from `rng`.
pub fn generate_widgets_with(rng: &mut impl Rng) -> Vec<Widget> {
    let count = rng.random_range(MIN_WIDGETS..=MAX_WIDGETS);
    (0..count).map(|i| build_widget(i, rng)).collect()
}

fn build_widget(i: usize, rng: &mut impl Rng) -> Widget {
    let kind = WIDGET_KINDS[rng.random_range(0..WIDGET_KINDS.len())];
    let content = match kind {
        WidgetKind::Text => TEXT_CONTENT.to_owned(),
        WidgetKind::StickyNote | WidgetKind::Shape => format!("Task {i}"),
    };
    Widget {
        id: format!("widget-{i}"),
        kind,
        top_pct: rng.random_range(5.0..90.0),
        left_pct: rng.random_range(5.0..90.0),
        rotation_deg: rng.random_range(-5.0..5.0),
        width_px: if kind == WidgetKind::Text { 150 } else { 100 },
        height_px: 100,
        color: WIDGET_COLORS[rng.random_range(0..WIDGET_COLORS.len())].to_owned(),
        corner: WIDGET_CORNERS[rng.random_range(0..WIDGET_CORNERS.len())].to_owned(),
        content,
    }
}
