// SPDX-License-Identifier: MPL-2.0
//! Busy spinner drawn on a Canvas.
//!
//! The rotation angle is owned by the caller and advanced on the app tick,
//! so the widget itself stays stateless between frames.

use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::PI;

const STROKE_WIDTH: f32 = 3.0;
const ARC_SEGMENTS: usize = 24;
/// Sweep of each of the two opposing arcs.
const ARC_SWEEP: f32 = 2.0 * PI / 3.0;

/// Spinner with two opposing arcs rotating around a faint track.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    /// Creates a spinner at the given rotation angle (radians).
    #[must_use]
    pub fn new(color: Color, rotation: f32, size: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size,
        }
    }

    /// Wraps the spinner in a fixed-size Canvas element.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    fn arc_path(center: Point, radius: f32, start: f32, sweep: f32) -> Path {
        let mut builder = canvas::path::Builder::new();
        builder.move_to(point_on_circle(center, radius, start));
        for i in 1..=ARC_SEGMENTS {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f32 / ARC_SEGMENTS as f32;
            builder.line_to(point_on_circle(center, radius, start + sweep * t));
        }
        builder.build()
    }
}

fn point_on_circle(center: Point, radius: f32, angle: f32) -> Point {
    Point::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - STROKE_WIDTH;

                // Faint full-circle track behind the arcs.
                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(STROKE_WIDTH)
                        .with_color(Color {
                            a: 0.2,
                            ..self.color
                        }),
                );

                let stroke = Stroke::default()
                    .with_width(STROKE_WIDTH)
                    .with_color(self.color)
                    .with_line_cap(canvas::LineCap::Round);

                // Two opposing arcs give the spinner an even visual weight.
                for offset in [0.0, PI] {
                    let start = self.rotation + offset - PI / 2.0;
                    frame.stroke(&Self::arc_path(center, radius, start, ARC_SWEEP), stroke);
                }
            });

        vec![geometry]
    }
}
