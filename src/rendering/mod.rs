use glam::Vec2;
use macroquad::prelude as mq;

use crate::domain::Polygon;

/// Plain 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const DARK_GREY: Rgb = Rgb(47, 79, 79);
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const SILVER: Rgb = Rgb(192, 192, 192);
}

impl From<Rgb> for mq::Color {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        mq::Color::from_rgba(r, g, b, 255)
    }
}

/// Colors and line width handed to the draw sink
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub fill: Rgb,
    pub outline: Rgb,
    pub outline_width: f32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::DARK_GREY,
            fill: Rgb::SILVER,
            outline: Rgb::BLACK,
            outline_width: 3.0,
        }
    }
}

/// Anything that can paint closed 2D outlines
pub trait DrawSink {
    fn clear(&mut self, color: Rgb);

    fn draw_polygon(&mut self, points: &[Vec2], fill: Rgb, outline: Rgb, outline_width: f32);
}

/// Clear the target and paint polygons in the given (back-to-front) order
pub fn draw_frame(sink: &mut impl DrawSink, polygons: &[Polygon], palette: &Palette) {
    sink.clear(palette.background);
    for polygon in polygons {
        sink.draw_polygon(
            &polygon.points,
            palette.fill,
            palette.outline,
            palette.outline_width,
        );
    }
}

/// Draw sink backed by the macroquad window
pub struct MacroquadSink;

impl DrawSink for MacroquadSink {
    fn clear(&mut self, color: Rgb) {
        mq::clear_background(color.into());
    }

    fn draw_polygon(&mut self, points: &[Vec2], fill: Rgb, outline: Rgb, outline_width: f32) {
        let corners = match points {
            [first, .., last] if first == last => &points[..points.len() - 1],
            _ => points,
        };
        let [first, rest @ ..] = corners else {
            return;
        };
        let to_mq = |p: Vec2| mq::vec2(p.x, p.y);

        // Fan triangulation; projected cube faces are convex
        let fill = fill.into();
        for pair in rest.windows(2) {
            mq::draw_triangle(to_mq(*first), to_mq(pair[0]), to_mq(pair[1]), fill);
        }

        let outline = outline.into();
        for edge in points.windows(2) {
            mq::draw_line(edge[0].x, edge[0].y, edge[1].x, edge[1].y, outline_width, outline);
        }
    }
}
