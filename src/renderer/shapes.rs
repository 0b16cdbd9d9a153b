//! Shape generation for 2D primitives
//!
//! Everything is emitted as triangle lists in screen space (y down).

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering a rectangle
pub fn quad(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, r, t, b) = (rect.left(), rect.right(), rect.top(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// A quad of `size` centered on `center`, rotated counter-clockwise on
/// screen by `degrees`
pub fn rotated_quad(center: Vec2, size: Vec2, degrees: f32, color: [f32; 4]) -> [Vertex; 6] {
    let (sin, cos) = degrees.to_radians().sin_cos();
    // y points down, so a visual counter-clockwise turn flips the sign of sin
    let rotate = |p: Vec2| Vec2::new(p.x * cos + p.y * sin, -p.x * sin + p.y * cos) + center;

    let half = size / 2.0;
    let tl = rotate(Vec2::new(-half.x, -half.y));
    let tr = rotate(Vec2::new(half.x, -half.y));
    let bl = rotate(Vec2::new(-half.x, half.y));
    let br = rotate(Vec2::new(half.x, half.y));

    [
        Vertex::new(tl.x, tl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(bl.x, bl.y, color),
        Vertex::new(tr.x, tr.y, color),
        Vertex::new(br.x, br.y, color),
    ]
}

/// Hollow rectangle drawn inside `rect` with the given line thickness
pub fn rect_outline(rect: &Rect, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    let (l, top, w, h) = (rect.left(), rect.top(), rect.width(), rect.height());

    let edges = [
        Rect::new(l, top, w, t),
        Rect::new(l, top + h - t, w, t),
        Rect::new(l, top + t, t, h - 2.0 * t),
        Rect::new(l + w - t, top + t, t, h - 2.0 * t),
    ];

    let mut vertices = Vec::with_capacity(24);
    for edge in &edges {
        vertices.extend_from_slice(&quad(edge, color));
    }
    vertices
}
