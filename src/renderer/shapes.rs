//! Shape generation for 2D primitives

use glam::Vec2;

use super::extract::{RenderItem, extract};
use super::vertex::{Vertex, colors};
use crate::sim::{EntityKind, Session};

/// Two triangles covering an axis-aligned rectangle
pub fn rect(min: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let max = min + size;
    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

fn item_color(item: &RenderItem) -> [f32; 4] {
    match (item.kind, item.color) {
        (_, Some(color)) => color.to_f32(),
        (EntityKind::Ball, None) => colors::BALL,
        (_, None) => colors::PADDLE,
    }
}

/// Triangle list for the whole scene. Destroyed blocks are not drawn.
pub fn scene_vertices(session: &Session) -> Vec<Vertex> {
    let items = extract(session);
    let mut vertices = Vec::with_capacity(items.len() * 6);

    for item in items.iter().filter(|i| !i.destroyed) {
        vertices.extend_from_slice(&rect(item.pos, item.size(), item_color(item)));
    }

    vertices
}
