//! Line-list outlines for bodies and their boxes
//!
//! Every function returns vertices in pairs, one pair per segment, in world
//! coordinates. Use `to_pixels` to move a batch into pane coordinates.

use glam::Vec2;

use super::vertex::{Vertex, colors};
use crate::rotate_point_around;
use crate::sim::{AxisAlignedBox, Body, BodyKind, Field, OrientedBox};
use crate::world::World;

/// Close a polygon into segment pairs
fn closed_loop(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(points.len() * 2);
    for (i, p) in points.iter().enumerate() {
        let q = points[(i + 1) % points.len()];
        vertices.push(Vertex::at(*p, color));
        vertices.push(Vertex::at(q, color));
    }
    vertices
}

/// Outline of a broad-phase box; empty if the box is not drawn
pub fn axis_aligned_box_outline(bbox: &AxisAlignedBox) -> Vec<Vertex> {
    match bbox.color().rgba() {
        Some(color) => closed_loop(&bbox.corners(), color),
        None => Vec::new(),
    }
}

/// Outline of a narrow-phase box at its angle; empty if the box is not drawn
pub fn oriented_box_outline(obb: &OrientedBox) -> Vec<Vertex> {
    match obb.color().rgba() {
        Some(color) => closed_loop(&obb.corners(), color),
        None => Vec::new(),
    }
}

/// Body shape placed at its position and angle.
///
/// Asteroids are drawn as their footprint rectangle. The ship is an arrow
/// whose nose points along +y before rotation.
pub fn body_outline(body: &Body) -> Vec<Vertex> {
    let h = body.half_extents();
    let (shape, color): (Vec<Vec2>, _) = match body.kind() {
        BodyKind::Asteroid => (
            vec![
                Vec2::new(-h.x, -h.y),
                Vec2::new(h.x, -h.y),
                Vec2::new(h.x, h.y),
                Vec2::new(-h.x, h.y),
            ],
            colors::ASTEROID,
        ),
        BodyKind::Ship => (
            vec![
                Vec2::new(0.0, h.y),
                Vec2::new(h.x, -h.y),
                Vec2::new(0.0, -h.y * 0.5),
                Vec2::new(-h.x, -h.y),
            ],
            colors::SHIP,
        ),
    };

    let p = body.position();
    let placed: Vec<Vec2> = shape
        .into_iter()
        .map(|v| rotate_point_around(v + p, p, body.angle()))
        .collect();
    closed_loop(&placed, color)
}

/// Outline of the world rectangle
pub fn world_outline(world: &World) -> Vec<Vertex> {
    let corners = [
        Vec2::new(world.x_min, world.y_min),
        Vec2::new(world.x_max, world.y_min),
        Vec2::new(world.x_max, world.y_max),
        Vec2::new(world.x_min, world.y_max),
    ];
    closed_loop(&corners, colors::WORLD_EDGE)
}

/// Everything in the field: world edge, bodies, then their boxes
pub fn field_vertices(field: &Field) -> Vec<Vertex> {
    let mut vertices = world_outline(&field.world);
    for body in std::iter::once(&field.ship).chain(&field.asteroids) {
        vertices.extend(body_outline(body));
        vertices.extend(axis_aligned_box_outline(body.axis_aligned_box()));
        vertices.extend(oriented_box_outline(body.oriented_box()));
    }
    vertices
}

/// Convert a batch from world to pixel coordinates in place
pub fn to_pixels(world: &World, vertices: &mut [Vertex]) {
    for v in vertices {
        v.position = world.world_to_pixel(v.pos()).to_array();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::BoxColor;

    const EPS: f32 = 1e-4;

    #[test]
    fn test_hidden_boxes_draw_nothing() {
        let body = Body::asteroid(1, Vec2::ZERO, 30.0, 0.0, 2.0, 1.0, Vec2::ZERO);
        assert!(axis_aligned_box_outline(body.axis_aligned_box()).is_empty());
        assert!(oriented_box_outline(body.oriented_box()).is_empty());
        assert_eq!(body_outline(&body).len(), 8);
    }

    #[test]
    fn test_box_outline_is_closed() {
        let body = Body::asteroid(1, Vec2::new(1.0, 1.0), 0.0, 0.0, 2.0, 2.0, Vec2::ZERO)
            .with_box_color(BoxColor::Yellow);
        let verts = oriented_box_outline(body.oriented_box());
        assert_eq!(verts.len(), 8);
        assert_eq!(verts[0].pos(), verts[7].pos());
        assert_eq!(verts[0].color, BoxColor::Yellow.rgba().unwrap());
        for pair in verts.chunks(2) {
            assert!((pair[0].pos() - pair[1].pos()).length() > 0.0);
        }
    }

    #[test]
    fn test_ship_nose_follows_angle() {
        let mut ship = Body::ship(0, Vec2::new(2.0, 0.0));
        ship.set_angle(90.0);
        let nose = body_outline(&ship)[0].pos();
        // Nose turned from +y to -x
        assert!((nose - Vec2::new(2.0 - ship.half_extents().y, 0.0)).length() < EPS);
    }

    #[test]
    fn test_field_vertices_cover_every_body() {
        let mut settings = Settings::default();
        settings.show_bounding_boxes = true;
        let field = Field::new(&settings).unwrap();
        let bodies = field.asteroids.len() + 1;
        // World edge plus three 4-segment loops per body
        assert_eq!(field_vertices(&field).len(), 8 + bodies * 3 * 8);
    }

    #[test]
    fn test_to_pixels() {
        let mut world = World::default();
        world.set_scaling_ratios(200, 200);
        let mut verts = world_outline(&world);
        to_pixels(&world, &mut verts);
        // Lower-left world corner lands at the bottom-left of the pane
        assert!((verts[0].pos() - Vec2::new(0.0, 200.0)).length() < EPS);
    }
}
