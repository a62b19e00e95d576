//! Radial layout of an association tree.
//!
//! Children fan out from their parent in a zig-zag: the first child keeps
//! the parent's direction, the following ones alternate sides with a
//! growing angle. Nodes with many children are pushed further away so their
//! own fans have room.

use std::f64::consts::PI;

use rand::Rng;

use crate::tree::{AssociationTree, NodeId, Point};

/// Distance from a parent to a childless child.
const BASE_RADIUS: f64 = 100.0;

/// Extra distance per grandchild.
const RADIUS_STEP: f64 = 30.0;

/// Grandchildren beyond this count add no distance.
const MAX_RADIUS_STEPS: usize = 20;

/// Angle between neighbouring children of a node with `k` children.
pub fn angular_step(k: usize) -> f64 {
    (2.0 * PI * (5.0 / 6.0) / k.max(2) as f64).min(PI / 6.0)
}

/// Distance from a parent to a child that has `grandchildren` children.
pub fn child_radius(grandchildren: usize) -> f64 {
    (grandchildren.min(MAX_RADIUS_STEPS) as f64).mul_add(RADIUS_STEP, BASE_RADIUS)
}

/// Assign a position and rotation to every node of `tree`.
///
/// The root is placed at `origin` facing `angle` (radians). The side each
/// node's fan starts on is one coin flip drawn from `rng`; pass a seeded
/// generator for reproducible output.
#[tracing::instrument(skip(tree, rng), fields(nodes = tree.len()))]
pub fn layout<R: Rng>(tree: &mut AssociationTree, origin: Point, angle: f64, rng: &mut R) {
    let root = tree.root();
    place(tree, root, origin, angle, rng);
}

fn place<R: Rng>(
    tree: &mut AssociationTree,
    id: NodeId,
    position: Point,
    angle: f64,
    rng: &mut R,
) {
    let node = tree.node_mut(id);
    node.position = Some(position);
    node.rotation = Some(angle);

    let children = tree.node(id).children.clone();
    if children.is_empty() {
        return;
    }

    let delta = angular_step(children.len());
    let mut sign: f64 = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
    let mut accumulated: f64 = 0.0;

    for (i, child) in children.into_iter().enumerate() {
        let radius = child_radius(tree.node(child).children.len());
        let child_angle = accumulated.mul_add(sign, angle);
        let child_position = Point::new(
            radius.mul_add(child_angle.cos(), position.x),
            radius.mul_add(child_angle.sin(), position.y),
        );
        place(tree, child, child_position, child_angle, rng);

        if i % 2 == 0 {
            accumulated += delta;
        }
        sign = -sign;
    }
}
