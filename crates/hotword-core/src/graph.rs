//! Word-association graph rendering.
//!
//! scope index → association tree → radial layout → SVG curves.

use rand::Rng;

use crate::charset::CharFilter;
use crate::error::{MiningError, MiningResult};
use crate::layout;
use crate::mine::{DEFAULT_SEARCH_DEPTH, check_depth};
use crate::scope::ScopeIndex;
use crate::svg::{SvgDocument, SvgPath};
use crate::tree::{AssociationTree, NodeId, Point};

/// Default number of spline samples per segment.
pub const DEFAULT_INTERPOLATE_DENSITY: usize = 10;

const MARGIN: f64 = 50.0;
const NODE_RADIUS: f64 = 4.0;
const FONT_SIZE: f64 = 16.0;
const LABEL_OFFSET: f64 = 6.0;
const STROKE: &str = "#8c8c8c";
const STROKE_WIDTH: f64 = 1.0;
const NODE_FILL: &str = "#d9534f";

/// Parameters for [`build_association_graph`].
#[derive(Debug, Clone)]
pub struct GraphOptions {
    /// Scope length in code points, from 1 to [`MAX_SEARCH_DEPTH`](crate::mine::MAX_SEARCH_DEPTH).
    pub depth: usize,
    /// Root character of the tree.
    pub seed: char,
    /// Qualification rules for characters.
    pub filter: CharFilter,
    /// Spline samples per segment.
    pub density: usize,
    /// Leave out the character labels.
    pub hide_labels: bool,
}

impl GraphOptions {
    /// Options with defaults for everything but the seed.
    pub fn new(seed: char) -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            seed,
            filter: CharFilter::default(),
            density: DEFAULT_INTERPOLATE_DENSITY,
            hide_labels: false,
        }
    }
}

/// The first code point of `seed`.
pub fn seed_char(seed: &str) -> MiningResult<char> {
    seed.chars().next().ok_or(MiningError::EmptySeed)
}

/// Build, lay out and draw the association tree of `options.seed`.
///
/// Returns the serialized SVG document. Fails with
/// [`MiningError::MissingSeed`] when the seed never occurs in `text`.
#[tracing::instrument(skip(text, options, rng), fields(text_len = text.len(), seed = %options.seed, depth = options.depth))]
pub fn build_association_graph<R: Rng>(
    text: &str,
    options: &GraphOptions,
    rng: &mut R,
) -> MiningResult<String> {
    check_depth(options.depth)?;

    let buffer: Vec<char> = text.chars().collect();
    let index = ScopeIndex::build(&buffer, options.depth, &options.filter);
    let mut tree = AssociationTree::build(&index, options.seed, &options.filter)?;
    layout::layout(&mut tree, Point::default(), 0.0, rng);

    Ok(draw_tree(&tree, options.density, options.hide_labels).render())
}

/// Draw a laid-out tree.
///
/// Curves come first so nodes and labels paint over them. Every non-root
/// node contributes one curve through the chain of positions from the root
/// down to it, in depth-first order.
pub fn draw_tree(tree: &AssociationTree, density: usize, hide_labels: bool) -> SvgDocument {
    let mut doc = SvgDocument::new();
    let mut path = SvgPath::new();
    let mut chains: Vec<Option<Vec<Point>>> = vec![None; tree.len()];
    let mut bounds = Bounds::default();

    let order = tree.depth_first();
    for &id in &order {
        let node = tree.node(id);
        let Some(position) = node.position else {
            continue;
        };
        bounds.include(position);

        let mut chain = node
            .parent
            .and_then(|parent| chains[parent.index()].clone())
            .unwrap_or_default();
        chain.push(position);
        if chain.len() >= 2 {
            path.move_to(chain[0], true);
            path.draw_catmull_rom_splines(&chain, density);
        }
        chains[id.index()] = Some(chain);
    }
    doc.draw_path(&path, STROKE, STROKE_WIDTH);

    for &id in &order {
        draw_node(&mut doc, tree, id, hide_labels);
    }

    let (x, y, width, height) = bounds.view_box(MARGIN);
    doc.set_view_box(x, y, width, height);
    doc
}

fn draw_node(doc: &mut SvgDocument, tree: &AssociationTree, id: NodeId, hide_labels: bool) {
    let node = tree.node(id);
    let Some(position) = node.position else {
        return;
    };
    doc.draw_circle(position, NODE_RADIUS, NODE_FILL);
    if !hide_labels {
        let label_at = Point::new(position.x + LABEL_OFFSET, position.y - LABEL_OFFSET);
        doc.draw_text(label_at, &node.data.to_string(), FONT_SIZE);
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Bounds {
    min: Point,
    max: Point,
    seen: bool,
}

impl Bounds {
    fn include(&mut self, p: Point) {
        if self.seen {
            self.min = Point::new(self.min.x.min(p.x), self.min.y.min(p.y));
            self.max = Point::new(self.max.x.max(p.x), self.max.y.max(p.y));
        } else {
            self.min = p;
            self.max = p;
            self.seen = true;
        }
    }

    fn view_box(&self, margin: f64) -> (f64, f64, f64, f64) {
        (
            self.min.x - margin,
            self.min.y - margin,
            2.0f64.mul_add(margin, self.max.x - self.min.x),
            2.0f64.mul_add(margin, self.max.y - self.min.y),
        )
    }
}
