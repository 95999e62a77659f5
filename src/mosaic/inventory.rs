//! Parts lists derived from a solved plan

use std::collections::BTreeMap;

use crate::geometry::{BrickPiece, MosaicPiece, Piece};
use crate::mosaic::palette::BrickColor;

/// How much of one color a mosaic consumes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Usage {
    /// Number of placed parts
    pub num_pieces: usize,
    /// Grid cells covered by those parts
    pub area: usize,
    /// Summed approximate part cost in cents
    pub approximate_cost: u32,
}

/// Placed parts grouped by color
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    pieces: BTreeMap<BrickColor, Vec<MosaicPiece>>,
}

impl Inventory {
    /// An empty inventory
    pub const fn new() -> Self {
        Self {
            pieces: BTreeMap::new(),
        }
    }

    /// Record one placed part
    pub fn add(&mut self, color: BrickColor, piece: MosaicPiece) {
        self.pieces.entry(color).or_default().push(piece);
    }

    /// Parts placed in `color`, in placement order
    pub fn pieces_for_color(&self, color: &BrickColor) -> &[MosaicPiece] {
        self.pieces.get(color).map(Vec::as_slice).unwrap_or_default()
    }

    /// Colors used, ordered by color id
    pub fn colors(&self) -> impl Iterator<Item = &BrickColor> {
        self.pieces.keys()
    }

    /// Total number of placed parts
    pub fn total_pieces(&self) -> usize {
        self.pieces.values().map(Vec::len).sum()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Usage per color
    pub fn usage_for_color_map(&self) -> BTreeMap<BrickColor, Usage> {
        self.pieces
            .iter()
            .map(|(&color, pieces)| {
                let usage = pieces.iter().fold(Usage::default(), |usage, piece| Usage {
                    num_pieces: usage.num_pieces + 1,
                    area: usage.area + piece.area(),
                    approximate_cost: usage.approximate_cost + piece.brick().approximate_cost,
                });
                (color, usage)
            })
            .collect()
    }

    /// Colors by descending piece count; equal counts keep color id order
    pub fn descending_usage(&self) -> Vec<(BrickColor, Usage)> {
        let mut usages: Vec<_> = self.usage_for_color_map().into_iter().collect();
        usages.sort_by(|a, b| b.1.num_pieces.cmp(&a.1.num_pieces));
        usages
    }

    /// How many of each catalog part `color` needs
    pub fn parts_for_color(&self, color: &BrickColor) -> BTreeMap<BrickPiece, usize> {
        let mut parts = BTreeMap::new();
        for piece in self.pieces_for_color(color) {
            *parts.entry(*piece.brick()).or_insert(0) += 1;
        }
        parts
    }

    /// Estimated cost of every part in cents
    pub fn approximate_cost(&self) -> u32 {
        self.pieces
            .values()
            .flatten()
            .map(|piece| piece.brick().approximate_cost)
            .sum()
    }
}
