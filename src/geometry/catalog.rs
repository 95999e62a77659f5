//! Physical brick catalog and its mapping onto grid footprints
//!
//! The catalog is a closed, statically known table of standard bricks and plates.
//! A [`BrickPiece`] describes the physical part; a [`MosaicPiece`] binds it to the
//! viewing [`Orientation`] of a mosaic, which decides how many grid rows and columns
//! the part covers:
//!
//! | orientation | rows   | cols   |
//! |-------------|--------|--------|
//! | studs-out   | width  | length |
//! | studs-top   | height | length |
//! | studs-right | length | height |
//!
//! Width and length are measured in studs, height in plates (a brick is 3 plates).

use std::fmt;
use std::str::FromStr;

use crate::geometry::piece::{Piece, RectPiece};
use crate::io::error::MosaicError;
use crate::spatial::Location;

/// A physical catalog part, independent of color and orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrickPiece {
    /// Human readable name
    pub name: &'static str,
    /// LDraw part number
    pub id: &'static str,
    /// Width in studs
    pub width: usize,
    /// Length in studs
    pub length: usize,
    /// Height in plates
    pub height: usize,
    /// Approximate price per part in cents
    pub approximate_cost: u32,
}

impl BrickPiece {
    /// Footprint seen from above, in studs
    pub const fn stud_area(&self) -> usize {
        self.width * self.length
    }
}

impl fmt::Display for BrickPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

/// 2 x 4 brick, part 3001
pub const TWO_BY_FOUR: BrickPiece = BrickPiece {
    name: "2x4 brick",
    id: "3001",
    width: 2,
    length: 4,
    height: 3,
    approximate_cost: 20,
};

/// 2 x 3 brick, part 3002
pub const TWO_BY_THREE: BrickPiece = BrickPiece {
    name: "2x3 brick",
    id: "3002",
    width: 2,
    length: 3,
    height: 3,
    approximate_cost: 16,
};

/// 2 x 2 brick, part 3003
pub const TWO_BY_TWO: BrickPiece = BrickPiece {
    name: "2x2 brick",
    id: "3003",
    width: 2,
    length: 2,
    height: 3,
    approximate_cost: 12,
};

/// 1 x 4 brick, part 3010
pub const ONE_BY_FOUR: BrickPiece = BrickPiece {
    name: "1x4 brick",
    id: "3010",
    width: 1,
    length: 4,
    height: 3,
    approximate_cost: 12,
};

/// 1 x 3 brick, part 3622
pub const ONE_BY_THREE: BrickPiece = BrickPiece {
    name: "1x3 brick",
    id: "3622",
    width: 1,
    length: 3,
    height: 3,
    approximate_cost: 9,
};

/// 1 x 2 brick, part 3004
pub const ONE_BY_TWO: BrickPiece = BrickPiece {
    name: "1x2 brick",
    id: "3004",
    width: 1,
    length: 2,
    height: 3,
    approximate_cost: 7,
};

/// 1 x 1 brick, part 3005
pub const ONE_BY_ONE: BrickPiece = BrickPiece {
    name: "1x1 brick",
    id: "3005",
    width: 1,
    length: 1,
    height: 3,
    approximate_cost: 5,
};

/// 1 x 10 plate, part 4477
pub const ONE_BY_TEN_PLATE: BrickPiece = BrickPiece {
    name: "1x10 plate",
    id: "4477",
    width: 1,
    length: 10,
    height: 1,
    approximate_cost: 16,
};

/// 1 x 8 plate, part 3460
pub const ONE_BY_EIGHT_PLATE: BrickPiece = BrickPiece {
    name: "1x8 plate",
    id: "3460",
    width: 1,
    length: 8,
    height: 1,
    approximate_cost: 13,
};

/// 1 x 6 plate, part 3666
pub const ONE_BY_SIX_PLATE: BrickPiece = BrickPiece {
    name: "1x6 plate",
    id: "3666",
    width: 1,
    length: 6,
    height: 1,
    approximate_cost: 10,
};

/// 1 x 4 plate, part 3710
pub const ONE_BY_FOUR_PLATE: BrickPiece = BrickPiece {
    name: "1x4 plate",
    id: "3710",
    width: 1,
    length: 4,
    height: 1,
    approximate_cost: 8,
};

/// 1 x 3 plate, part 3623
pub const ONE_BY_THREE_PLATE: BrickPiece = BrickPiece {
    name: "1x3 plate",
    id: "3623",
    width: 1,
    length: 3,
    height: 1,
    approximate_cost: 6,
};

/// 1 x 2 plate, part 3023
pub const ONE_BY_TWO_PLATE: BrickPiece = BrickPiece {
    name: "1x2 plate",
    id: "3023",
    width: 1,
    length: 2,
    height: 1,
    approximate_cost: 5,
};

/// 1 x 1 plate, part 3024
pub const ONE_BY_ONE_PLATE: BrickPiece = BrickPiece {
    name: "1x1 plate",
    id: "3024",
    width: 1,
    length: 1,
    height: 1,
    approximate_cost: 4,
};

/// Full height bricks in descending order of area
pub const BRICKS: [BrickPiece; 7] = [
    TWO_BY_FOUR,
    TWO_BY_THREE,
    TWO_BY_TWO,
    ONE_BY_FOUR,
    ONE_BY_THREE,
    ONE_BY_TWO,
    ONE_BY_ONE,
];

/// Plates in descending order of area
pub const PLATES: [BrickPiece; 7] = [
    ONE_BY_TEN_PLATE,
    ONE_BY_EIGHT_PLATE,
    ONE_BY_SIX_PLATE,
    ONE_BY_FOUR_PLATE,
    ONE_BY_THREE_PLATE,
    ONE_BY_TWO_PLATE,
    ONE_BY_ONE_PLATE,
];

/// Bricks followed by plates
pub const ALL_PIECES: [BrickPiece; 14] = [
    TWO_BY_FOUR,
    TWO_BY_THREE,
    TWO_BY_TWO,
    ONE_BY_FOUR,
    ONE_BY_THREE,
    ONE_BY_TWO,
    ONE_BY_ONE,
    ONE_BY_TEN_PLATE,
    ONE_BY_EIGHT_PLATE,
    ONE_BY_SIX_PLATE,
    ONE_BY_FOUR_PLATE,
    ONE_BY_THREE_PLATE,
    ONE_BY_TWO_PLATE,
    ONE_BY_ONE_PLATE,
];

/// How every brick of a mosaic faces the viewer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Top down, studs towards the viewer; rows and columns are one stud each
    #[default]
    StudsOut,
    /// Side view with studs up; rows are one plate high, columns one stud wide
    StudsTop,
    /// Side view with studs to the right; rows are one stud high, columns one plate wide
    StudsRight,
}

impl Orientation {
    /// All orientations
    pub const ALL: [Self; 3] = [Self::StudsOut, Self::StudsTop, Self::StudsRight];

    /// Grid footprint (rows, cols) of `brick` in this orientation
    pub const fn footprint(self, brick: &BrickPiece) -> (usize, usize) {
        match self {
            Self::StudsOut => (brick.width, brick.length),
            Self::StudsTop => (brick.height, brick.length),
            Self::StudsRight => (brick.length, brick.height),
        }
    }

    /// Command line spelling of the orientation
    pub const fn name(self) -> &'static str {
        match self {
            Self::StudsOut => "studs-out",
            Self::StudsTop => "studs-top",
            Self::StudsRight => "studs-right",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = MosaicError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|orientation| orientation.name() == normalized)
            .ok_or_else(|| MosaicError::InvalidOrientation {
                value: value.to_string(),
            })
    }
}

impl TryFrom<u8> for Orientation {
    type Error = MosaicError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::StudsOut),
            1 => Ok(Self::StudsTop),
            2 => Ok(Self::StudsRight),
            _ => Err(MosaicError::InvalidOrientation {
                value: value.to_string(),
            }),
        }
    }
}

/// A catalog part bound to an orientation, with its concrete grid footprint
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MosaicPiece {
    brick: BrickPiece,
    orientation: Orientation,
    footprint: RectPiece,
}

impl MosaicPiece {
    /// Bind `brick` to `orientation`
    pub fn new(brick: BrickPiece, orientation: Orientation) -> Self {
        let (rows, cols) = orientation.footprint(&brick);
        Self {
            brick,
            orientation,
            footprint: RectPiece::new(rows, cols),
        }
    }

    /// The same part lying the other way round in the same orientation
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            brick: self.brick,
            orientation: self.orientation,
            footprint: self.footprint.transposed(),
        }
    }

    /// The physical part
    pub const fn brick(&self) -> &BrickPiece {
        &self.brick
    }

    /// The orientation the footprint was derived for
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Whether the footprint has as many rows as columns
    pub fn is_square(&self) -> bool {
        self.footprint.rows() == self.footprint.cols()
    }
}

impl Piece for MosaicPiece {
    fn extent(&self) -> &[Location] {
        self.footprint.extent()
    }

    fn rows(&self) -> usize {
        self.footprint.rows()
    }

    fn cols(&self) -> usize {
        self.footprint.cols()
    }
}

impl fmt::Display for MosaicPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{} {}",
            self.brick.name,
            self.rows(),
            self.cols(),
            self.orientation
        )
    }
}

/// Bind every part of `catalog` to `orientation`, preserving catalog order
pub fn pieces_for_orientation(orientation: Orientation, catalog: &[BrickPiece]) -> Vec<MosaicPiece> {
    catalog
        .iter()
        .map(|&brick| MosaicPiece::new(brick, orientation))
        .collect()
}

/// Insert the quarter-turned footprint directly after each non-square piece
pub fn with_rotations(pieces: Vec<MosaicPiece>) -> Vec<MosaicPiece> {
    let mut result = Vec::with_capacity(pieces.len() * 2);
    for piece in pieces {
        let rotated = (!piece.is_square()).then(|| piece.rotated());
        result.push(piece);
        result.extend(rotated);
    }
    result
}

/// Stable sort putting the largest footprint first, cheaper parts first on ties
pub fn sort_largest_first(pieces: &mut [MosaicPiece]) {
    pieces.sort_by(|a, b| {
        b.area()
            .cmp(&a.area())
            .then_with(|| a.brick.approximate_cost.cmp(&b.brick.approximate_cost))
    });
}

/// Piece selection handed to mosaic assembly
///
/// Candidate order is authoritative for the solvers: the first piece that fits wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Parts available, best first
    pub bricks: Vec<BrickPiece>,
    /// Also offer each non-square footprint turned a quarter turn
    pub include_rotations: bool,
    /// Re-sort candidates by descending area instead of keeping catalog order
    pub largest_first: bool,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// Catalog over `bricks` in the given order
    pub const fn new(bricks: Vec<BrickPiece>) -> Self {
        Self {
            bricks,
            include_rotations: false,
            largest_first: false,
        }
    }

    /// Every standard brick and plate
    pub fn standard() -> Self {
        Self::new(ALL_PIECES.to_vec())
    }

    /// Ordered candidate pieces for a mosaic in `orientation`
    pub fn pieces_for(&self, orientation: Orientation) -> Vec<MosaicPiece> {
        let mut pieces = pieces_for_orientation(orientation, &self.bricks);
        if self.include_rotations {
            pieces = with_rotations(pieces);
        }
        if self.largest_first {
            sort_largest_first(&mut pieces);
        }
        pieces
    }
}
