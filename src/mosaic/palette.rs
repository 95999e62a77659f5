//! Brick colors and the palettes images are reduced to
//!
//! Color ids and RGB values follow the LEGO color numbering as listed in the Peeron
//! color guide. Colors compare and sort by id, which fixes the order in which color
//! regions are solved and reported.

use std::fmt;
use std::str::FromStr;

use crate::io::error::{MosaicError, invalid_parameter};

/// A buildable brick color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BrickColor {
    /// LEGO color number
    pub id: u32,
    /// Human readable color name
    pub name: &'static str,
    /// Approximate sRGB value
    pub rgb: [u8; 3],
}

impl BrickColor {
    /// Create a color entry
    pub const fn new(id: u32, name: &'static str, rgb: [u8; 3]) -> Self {
        Self { id, name, rgb }
    }

    /// Squared Euclidean distance to `rgb` in RGB space
    pub const fn distance_squared(&self, rgb: [u8; 3]) -> u32 {
        let dr = self.rgb[0].abs_diff(rgb[0]) as u32;
        let dg = self.rgb[1].abs_diff(rgb[1]) as u32;
        let db = self.rgb[2].abs_diff(rgb[2]) as u32;
        dr * dr + dg * dg + db * db
    }
}

impl fmt::Display for BrickColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// White, color 1
pub const WHITE: BrickColor = BrickColor::new(1, "White", [242, 243, 242]);

/// Grey, color 2
pub const GREY: BrickColor = BrickColor::new(2, "Grey", [161, 165, 162]);

/// Black, color 26
pub const BLACK: BrickColor = BrickColor::new(26, "Black", [27, 42, 52]);

/// Bright Red, color 21
pub const BRIGHT_RED: BrickColor = BrickColor::new(21, "Bright Red", [196, 40, 27]);

/// Bright Blue, color 23
pub const BRIGHT_BLUE: BrickColor = BrickColor::new(23, "Bright Blue", [13, 105, 171]);

/// Bright Yellow, color 24
pub const BRIGHT_YELLOW: BrickColor = BrickColor::new(24, "Bright Yellow", [245, 205, 47]);

/// Dark Grey, color 27
pub const DARK_GREY: BrickColor = BrickColor::new(27, "Dark Grey", [109, 110, 108]);

/// Light Grey, color 103
pub const LIGHT_GREY: BrickColor = BrickColor::new(103, "Light Grey", [199, 193, 183]);

/// Dark Stone Grey, color 199
pub const DARK_STONE_GREY: BrickColor = BrickColor::new(199, "Dark Stone Grey", [99, 95, 97]);

/// Earth Green, color 141
pub const EARTH_GREEN: BrickColor = BrickColor::new(141, "Earth Green", [39, 70, 44]);

/// Light Stone Grey, color 208
pub const LIGHT_STONE_GREY: BrickColor = BrickColor::new(208, "Light Stone Grey", [229, 228, 222]);

/// Every known solid, transparent and metallic color
pub const FULL_PALETTE: [BrickColor; 111] = [
    WHITE,
    GREY,
    BrickColor::new(3, "Light Yellow", [249, 233, 153]),
    BrickColor::new(5, "Brick Yellow", [215, 197, 153]),
    BrickColor::new(6, "Light Green", [194, 218, 184]),
    BrickColor::new(9, "Light Reddish Violet", [232, 186, 199]),
    BrickColor::new(12, "Light Orange Brown", [203, 132, 66]),
    BrickColor::new(18, "Nougat", [204, 142, 104]),
    BRIGHT_RED,
    BrickColor::new(22, "Med Reddish Violet", [196, 112, 160]),
    BRIGHT_BLUE,
    BRIGHT_YELLOW,
    BrickColor::new(25, "Earth Orange", [98, 71, 50]),
    BLACK,
    DARK_GREY,
    BrickColor::new(28, "Dark Green", [40, 127, 70]),
    BrickColor::new(29, "Medium Green", [161, 196, 139]),
    BrickColor::new(36, "Light Yellowish Orange", [243, 207, 155]),
    BrickColor::new(37, "Bright Green", [75, 151, 74]),
    BrickColor::new(38, "Dark Orange", [160, 95, 52]),
    BrickColor::new(39, "Light Bluish Violet", [193, 202, 222]),
    BrickColor::new(45, "Light Blue", [180, 210, 227]),
    BrickColor::new(100, "Light Red", [238, 196, 182]),
    BrickColor::new(101, "Medium Red", [218, 134, 121]),
    BrickColor::new(102, "Medium Blue", [110, 153, 201]),
    LIGHT_GREY,
    BrickColor::new(104, "Bright Violet", [107, 50, 123]),
    BrickColor::new(105, "Bright Yellowish Orange", [226, 155, 63]),
    BrickColor::new(106, "Bright Orange", [218, 133, 64]),
    BrickColor::new(107, "Bright Bluish Green", [0, 143, 155]),
    BrickColor::new(108, "Earth Yellow", [104, 92, 67]),
    BrickColor::new(110, "Bright Bluish Violet", [67, 84, 147]),
    BrickColor::new(112, "Medium Bluish Violet", [104, 116, 172]),
    BrickColor::new(115, "Med Yellowish Green", [199, 210, 60]),
    BrickColor::new(116, "Med Bluish Green", [85, 165, 175]),
    BrickColor::new(118, "Light Bluish Green", [183, 215, 213]),
    BrickColor::new(119, "Br Yellowish Green", [164, 189, 70]),
    BrickColor::new(120, "Lig Yellowish Green", [217, 228, 167]),
    BrickColor::new(121, "Med Yellowish Orange", [231, 172, 88]),
    BrickColor::new(123, "Br Reddish Orange", [211, 111, 76]),
    BrickColor::new(124, "Bright Reddish Violet", [146, 57, 120]),
    BrickColor::new(125, "Light Orange", [234, 184, 145]),
    BrickColor::new(127, "Gold", [220, 188, 129]),
    BrickColor::new(128, "Dark Nougat", [174, 122, 89]),
    BrickColor::new(131, "Silver", [156, 163, 168]),
    BrickColor::new(135, "Sand Blue", [116, 134, 156]),
    BrickColor::new(136, "Sand Violet", [135, 124, 144]),
    BrickColor::new(137, "Medium Orange", [224, 152, 100]),
    BrickColor::new(138, "Sand Yellow", [149, 138, 115]),
    BrickColor::new(140, "Earth Blue", [32, 58, 86]),
    EARTH_GREEN,
    BrickColor::new(145, "Sand Blue Metallic", [121, 136, 161]),
    BrickColor::new(146, "Sand Violet Metallic", [149, 142, 163]),
    BrickColor::new(147, "Sand Yellow Metallic", [147, 135, 103]),
    BrickColor::new(148, "Dark Grey Metallic", [87, 88, 87]),
    BrickColor::new(149, "Black Metallic", [22, 29, 50]),
    BrickColor::new(150, "Light Grey Metallic", [171, 173, 172]),
    BrickColor::new(151, "Sand", [10, 120, 144]),
    BrickColor::new(153, "Sand Red", [149, 121, 118]),
    BrickColor::new(154, "Dark Red", [123, 46, 47]),
    BrickColor::new(168, "Gun", [15, 117, 108]),
    BrickColor::new(180, "Curry", [215, 169, 75]),
    BrickColor::new(200, "Lemon Metallic", [130, 138, 93]),
    BrickColor::new(190, "Fire Yellow", [249, 214, 46]),
    BrickColor::new(191, "Flame Yellowish Orange", [232, 171, 45]),
    BrickColor::new(192, "Reddish Brown", [105, 64, 39]),
    BrickColor::new(193, "Flame Reddish Orange", [207, 96, 36]),
    BrickColor::new(194, "Medium Stone Grey", [163, 162, 164]),
    BrickColor::new(195, "Royal Blue", [70, 103, 164]),
    BrickColor::new(196, "Dark Royal Blue", [35, 71, 139]),
    BrickColor::new(198, "Bright Reddish Lilac", [142, 66, 133]),
    DARK_STONE_GREY,
    LIGHT_STONE_GREY,
    BrickColor::new(209, "Dark Curry", [176, 142, 68]),
    BrickColor::new(210, "Faded Green", [112, 149, 120]),
    BrickColor::new(211, "Turquoise", [121, 181, 181]),
    BrickColor::new(212, "Light Royal Blue", [159, 195, 233]),
    BrickColor::new(213, "Medium Royal Blue", [108, 129, 183]),
    BrickColor::new(216, "Rust", [143, 76, 42]),
    BrickColor::new(217, "Brown", [124, 92, 69]),
    BrickColor::new(218, "Reddish Lilac", [150, 112, 159]),
    BrickColor::new(219, "Lilac", [107, 98, 155]),
    BrickColor::new(220, "Light Lilac", [167, 169, 206]),
    BrickColor::new(221, "Bright Purple", [205, 98, 152]),
    BrickColor::new(222, "Light Purple", [228, 173, 200]),
    BrickColor::new(223, "Light Pink", [220, 144, 149]),
    BrickColor::new(224, "Light Brick Yellow", [240, 213, 160]),
    BrickColor::new(225, "Warm Yellowish Orange", [235, 184, 127]),
    BrickColor::new(226, "Cool Yellow", [253, 234, 140]),
    BrickColor::new(232, "Dove Blue", [125, 187, 221]),
    BrickColor::new(268, "Medium Lilac", [52, 43, 117]),
    BrickColor::new(40, "Transparent", [236, 236, 236]),
    BrickColor::new(41, "Tr Red", [205, 84, 75]),
    BrickColor::new(42, "Tr Lg Blue", [193, 223, 240]),
    BrickColor::new(43, "Tr Blue", [123, 182, 232]),
    BrickColor::new(44, "Tr Yellow", [247, 241, 141]),
    BrickColor::new(47, "Tr Flu Reddish Orange", [217, 133, 108]),
    BrickColor::new(48, "Tr Green", [132, 182, 141]),
    BrickColor::new(49, "Tr Flu Green", [248, 241, 132]),
    BrickColor::new(50, "Phosph White", [236, 232, 222]),
    BrickColor::new(111, "Tr Brown", [191, 183, 177]),
    BrickColor::new(113, "Tr Medi Reddish Violet", [228, 173, 200]),
    BrickColor::new(126, "Tr Bright Bluish Violet", [165, 165, 203]),
    BrickColor::new(133, "Neon Orange", [213, 115, 61]),
    BrickColor::new(134, "Neon Green", [216, 221, 86]),
    BrickColor::new(143, "Tr Flu Blue", [207, 226, 247]),
    BrickColor::new(157, "Tr Flu Yellow", [255, 246, 123]),
    BrickColor::new(158, "Tr Flu Red", [225, 164, 194]),
    BrickColor::new(176, "Red Flip Flop", [151, 105, 91]),
    BrickColor::new(178, "Yellow Flip Flop", [180, 132, 85]),
    BrickColor::new(179, "Silver Flip Flop", [137, 135, 136]),
];

/// The basic colors available in most bulk sets
pub const LIMITED_PALETTE: [BrickColor; 7] = [
    WHITE,
    GREY,
    BLACK,
    BRIGHT_RED,
    BRIGHT_BLUE,
    BRIGHT_YELLOW,
    DARK_GREY,
];

/// Greyscale ramp plus a few primaries for accents
pub const GRAY_PLUS_PALETTE: [BrickColor; 11] = [
    WHITE,
    GREY,
    BLACK,
    DARK_GREY,
    LIGHT_GREY,
    DARK_STONE_GREY,
    EARTH_GREEN,
    LIGHT_STONE_GREY,
    BRIGHT_RED,
    BRIGHT_BLUE,
    BRIGHT_YELLOW,
];

/// Palette closest to `rgb`; the earliest entry wins ties
///
/// Returns `None` only for an empty palette.
pub fn nearest_color(palette: &[BrickColor], rgb: [u8; 3]) -> Option<BrickColor> {
    palette
        .iter()
        .min_by_key(|color| color.distance_squared(rgb))
        .copied()
}

/// Named palettes selectable at run time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaletteKind {
    /// [`FULL_PALETTE`]
    Full,
    /// [`LIMITED_PALETTE`]
    #[default]
    Limited,
    /// [`GRAY_PLUS_PALETTE`]
    GrayPlus,
}

impl PaletteKind {
    /// All named palettes
    pub const ALL: [Self; 3] = [Self::Full, Self::Limited, Self::GrayPlus];

    /// Command line spelling of the palette
    pub const fn name(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Limited => "limited",
            Self::GrayPlus => "gray-plus",
        }
    }

    /// Colors of this palette
    pub const fn colors(self) -> &'static [BrickColor] {
        match self {
            Self::Full => &FULL_PALETTE,
            Self::Limited => &LIMITED_PALETTE,
            Self::GrayPlus => &GRAY_PLUS_PALETTE,
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PaletteKind {
    type Err = MosaicError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| {
                invalid_parameter("palette", &value, &"expected full, limited or gray-plus")
            })
    }
}
