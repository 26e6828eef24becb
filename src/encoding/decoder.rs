//! Unpacks a digest into the patch selections and colours of one identicon

use crate::encoding::digest::Digest;
use crate::geometry::patch::PatchCatalog;
use crate::io::configuration::BACKGROUND_RGB;
use image::Rgb;

/// Bit range of the digest, counted from the least significant bit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitRange {
    /// Index of the lowest bit
    pub offset: usize,
    /// Number of bits
    pub width: usize,
}

impl BitRange {
    /// Create a bit range
    pub const fn new(offset: usize, width: usize) -> Self {
        Self { offset, width }
    }

    /// Read this range out of `digest`
    pub fn read(self, digest: &Digest) -> u32 {
        digest.field(self.offset, self.width)
    }

    /// Read a single-bit range as a flag
    pub fn flag(self, digest: &Digest) -> bool {
        self.read(digest) != 0
    }
}

/// Chosen patch, invert flag and base rotation for one tile ring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchSelection {
    /// Catalog index of the patch
    pub index: usize,
    /// Swap foreground and background for this patch
    pub invert: bool,
    /// Base rotation in quarter turns
    pub rotation: u32,
}

/// Everything the renderer needs, derived once per render call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedParameters {
    /// Centre tile (rotation is always 0)
    pub middle: PatchSelection,
    /// Four corner tiles
    pub corner: PatchSelection,
    /// Four side tiles
    pub side: PatchSelection,
    /// Shape colour
    pub fore_color: Rgb<u8>,
    /// Tile background colour
    pub back_color: Rgb<u8>,
}

/// Turns a digest into render parameters against a patch catalog
///
/// Alternative bit layouts or catalogs implement this without touching the
/// render pipeline.
pub trait Decoder {
    /// Catalog the decoded indices refer to
    fn catalog(&self) -> &PatchCatalog;

    /// Decode a digest; total over every 256-bit value
    fn decode(&self, digest: &Digest) -> DecodedParameters;
}

/// Field layout of [`StandardLayout`]
pub mod layout {
    use super::BitRange;

    /// 2-bit index into the middle-eligible table
    pub const MIDDLE_SELECTOR: BitRange = BitRange::new(0, 2);
    /// Middle invert flag
    pub const MIDDLE_INVERT: BitRange = BitRange::new(2, 1);
    /// Corner catalog index
    pub const CORNER_TYPE: BitRange = BitRange::new(3, 4);
    /// Corner invert flag
    pub const CORNER_INVERT: BitRange = BitRange::new(7, 1);
    /// Corner base rotation
    pub const CORNER_ROTATION: BitRange = BitRange::new(8, 2);
    /// Side catalog index
    pub const SIDE_TYPE: BitRange = BitRange::new(10, 4);
    /// Side invert flag
    pub const SIDE_INVERT: BitRange = BitRange::new(14, 1);
    /// Side base rotation
    pub const SIDE_ROTATION: BitRange = BitRange::new(15, 2);
    /// Blue channel, 5 bits
    pub const BLUE: BitRange = BitRange::new(16, 5);
    /// Green channel, 5 bits
    pub const GREEN: BitRange = BitRange::new(21, 5);
    /// Red channel, 5 bits
    pub const RED: BitRange = BitRange::new(27, 5);
}

/// The standard 16-shape catalog with the classic 32-bit field layout
#[derive(Debug, Clone, Copy)]
pub struct StandardLayout {
    catalog: &'static PatchCatalog,
}

impl Default for StandardLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl StandardLayout {
    /// Layout over the built-in catalog
    pub fn new() -> Self {
        Self {
            catalog: PatchCatalog::standard(),
        }
    }

    fn channel(range: BitRange, digest: &Digest) -> u8 {
        // 5-bit field widened to 0..=248 in steps of 8
        (range.read(digest) << 3) as u8
    }
}

impl Decoder for StandardLayout {
    fn catalog(&self) -> &PatchCatalog {
        self.catalog
    }

    fn decode(&self, digest: &Digest) -> DecodedParameters {
        let middle = PatchSelection {
            index: self
                .catalog
                .middle_index(layout::MIDDLE_SELECTOR.read(digest)),
            invert: layout::MIDDLE_INVERT.flag(digest),
            rotation: 0,
        };
        let corner = PatchSelection {
            index: layout::CORNER_TYPE.read(digest) as usize,
            invert: layout::CORNER_INVERT.flag(digest),
            rotation: layout::CORNER_ROTATION.read(digest),
        };
        let side = PatchSelection {
            index: layout::SIDE_TYPE.read(digest) as usize,
            invert: layout::SIDE_INVERT.flag(digest),
            rotation: layout::SIDE_ROTATION.read(digest),
        };

        DecodedParameters {
            middle,
            corner,
            side,
            fore_color: Rgb([
                Self::channel(layout::RED, digest),
                Self::channel(layout::GREEN, digest),
                Self::channel(layout::BLUE, digest),
            ]),
            back_color: Rgb(BACKGROUND_RGB),
        }
    }
}
