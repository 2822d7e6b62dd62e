//! Fixed reference table mapping legacy content identifiers to colors.
//!
//! These values are historical and not derived from any texture; the table
//! is printed verbatim at the top of every report.

use std::io::{self, Write};

/// A single legacy row: hex content id, RGB channels, and the original
/// content-name comment.
pub struct LegacyColor {
    pub id: &'static str,
    pub rgb: [u8; 3],
    pub comment: &'static str,
}

const fn row(id: &'static str, rgb: [u8; 3], comment: &'static str) -> LegacyColor {
    LegacyColor { id, rgb, comment }
}

/// The legacy content-id color table, in its fixed literal order.
pub const LEGACY_COLORS: &[LegacyColor] = &[
    row("0", [128, 128, 128], "CONTENT_STONE"),
    row("2", [39, 66, 106], "CONTENT_WATER"),
    row("3", [255, 255, 0], "CONTENT_TORCH"),
    row("9", [39, 66, 106], "CONTENT_WATERSOURCE"),
    row("e", [117, 86, 41], "CONTENT_SIGN_WALL"),
    row("f", [128, 79, 0], "CONTENT_CHEST"),
    row("10", [118, 118, 118], "CONTENT_FURNACE"),
    row("15", [103, 78, 42], "CONTENT_FENCE"),
    row("1e", [162, 119, 53], "CONTENT_RAIL"),
    row("1f", [154, 110, 40], "CONTENT_LADDER"),
    row("20", [255, 100, 0], "CONTENT_LAVA"),
    row("21", [255, 100, 0], "CONTENT_LAVASOURCE"),
    row("800", [107, 134, 51], "CONTENT_GRASS"),
    row("801", [86, 58, 31], "CONTENT_TREE"),
    row("802", [48, 95, 8], "CONTENT_LEAVES"),
    row("803", [102, 129, 38], "CONTENT_GRASS_FOOTSTEPS"),
    row("804", [178, 178, 0], "CONTENT_MESE"),
    row("805", [101, 84, 36], "CONTENT_MUD"),
    row("808", [104, 78, 42], "CONTENT_WOOD"),
    row("809", [210, 194, 156], "CONTENT_SAND"),
    row("80a", [123, 123, 123], "CONTENT_COBBLE"),
    row("80b", [199, 199, 199], "CONTENT_STEEL"),
    row("80c", [183, 183, 222], "CONTENT_GLASS"),
    row("80d", [219, 202, 178], "CONTENT_MOSSYCOBBLE"),
    row("80e", [70, 70, 70], "CONTENT_GRAVEL"),
    row("80f", [204, 0, 0], "CONTENT_SANDSTONE"),
    row("810", [0, 215, 0], "CONTENT_CACTUS"),
    row("811", [170, 50, 25], "CONTENT_BRICK"),
    row("812", [104, 78, 42], "CONTENT_CLAY"),
    row("813", [58, 105, 18], "CONTENT_PAPYRUS"),
    row("814", [196, 160, 0], "CONTENT_BOOKSHELF"),
    row("815", [205, 190, 121], "CONTENT_JUNGLETREE"),
    row("816", [62, 101, 25], "CONTENT_JUNGLEGRASS"),
    row("817", [255, 153, 255], "CONTENT_NC"),
    row("818", [102, 50, 255], "CONTENT_NC_RB"),
    row("819", [200, 0, 0], "CONTENT_APPLE"),
];

/// Writes the whole table, one row per line.
pub fn write_legacy_table<W: Write>(out: &mut W) -> io::Result<()> {
    for entry in LEGACY_COLORS {
        writeln!(
            out,
            "{} {} {} {} # {}",
            entry.id, entry.rgb[0], entry.rgb[1], entry.rgb[2], entry.comment
        )?;
    }
    Ok(())
}
