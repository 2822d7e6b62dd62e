//! Line-oriented report emitter.
//!
//! Reads comma-separated `(name, filename)` records, resolves each through
//! the color store, and prints `name r g b` lines in arrival order, preceded
//! by the legacy reference table.

use std::io::{BufRead, Write};

use crate::color_store::ColorStore;
use crate::legacy_table;
use crate::texture_index::TextureIndex;

/// One input record: a logical texture name and the image file expected to
/// hold its appearance.
#[derive(Debug, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub filename: String,
}

impl Record {
    /// Parses a `name,filename` line. Any other field count is a fatal
    /// parse error; there is no partial-line recovery.
    pub fn from_line(line: &str) -> Result<Self, String> {
        let fields: Vec<&str> = line.split(',').collect();
        match fields.as_slice() {
            [name, filename] => Ok(Record {
                name: name.to_string(),
                filename: filename.to_string(),
            }),
            _ => Err(format!(
                "Malformed record '{}': expected 2 comma-separated fields, got {}",
                line,
                fields.len()
            )),
        }
    }
}

/// Runs the full report: legacy table first, then one resolved line per
/// input record. Blank lines are skipped; record order is preserved.
pub fn emit_report<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    store: &ColorStore,
    index: &TextureIndex,
) -> Result<(), String> {
    legacy_table::write_legacy_table(output)
        .map_err(|e| format!("Failed to write legacy color table: {}", e))?;

    for line in input.lines() {
        let line = line.map_err(|e| format!("Failed to read input record: {}", e))?;
        if line.is_empty() {
            continue;
        }

        let record = Record::from_line(&line)?;
        let color = store.resolve(&record.name, &record.filename, index)?;
        writeln!(
            output,
            "{} {} {} {}",
            record.name, color.0[0], color.0[1], color.0[2]
        )
        .map_err(|e| format!("Failed to write output record: {}", e))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;

    fn open_store(tmpdir: &tempfile::TempDir) -> ColorStore {
        ColorStore::open(&tmpdir.path().join("colors.sqlite")).unwrap()
    }

    #[test]
    fn test_record_parsing() {
        assert_eq!(
            Record::from_line("CONTENT_STONE,stone.png").unwrap(),
            Record {
                name: "CONTENT_STONE".to_string(),
                filename: "stone.png".to_string(),
            }
        );

        assert!(Record::from_line("CONTENT_STONE").is_err());
        assert!(Record::from_line("a,b,c").is_err());
    }

    #[test]
    fn test_report_resolves_records_in_order() {
        let tmpdir = tempfile::tempdir().unwrap();
        let textures = tmpdir.path().join("textures");
        fs::create_dir_all(&textures).unwrap();
        RgbImage::from_pixel(8, 8, Rgb([128, 128, 128]))
            .save(textures.join("stone.png"))
            .unwrap();

        let index = TextureIndex::scan(&textures);
        let store = open_store(&tmpdir);

        let input = "CONTENT_STONE,stone.png\nCONTENT_GHOST,missing.png\n";
        let mut output = Vec::new();
        emit_report(input.as_bytes(), &mut output, &store, &index).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        let table_len = crate::legacy_table::LEGACY_COLORS.len();
        assert_eq!(lines.len(), table_len + 2);
        assert_eq!(lines[table_len], "CONTENT_STONE 128 128 128");
        assert_eq!(lines[table_len + 1], "CONTENT_GHOST 255 128 128");
    }

    #[test]
    fn test_report_with_no_records_still_prints_table() {
        let tmpdir = tempfile::tempdir().unwrap();
        let store = open_store(&tmpdir);
        let index = TextureIndex::new();

        let mut output = Vec::new();
        emit_report("".as_bytes(), &mut output, &store, &index).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.lines().count(), crate::legacy_table::LEGACY_COLORS.len());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let tmpdir = tempfile::tempdir().unwrap();
        let store = open_store(&tmpdir);
        let index = TextureIndex::new();

        let input = "\nCONTENT_GHOST,missing.png\n\n";
        let mut output = Vec::new();
        emit_report(input.as_bytes(), &mut output, &store, &index).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.lines().any(|l| l == "CONTENT_GHOST 255 128 128"));
    }

    #[test]
    fn test_malformed_record_aborts_report() {
        let tmpdir = tempfile::tempdir().unwrap();
        let store = open_store(&tmpdir);
        let index = TextureIndex::new();

        let input = "CONTENT_STONE,stone.png\nbogus-line\n";
        let mut output = Vec::new();
        let err = emit_report(input.as_bytes(), &mut output, &store, &index).unwrap_err();
        assert!(err.contains("bogus-line"));
    }
}
