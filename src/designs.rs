//! The design table: every bitmap the hoodie can show

use crate::bitmap::Bitmap;

/// 7x7 heart. The row values are stored pre-shifted one column to the
/// left; keep the shifts so the stored bytes stay bit-for-bit stable.
pub const HEART_7X7: Bitmap = Bitmap::new(
    "heart_7x7",
    7,
    7,
    &[
        0x36 << 1,
        0x7F << 1,
        0x7F << 1,
        0x7F << 1,
        0x3E << 1,
        0x1C << 1,
        0x08 << 1,
    ],
);

/// 4x4 box outline
pub const BOX_4X4: Bitmap = Bitmap::new(
    "box_4x4",
    4,
    4,
    &[
        0xF0, // top line
        0x90, // left and right
        0x90, // left and right
        0xF0, // bottom line
    ],
);

/// 4x4 diagonal dots
pub const LINES_4X4: Bitmap = Bitmap::new(
    "lines_4x4",
    4,
    4,
    &[
        0xA0, // alternating, top
        0x00,
        0x00,
        0x50, // alternating, bottom
    ],
);

/// Every design, in declaration order
pub const DESIGNS: [&Bitmap; 3] = [&HEART_7X7, &BOX_4X4, &LINES_4X4];

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("No design named {0:?}")]
pub struct UnknownDesign(pub String);

/// Finds the design called `name`. Never substitutes a blank bitmap for
/// a name it does not recognise.
pub fn lookup(name: &str) -> Result<&'static Bitmap, UnknownDesign> {
    DESIGNS
        .iter()
        .find(|design| design.name() == name)
        .copied()
        .ok_or_else(|| UnknownDesign(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heart_row_bytes_are_exact() {
        assert_eq!(HEART_7X7.rows(), [0x6C, 0xFE, 0xFE, 0xFE, 0x7C, 0x38, 0x10]);
    }

    #[test]
    fn box_row_bytes_are_exact() {
        assert_eq!(BOX_4X4.rows(), [0xF0, 0x90, 0x90, 0xF0]);
    }

    #[test]
    fn lines_row_bytes_are_exact() {
        assert_eq!(LINES_4X4.rows(), [0xA0, 0x00, 0x00, 0x50]);
    }

    #[test]
    fn row_counts_match_stated_heights() {
        for design in DESIGNS {
            assert_eq!(design.rows().len(), design.height() as usize, "{}", design);
        }
    }

    #[test]
    fn every_design_is_found_by_name() {
        for design in DESIGNS {
            assert_eq!(lookup(design.name()), Ok(design));
        }
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            lookup("diamond_5x5"),
            Err(UnknownDesign(String::from("diamond_5x5")))
        );
    }

    #[test]
    fn repeated_reads_return_identical_rows() {
        let first = lookup("heart_7x7").unwrap().rows();
        let second = lookup("heart_7x7").unwrap().rows();
        assert_eq!(first, second);
    }
}
