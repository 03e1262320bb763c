//! Dimension catalog
//!
//! Static lookup from dimension to display name and color. The table
//! covers dimensions 0 through 9; anything outside falls back to a
//! neutral default entry.

/// Display metadata for one dimension
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DimensionInfo {
    /// Conventional name of the d-cube
    pub name: &'static str,
    /// RGB display color, components in [0, 1]
    pub color: [f32; 3],
}

/// Fallback entry for dimensions outside the table
const DEFAULT_INFO: DimensionInfo = DimensionInfo {
    name: "Hypercube",
    color: [0.6, 0.6, 0.6],
};

/// Names and palette for dimensions 0..=9
const CATALOG: [DimensionInfo; 10] = [
    DimensionInfo { name: "Point", color: [0.85, 0.85, 0.85] },
    DimensionInfo { name: "Line Segment", color: [0.94, 0.35, 0.35] },
    DimensionInfo { name: "Square", color: [0.95, 0.60, 0.22] },
    DimensionInfo { name: "Cube", color: [0.93, 0.85, 0.25] },
    DimensionInfo { name: "Tesseract", color: [0.40, 0.80, 0.35] },
    DimensionInfo { name: "Penteract", color: [0.25, 0.75, 0.70] },
    DimensionInfo { name: "Hexeract", color: [0.25, 0.55, 0.90] },
    DimensionInfo { name: "Hepteract", color: [0.45, 0.35, 0.85] },
    DimensionInfo { name: "Octeract", color: [0.70, 0.35, 0.85] },
    DimensionInfo { name: "Enneract", color: [0.90, 0.40, 0.70] },
];

/// Look up the display entry for a dimension
///
/// Out-of-range dimensions (negative or above 9) return the default
/// entry rather than failing.
pub fn dimension_info(dimension: i32) -> DimensionInfo {
    usize::try_from(dimension)
        .ok()
        .and_then(|d| CATALOG.get(d))
        .copied()
        .unwrap_or(DEFAULT_INFO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(dimension_info(0).name, "Point");
        assert_eq!(dimension_info(2).name, "Square");
        assert_eq!(dimension_info(4).name, "Tesseract");
        assert_eq!(dimension_info(9).name, "Enneract");
    }

    #[test]
    fn test_out_of_range_falls_back() {
        assert_eq!(dimension_info(-1), DEFAULT_INFO);
        assert_eq!(dimension_info(10), DEFAULT_INFO);
        assert_eq!(dimension_info(i32::MAX), DEFAULT_INFO);
    }

    #[test]
    fn test_colors_are_normalized() {
        for d in 0..=9 {
            for c in dimension_info(d).color {
                assert!((0.0..=1.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_palette_is_distinct() {
        for a in 0..=9 {
            for b in (a + 1)..=9 {
                assert_ne!(
                    dimension_info(a).color,
                    dimension_info(b).color,
                    "dimensions {} and {} share a color",
                    a,
                    b
                );
            }
        }
    }
}
