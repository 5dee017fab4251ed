//! Useful life by construction type
//!
//! Residential statutory useful lives multiplied by 1.5, rounded half up
//! (e.g. reinforced concrete 47 × 1.5 = 70.5 → 71).

/// Canonical construction type names and their useful life in years
pub const STRUCTURE_USEFUL_LIVES: [(&str, u32); 7] = [
    ("鉄骨鉄筋コンクリート造又は鉄筋コンクリート造", 71),
    ("れんが作り、石造またはブロック造", 57),
    ("金属造（骨格材の肉厚4mm超)", 51),
    ("金属造（骨格材の肉厚3mm超～4mm以下)", 41),
    ("金属造（骨格材の肉厚3mm以下)", 29),
    ("木造又は合成樹脂造", 33),
    ("木骨モルタル造", 30),
];

/// Useful life for a construction type; 0 when the name is not in the table
pub fn useful_life(structure: &str) -> u32 {
    STRUCTURE_USEFUL_LIVES
        .iter()
        .find(|(name, _)| *name == structure)
        .map(|&(_, years)| years)
        .unwrap_or(0)
}

/// Whether the name is one of the canonical construction types
pub fn is_known_structure(structure: &str) -> bool {
    useful_life(structure) > 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_structures() {
        assert_eq!(useful_life("鉄骨鉄筋コンクリート造又は鉄筋コンクリート造"), 71);
        assert_eq!(useful_life("木造又は合成樹脂造"), 33);
        assert_eq!(useful_life("木骨モルタル造"), 30);
        assert!(is_known_structure("金属造（骨格材の肉厚3mm以下)"));
    }

    #[test]
    fn test_unknown_structure_is_zero() {
        assert_eq!(useful_life(""), 0);
        assert_eq!(useful_life("木造"), 0);
        assert_eq!(useful_life("鉄骨造（軽量鉄骨）"), 0);
        assert!(!is_known_structure("steel"));
    }
}
