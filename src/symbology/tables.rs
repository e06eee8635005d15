/// EAN-8 pattern tables and symbol layout
use crate::error::Side;

/// EAN-8 left (odd parity, L-code) patterns. Index = digit.
pub const LEFT_PATTERNS: [&str; 10] = [
    "0001101", "0011001", "0010011", "0111101", "0100011", "0110001", "0101111", "0111011",
    "0110111", "0001011",
];

/// EAN-8 right (even parity, R-code) patterns: bitwise complement of the left table.
pub const RIGHT_PATTERNS: [&str; 10] = [
    "1110010", "1100110", "1101100", "1000010", "1011100", "1001110", "1010000", "1000100",
    "1001000", "1110100",
];

/// Start guard
pub const START_GUARD: &str = "101";
/// Center guard
pub const CENTER_GUARD: &str = "01010";
/// End guard
pub const END_GUARD: &str = "101";

/// Modules per digit pattern
pub const DIGIT_MODULES: usize = 7;
/// Digits encoded on each side of the center guard
pub const DIGITS_PER_SIDE: usize = 4;

/// First module of the start guard
pub const START_OFFSET: usize = 0;
/// First module of the left-hand digits
pub const LEFT_OFFSET: usize = START_OFFSET + START_GUARD.len();
/// First module of the center guard
pub const CENTER_OFFSET: usize = LEFT_OFFSET + DIGITS_PER_SIDE * DIGIT_MODULES;
/// First module of the right-hand digits
pub const RIGHT_OFFSET: usize = CENTER_OFFSET + CENTER_GUARD.len();
/// First module of the end guard
pub const END_OFFSET: usize = RIGHT_OFFSET + DIGITS_PER_SIDE * DIGIT_MODULES;

/// Total modules across the bar region (3 + 28 + 5 + 28 + 3)
pub const TOTAL_MODULES: usize = END_OFFSET + END_GUARD.len();

/// Pattern table for one side.
pub fn patterns(side: Side) -> &'static [&'static str; 10] {
    match side {
        Side::Left => &LEFT_PATTERNS,
        Side::Right => &RIGHT_PATTERNS,
    }
}

/// Bit pattern for `digit` on `side`, or `None` when `digit` is above 9.
pub fn pattern_for(side: Side, digit: u8) -> Option<&'static str> {
    patterns(side).get(usize::from(digit)).copied()
}

/// Find the digit whose pattern on `side` matches `window` exactly.
pub fn lookup(side: Side, window: &[u8]) -> Option<u8> {
    patterns(side)
        .iter()
        .position(|p| p.as_bytes() == window)
        .map(|d| d as u8)
}

/// Module offset of the window holding digit `position` (0-7).
pub fn window_offset(position: usize) -> usize {
    if position < DIGITS_PER_SIDE {
        LEFT_OFFSET + position * DIGIT_MODULES
    } else {
        RIGHT_OFFSET + (position - DIGITS_PER_SIDE) * DIGIT_MODULES
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_offsets() {
        assert_eq!(LEFT_OFFSET, 3);
        assert_eq!(CENTER_OFFSET, 31);
        assert_eq!(RIGHT_OFFSET, 36);
        assert_eq!(END_OFFSET, 64);
        assert_eq!(TOTAL_MODULES, 67);

        let starts: Vec<usize> = (0..8).map(window_offset).collect();
        assert_eq!(starts, vec![3, 10, 17, 24, 36, 43, 50, 57]);
    }

    #[test]
    fn test_right_is_complement_of_left() {
        for (l, r) in LEFT_PATTERNS.iter().zip(RIGHT_PATTERNS.iter()) {
            assert_eq!(l.len(), DIGIT_MODULES);
            let inverted: String = l
                .chars()
                .map(|c| if c == '0' { '1' } else { '0' })
                .collect();
            assert_eq!(&inverted, r);
        }
    }

    #[test]
    fn test_parity() {
        // L-codes carry an odd number of bars, R-codes an even number
        for p in LEFT_PATTERNS {
            assert_eq!(p.matches('1').count() % 2, 1, "{p}");
        }
        for p in RIGHT_PATTERNS {
            assert_eq!(p.matches('1').count() % 2, 0, "{p}");
        }
    }

    #[test]
    fn test_lookup() {
        for d in 0..10u8 {
            let left = pattern_for(Side::Left, d).unwrap();
            let right = pattern_for(Side::Right, d).unwrap();
            assert_eq!(lookup(Side::Left, left.as_bytes()), Some(d));
            assert_eq!(lookup(Side::Right, right.as_bytes()), Some(d));
        }
        assert_eq!(pattern_for(Side::Left, 10), None);
        assert_eq!(pattern_for(Side::Right, u8::MAX), None);
        // tables are disjoint
        assert_eq!(lookup(Side::Right, LEFT_PATTERNS[0].as_bytes()), None);
        assert_eq!(lookup(Side::Left, b"1111111"), None);
    }
}
