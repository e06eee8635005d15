//! Encode/decode round-trip tests
//!
//! These cover the full codec path (identifier -> grid -> identifier) across
//! a spread of identifiers and geometries, plus the rejection paths of the
//! decoder on tampered grids.

use rust_ean8::decoder::{DecodeOptions, Sampling, decode_with, sample, sample_aligned};
use rust_ean8::encoder::module_sequence;
use rust_ean8::symbology::tables::{END_OFFSET, TOTAL_MODULES, window_offset};
use rust_ean8::{
    BarcodeGeometry, DecodeError, EncodeError, Guard, PixelGrid, Side, check_digit, decode,
    encode, validate,
};

fn identifier_for(n: u32) -> String {
    let mut payload = [0u8; 7];
    let mut v = n;
    for slot in payload.iter_mut().rev() {
        *slot = (v % 10) as u8;
        v /= 10;
    }
    let mut s: String = payload.iter().map(|&d| char::from(b'0' + d)).collect();
    s.push(char::from(b'0' + check_digit(&payload)));
    s
}

fn geometry(spacing: i64, bar_width: i64, height: i64) -> BarcodeGeometry {
    BarcodeGeometry::new(spacing, bar_width, height).unwrap()
}

/// Paint module `index` of every bar row with `value`.
fn paint_module(grid: &mut PixelGrid, g: &BarcodeGeometry, index: usize, value: u8) {
    let x0 = g.spacing() + index * g.bar_width();
    for y in g.spacing()..g.spacing() + g.height() {
        for x in x0..x0 + g.bar_width() {
            grid.set(x, y, value);
        }
    }
}

#[test]
fn test_reference_scenario() {
    let g = geometry(4, 3, 50);
    let grid = encode("40123455", &g).unwrap();
    assert_eq!(grid.width(), 2 * 4 + 67 * 3);
    assert_eq!(grid.height(), 50 + 2 * 4);

    let decoded = decode(&grid).unwrap();
    assert_eq!(decoded.text(), "40123455");
    assert_eq!(
        decoded.bitstring.as_str(),
        "1010100011000110100110010010011010101000010101110010011101001110101"
    );

    let legacy = decode_with(&grid, &DecodeOptions::legacy()).unwrap();
    assert_eq!(legacy.text(), "40123455");
}

#[test]
fn test_roundtrip_many_identifiers() {
    let g = BarcodeGeometry::default();
    for n in (0..10_000_000u32).step_by(99_991) {
        let id = identifier_for(n);
        let grid = encode(&id, &g).unwrap();
        let decoded = decode(&grid).unwrap();
        assert_eq!(decoded.text(), id);
        assert_eq!(decoded.identifier.unwrap().as_str(), id);
    }
}

#[test]
fn test_roundtrip_geometries() {
    let ids = ["40123455", "96385074", "00000000", "99999995"];
    for id in ids {
        for spacing in [1, 2, 7, 33, 34, 50, 120] {
            for bar_width in [1, 2, 3, 5] {
                for height in [1, 2, 9] {
                    let g = geometry(spacing, bar_width, height);
                    let grid = encode(id, &g).unwrap();
                    assert_eq!(grid.width() as i64, 2 * spacing + 67 * bar_width);
                    assert_eq!(grid.height() as i64, height + 2 * spacing);

                    let decoded = decode(&grid)
                        .unwrap_or_else(|e| panic!("{id} {spacing}/{bar_width}/{height}: {e}"));
                    assert_eq!(decoded.text(), id);
                }
            }
        }
    }
}

#[test]
fn test_header_width_sampling_with_narrow_margins() {
    let options = DecodeOptions::default().with_sampling(Sampling::HeaderWidth);
    for spacing in [1, 10, 33] {
        for bar_width in [1, 4] {
            let g = geometry(spacing, bar_width, 6);
            let grid = encode("96385074", &g).unwrap();
            assert_eq!(decode_with(&grid, &options).unwrap().text(), "96385074");
        }
    }
}

#[test]
fn test_both_samplers_agree_on_clean_images() {
    let id = validate("96385074").unwrap();
    let grid = encode("96385074", &geometry(5, 2, 11)).unwrap();
    assert_eq!(sample(&grid).unwrap(), module_sequence(&id));
    assert_eq!(sample_aligned(&grid).unwrap(), module_sequence(&id));
}

#[test]
fn test_tampered_guard_modules() {
    let g = geometry(4, 3, 20);
    let base = encode("40123455", &g).unwrap();

    // start guard bars live at modules 0 and 2; painting module 1 keeps the
    // bar region bounds intact
    let mut grid = base.clone();
    paint_module(&mut grid, &g, 1, 1);
    assert_eq!(
        decode(&grid),
        Err(DecodeError::GuardMismatch {
            guard: Guard::Start
        })
    );

    let mut grid = base.clone();
    paint_module(&mut grid, &g, 33, 1);
    assert_eq!(
        decode(&grid),
        Err(DecodeError::GuardMismatch {
            guard: Guard::Center
        })
    );

    let mut grid = base;
    paint_module(&mut grid, &g, END_OFFSET + 1, 1);
    assert_eq!(
        decode(&grid),
        Err(DecodeError::GuardMismatch { guard: Guard::End })
    );
}

#[test]
fn test_cleared_outer_guard_bars() {
    let g = geometry(4, 3, 20);
    let base = encode("40123455", &g).unwrap();

    for (module, guard) in [(0, Guard::Start), (END_OFFSET + 2, Guard::End)] {
        let mut grid = base.clone();
        paint_module(&mut grid, &g, module, 0);
        assert_eq!(
            decode(&grid),
            Err(DecodeError::GuardMismatch { guard }),
            "module {module}"
        );
        assert_eq!(
            decode_with(&grid, &DecodeOptions::legacy()),
            Err(DecodeError::GuardMismatch { guard }),
            "module {module}"
        );
    }
}

#[test]
fn test_tampered_digit_window() {
    let g = geometry(4, 2, 10);
    let base = encode("40123455", &g).unwrap();

    for (position, side) in [(1, Side::Left), (6, Side::Right)] {
        let mut grid = base.clone();
        let offset = window_offset(position);
        for m in offset..offset + 7 {
            paint_module(&mut grid, &g, m, 1);
        }
        assert_eq!(
            decode(&grid),
            Err(DecodeError::PatternLookupFailure { side, position })
        );
    }
}

#[test]
fn test_wrong_check_digit_in_image() {
    let g = geometry(2, 1, 4);
    let mut grid = encode("40123455", &g).unwrap();
    // R-code 5 is 1001110, R-code 6 is 1010000: rewrite the check digit window
    let offset = window_offset(7);
    for (i, bit) in b"1010000".iter().enumerate() {
        paint_module(&mut grid, &g, offset + i, bit - b'0');
    }

    assert!(matches!(decode(&grid), Err(DecodeError::Checksum(_))));

    let lenient = DecodeOptions::default().with_checksum_verification(false);
    let decoded = decode_with(&grid, &lenient).unwrap();
    assert_eq!(decoded.text(), "40123456");
    assert!(decoded.identifier.is_none());
}

#[test]
fn test_geometry_rejection() {
    for (s, b, h) in [(0, 3, 50), (4, -1, 50), (4, 3, 0)] {
        assert!(matches!(
            BarcodeGeometry::new(s, b, h),
            Err(EncodeError::InvalidGeometry { .. })
        ));
    }
}

#[test]
fn test_blank_and_narrow_images() {
    assert_eq!(
        decode(&PixelGrid::new(TOTAL_MODULES * 2, 5)),
        Err(DecodeError::NoBarsFound)
    );
    let legacy = DecodeOptions::legacy();
    assert_eq!(
        decode_with(&PixelGrid::new(40, 5), &legacy),
        Err(DecodeError::GridTooNarrow { width: 40 })
    );
}
