//! Shared bar-drawing primitives
//!
//! Convert a fill fraction in promille into full cells plus one
//! fractional cap glyph. The driver supplies the device-specific pieces:
//! how many pixels a cell spans along the fill axis, the display code of
//! the one-pixel partial glyph, and the code of a completely filled cell.
//! Cells are emitted through a callback so the same math serves every
//! backend.

/// Device parameters for one bar direction
#[derive(Debug, Clone, Copy)]
pub struct BarStyle {
    /// Pixels a cell spans along the fill axis
    pub cell_px: u8,
    /// Display code of the glyph with exactly one filled pixel row/column;
    /// `base_glyph + n - 1` must show `n` filled
    pub base_glyph: u8,
    /// Display code of a completely filled cell
    pub full_block: u8,
}

/// Total lit pixels for a bar of `len` cells at `promille` fill
///
/// The `+ 1 / 2000` form rounds to the nearest pixel.
fn total_pixels(len: u16, cell_px: u8, promille: u16) -> i32 {
    (2 * len as i32 * cell_px as i32 + 1) * promille as i32 / 2000
}

/// Draw a vertical bar growing bottom-up from `(x, y)` (1-based)
///
/// `put` receives one `(x, y, code)` per cell that shows any fill; cells
/// above the cap are left untouched. Rows above the top of the screen are
/// skipped.
pub fn vbar_static<F>(x: u16, y: u16, len: u16, promille: u16, style: &BarStyle, mut put: F)
where
    F: FnMut(u16, u16, u8),
{
    let total = total_pixels(len, style.cell_px, promille);

    for pos in 0..len as i32 {
        let row = y as i32 - pos;
        if row < 1 {
            break;
        }
        let pixels = total - style.cell_px as i32 * pos;
        if pixels >= style.cell_px as i32 {
            put(x, row as u16, style.full_block);
        } else if pixels > 0 {
            put(x, row as u16, style.base_glyph + pixels as u8 - 1);
            break;
        } else {
            break;
        }
    }
}

/// Draw a horizontal bar growing left-to-right from `(x, y)` (1-based)
pub fn hbar_static<F>(x: u16, y: u16, len: u16, promille: u16, style: &BarStyle, mut put: F)
where
    F: FnMut(u16, u16, u8),
{
    let total = total_pixels(len, style.cell_px, promille);

    for pos in 0..len as i32 {
        let pixels = total - style.cell_px as i32 * pos;
        if pixels >= style.cell_px as i32 {
            put(x + pos as u16, y, style.full_block);
        } else if pixels > 0 {
            put(x + pos as u16, y, style.base_glyph + pixels as u8 - 1);
            break;
        } else {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const VSTYLE: BarStyle = BarStyle {
        cell_px: 8,
        base_glyph: 0x01,
        full_block: 0xFF,
    };
    const HSTYLE: BarStyle = BarStyle {
        cell_px: 5,
        base_glyph: 0x01,
        full_block: 0xFF,
    };

    fn collect_vbar(x: u16, y: u16, len: u16, promille: u16) -> std::vec::Vec<(u16, u16, u8)> {
        let mut cells = std::vec::Vec::new();
        vbar_static(x, y, len, promille, &VSTYLE, |cx, cy, code| {
            cells.push((cx, cy, code))
        });
        cells
    }

    fn collect_hbar(x: u16, y: u16, len: u16, promille: u16) -> std::vec::Vec<(u16, u16, u8)> {
        let mut cells = std::vec::Vec::new();
        hbar_static(x, y, len, promille, &HSTYLE, |cx, cy, code| {
            cells.push((cx, cy, code))
        });
        cells
    }

    #[test]
    fn vbar_half_of_two_cells_fills_one() {
        // 500 promille of 2x8 pixels rounds to 8: one full cell, no cap
        assert_eq!(collect_vbar(1, 2, 2, 500), [(1, 2, 0xFF)]);
    }

    #[test]
    fn vbar_full_grows_bottom_up() {
        assert_eq!(collect_vbar(3, 2, 2, 1000), [(3, 2, 0xFF), (3, 1, 0xFF)]);
    }

    #[test]
    fn vbar_fraction_uses_cap_glyph() {
        // 500 promille of one 8-pixel cell is 4 pixels: glyph 0x04
        assert_eq!(collect_vbar(1, 1, 1, 500), [(1, 1, 0x04)]);
    }

    #[test]
    fn vbar_zero_draws_nothing() {
        assert!(collect_vbar(1, 2, 2, 0).is_empty());
    }

    #[test]
    fn vbar_stops_at_top_row() {
        // A 4-cell bar anchored at row 2 cannot draw above row 1
        let cells = collect_vbar(1, 2, 4, 1000);
        assert_eq!(cells, [(1, 2, 0xFF), (1, 1, 0xFF)]);
    }

    #[test]
    fn hbar_half_of_two_cells_fills_one() {
        // 500 promille of 2x5 pixels rounds to 5: one full cell
        assert_eq!(collect_hbar(1, 1, 2, 500), [(1, 1, 0xFF)]);
    }

    #[test]
    fn hbar_grows_to_the_right() {
        assert_eq!(
            collect_hbar(2, 1, 3, 1000),
            [(2, 1, 0xFF), (3, 1, 0xFF), (4, 1, 0xFF)]
        );
    }

    #[test]
    fn hbar_fraction_uses_cap_glyph() {
        // 400 promille of one 5-pixel cell is 2 pixels: glyph 0x02
        assert_eq!(collect_hbar(1, 1, 1, 400), [(1, 1, 0x02)]);
    }

    proptest! {
        #[test]
        fn hbar_emits_bounded_valid_cells(len in 1u16..=16, promille in 0u16..=1000) {
            let cells = collect_hbar(1, 1, len, promille);
            prop_assert!(cells.len() <= len as usize);
            for (i, &(cx, cy, code)) in cells.iter().enumerate() {
                prop_assert_eq!((cx, cy), (1 + i as u16, 1));
                prop_assert!(
                    code == HSTYLE.full_block
                        || (HSTYLE.base_glyph..HSTYLE.base_glyph + HSTYLE.cell_px - 1)
                            .contains(&code)
                );
            }
        }

        #[test]
        fn hbar_fill_is_monotonic(len in 1u16..=16, promille in 0u16..1000) {
            // More promille never lights fewer pixels
            let pixels = |p: u16| {
                collect_hbar(1, 1, len, p).iter().map(|&(_, _, code)| {
                    if code == HSTYLE.full_block { HSTYLE.cell_px as u32 }
                    else { (code - HSTYLE.base_glyph + 1) as u32 }
                }).sum::<u32>()
            };
            prop_assert!(pixels(promille) <= pixels(promille + 1));
        }
    }
}
