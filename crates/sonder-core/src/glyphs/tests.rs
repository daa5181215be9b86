use super::*;
use crate::mock::FixedMetricsSurface;

fn surface_with_height(height: u32) -> FixedMetricsSurface {
    FixedMetricsSurface::new(6, height)
}

struct FailingSurface {
    height: u32,
    attempts: usize,
}

impl GlyphSurface for FailingSurface {
    type Error = &'static str;

    fn fill_rect(&mut self, _rect: PixelRect, _on: bool) -> Result<(), Self::Error> {
        self.attempts += 1;
        Err("panel busy")
    }

    fn text_bounds(&self, _text: &str, x: i32, y: i32) -> PixelRect {
        PixelRect::new(x, y, 8, self.height)
    }
}

#[test]
fn reserved_range_is_exactly_one_to_five() {
    for byte in 0..=u8::MAX {
        assert_eq!(is_reserved(byte), (1..=5).contains(&byte), "byte {byte:#04x}");
        assert_eq!(SpecialGlyph::from_byte(byte).is_some(), is_reserved(byte));
    }
}

#[test]
fn glyph_bytes_round_trip_through_the_enum() {
    for glyph in SpecialGlyph::ALL {
        assert_eq!(SpecialGlyph::try_from(glyph.byte()), Ok(glyph));
        assert_eq!(SpecialGlyph::from_char(glyph.as_char()), Some(glyph));

        let mut utf8 = [0u8; 4];
        assert_eq!(glyph.as_char().encode_utf8(&mut utf8).as_bytes(), &glyph.utf8());
    }
    assert_eq!(SpecialGlyph::try_from(0x06), Err(0x06));
}

#[test]
fn reference_height_selects_tier() {
    for (height, tier, scale) in [
        (10, FontTier::Small, 1.0),
        (15, FontTier::Medium, 1.5),
        (22, FontTier::Large, 2.0),
    ] {
        let mut surface = surface_with_height(height);
        let renderer = SpecialGlyphRenderer::new(&mut surface);
        assert_eq!(renderer.tier(), tier);
        assert_eq!(renderer.tier().scale(), scale);
    }
}

#[test]
fn en_dash_small_tier_measures_base_width() {
    let mut surface = surface_with_height(10);
    let renderer = SpecialGlyphRenderer::new(&mut surface);
    assert_eq!(renderer.measure_advance(0x04, 1.0), 12);
}

#[test]
fn medium_tier_applies_advance_factor() {
    let mut surface = surface_with_height(15);
    let renderer = SpecialGlyphRenderer::new(&mut surface);
    assert_eq!(renderer.measure_advance(0x04, 1.0), 14);
    assert_eq!(renderer.measure_advance(0x04, 1.5), 21);
    assert_eq!(renderer.measure_advance(0x02, 1.5), 32);
}

#[test]
fn non_reserved_bytes_measure_zero_and_draw_nothing() {
    let mut surface = surface_with_height(15);
    let mut renderer = SpecialGlyphRenderer::new(&mut surface);

    for byte in (0..=u8::MAX).filter(|b| !is_reserved(*b)) {
        assert_eq!(renderer.measure_advance(byte, 1.0), 0);
        assert_eq!(renderer.measure_advance(byte, 2.0), 0);
        assert_eq!(renderer.draw(10, 10, byte), Ok(0));
    }
    assert!(renderer.surface().fills().is_empty());
}

#[test]
fn every_glyph_draws_with_positive_advance_in_every_tier() {
    for height in [8, 10, 12, 15, 19, 20, 22, 30] {
        for glyph in SpecialGlyph::ALL {
            let mut surface = surface_with_height(height);
            let mut renderer = SpecialGlyphRenderer::new(&mut surface);

            let width = renderer.draw(40, 60, glyph.byte()).unwrap();
            assert!(width > 0, "{glyph:?} at height {height}");
            assert_eq!(width, renderer.advance(glyph.byte()));
            assert!(!renderer.surface().fills().is_empty());
        }
    }
}

#[test]
fn small_tier_left_quote_is_raised_and_widened() {
    let mut surface = surface_with_height(10);
    let mut renderer = SpecialGlyphRenderer::new(&mut surface);

    assert_eq!(renderer.draw(10, 50, 0x01), Ok(14));

    // Offset -10 + 2, raised another 6.
    let fills: std::vec::Vec<PixelRect> =
        renderer.surface().fills().iter().map(|(r, _)| *r).collect();
    assert_eq!(
        fills,
        [
            PixelRect::new(10, 36, 3, 3),
            PixelRect::new(10, 39, 2, 3),
            PixelRect::new(15, 36, 3, 3),
            PixelRect::new(15, 39, 2, 3),
        ]
    );
    assert!(renderer.surface().fills().iter().all(|(_, on)| *on));
}

#[test]
fn right_quote_origin_shifts_without_changing_advance() {
    let mut surface = surface_with_height(15);
    let mut renderer = SpecialGlyphRenderer::new(&mut surface);

    assert_eq!(renderer.draw(100, 80, 0x02), Ok(32));

    let first = renderer.surface().fills()[0].0;
    assert_eq!(first.x, 105);
    assert_eq!(first.y, 80 - 12 - 6);
}

#[test]
fn large_tier_left_quote_is_tightened() {
    let mut surface = surface_with_height(22);
    let renderer = SpecialGlyphRenderer::new(&mut surface);

    let placement = renderer.placement(0, 100, 0x01).unwrap();
    assert_eq!(placement.tier, FontTier::Large);
    assert_eq!(placement.advance, 24 - 1);
    assert_eq!(placement.y, 100 - 17 - 6);
}

#[test]
fn dashes_use_half_the_baseline_offset() {
    let mut surface = surface_with_height(22);
    let mut renderer = SpecialGlyphRenderer::new(&mut surface);

    // -17 / 2 truncates toward zero.
    assert_eq!(renderer.draw(0, 100, 0x05), Ok(36));
    assert_eq!(
        renderer.surface().fills(),
        &[(PixelRect::new(0, 92, 32, 4), true)]
    );

    let placement = renderer.placement(0, 100, 0x04).unwrap();
    assert_eq!(placement.y, 92);
    assert_eq!(placement.advance, 24);
}

#[test]
fn active_font_change_is_picked_up_between_calls() {
    let mut surface = surface_with_height(10);
    {
        let renderer = SpecialGlyphRenderer::new(&mut surface);
        assert_eq!(renderer.advance(0x03), 6);
    }

    surface.set_cell(10, 20);
    let renderer = SpecialGlyphRenderer::new(&mut surface);
    assert_eq!(renderer.tier(), FontTier::Large);
    assert_eq!(renderer.advance(0x03), 12);
}

#[test]
fn ink_follows_config() {
    let mut surface = surface_with_height(10);
    let config = RendererConfig {
        ink_on: false,
        ..RendererConfig::default()
    };
    let mut renderer = SpecialGlyphRenderer::with_config(&mut surface, config);

    renderer.draw(0, 20, 0x03).unwrap();
    assert!(renderer.surface().fills().iter().all(|(_, on)| !*on));
}

#[test]
fn custom_thresholds_move_tier_boundaries() {
    let mut surface = surface_with_height(15);
    let config = RendererConfig {
        thresholds: TierThresholds {
            small_below: 16,
            large_above: 24,
        },
        ..RendererConfig::default()
    };
    let renderer = SpecialGlyphRenderer::with_config(&mut surface, config);
    assert_eq!(renderer.tier(), FontTier::Small);
}

#[test]
fn surface_errors_propagate() {
    let mut surface = FailingSurface {
        height: 10,
        attempts: 0,
    };
    let mut renderer = SpecialGlyphRenderer::new(&mut surface);

    assert_eq!(renderer.draw(0, 0, 0x01), Err("panel busy"));
    assert_eq!(renderer.draw(0, 0, 0x00), Ok(0));
    assert_eq!(surface.attempts, 1);
}

#[test]
fn extreme_cursor_positions_saturate() {
    let mut surface = surface_with_height(10);
    let mut renderer = SpecialGlyphRenderer::new(&mut surface);

    let placement = renderer.placement(i32::MAX, i32::MIN, 0x02).unwrap();
    assert_eq!(placement.x, i32::MAX);
    assert_eq!(placement.y, i32::MIN);

    assert_eq!(renderer.draw(i32::MAX, i32::MIN, 0x02), Ok(18));
    assert!(
        renderer
            .surface()
            .fills()
            .iter()
            .all(|(rect, _)| rect.x == i32::MAX)
    );
}
