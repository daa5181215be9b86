//! Tuned constants for the rectangle glyphs.
//!
//! These values were fitted by eye against the panel fonts. Keep them literal;
//! the tests lock every entry.

use super::SpecialGlyph;

/// Teardrop cell width, in scale units.
pub const TEARDROP_WIDTH_UNITS: f32 = 3.0;
/// Teardrop cell height, in scale units. The top and bottom halves split it evenly.
pub const TEARDROP_HEIGHT_UNITS: f32 = 6.0;
/// Gap between the two teardrops of a double quote, in scale units.
pub const TEARDROP_GAP_UNITS: f32 = 2.0;
/// Pixels trimmed off the bottom half of a teardrop. Not scaled.
pub const TEARDROP_TAPER: f32 = 1.0;

pub const EN_DASH_WIDTH_UNITS: f32 = 10.0;
pub const EM_DASH_WIDTH_UNITS: f32 = 16.0;
pub const DASH_HEIGHT_UNITS: f32 = 2.0;

/// Right quote is drawn this many pixels right of the cursor to clear its bearing.
pub const RIGHT_QUOTE_ORIGIN_SHIFT: i32 = 5;
/// Extra lift applied to quote marks above the tier baseline offset.
pub const QUOTE_RAISE: i32 = 6;

/// Reference glyph height boundaries between tiers.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TierThresholds {
    /// Heights strictly below this are [`FontTier::Small`].
    pub small_below: u32,
    /// Heights strictly above this are [`FontTier::Large`].
    pub large_above: u32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            small_below: 12,
            large_above: 19,
        }
    }
}

/// Coarse font size class, derived from the measured reference glyph.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FontTier {
    Small,
    Medium,
    Large,
}

/// Per-tier entry of the tuning table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TierMetrics {
    /// Multiplier applied to every glyph dimension.
    pub scale: f32,
    /// Extra factor applied to advance widths.
    pub advance_factor: f32,
    /// Added to `-height` to get the vertical offset from the text baseline.
    pub baseline_lift: i32,
    /// Adjustment to the left double quote's advance.
    pub left_quote_advance_delta: i32,
}

const SMALL: TierMetrics = TierMetrics {
    scale: 1.0,
    advance_factor: 1.0,
    baseline_lift: 2,
    left_quote_advance_delta: 2,
};

const MEDIUM: TierMetrics = TierMetrics {
    scale: 1.5,
    advance_factor: 1.2,
    baseline_lift: 3,
    left_quote_advance_delta: 2,
};

const LARGE: TierMetrics = TierMetrics {
    scale: 2.0,
    advance_factor: 1.0,
    baseline_lift: 5,
    left_quote_advance_delta: -1,
};

impl FontTier {
    pub fn classify(reference_height: u32, thresholds: TierThresholds) -> Self {
        if reference_height < thresholds.small_below {
            Self::Small
        } else if reference_height > thresholds.large_above {
            Self::Large
        } else {
            Self::Medium
        }
    }

    pub const fn metrics(self) -> TierMetrics {
        match self {
            Self::Small => SMALL,
            Self::Medium => MEDIUM,
            Self::Large => LARGE,
        }
    }

    #[inline]
    pub const fn scale(self) -> f32 {
        self.metrics().scale
    }

    /// Vertical offset from the text baseline to the top of a raised glyph.
    pub fn vertical_offset(self, reference_height: u32) -> i32 {
        let height = i32::try_from(reference_height).unwrap_or(i32::MAX);
        self.metrics().baseline_lift.saturating_sub(height)
    }

    /// Advance width for `glyph` drawn at `scale` in this tier.
    ///
    /// Truncates toward zero.
    pub fn scaled_advance(self, glyph: SpecialGlyph, scale: f32) -> i32 {
        (base_advance(glyph) as f32 * scale * self.metrics().advance_factor) as i32
    }
}

/// Unscaled advance width of a glyph.
pub const fn base_advance(glyph: SpecialGlyph) -> i32 {
    match glyph {
        SpecialGlyph::LeftDoubleQuote => 12,
        SpecialGlyph::RightDoubleQuote => 18,
        SpecialGlyph::Apostrophe => 6,
        SpecialGlyph::EnDash => 12,
        SpecialGlyph::EmDash => 18,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_split_reference_heights() {
        let t = TierThresholds::default();
        assert_eq!(FontTier::classify(10, t), FontTier::Small);
        assert_eq!(FontTier::classify(11, t), FontTier::Small);
        assert_eq!(FontTier::classify(12, t), FontTier::Medium);
        assert_eq!(FontTier::classify(15, t), FontTier::Medium);
        assert_eq!(FontTier::classify(19, t), FontTier::Medium);
        assert_eq!(FontTier::classify(20, t), FontTier::Large);
        assert_eq!(FontTier::classify(22, t), FontTier::Large);
    }

    #[test]
    fn tier_table_is_locked() {
        assert_eq!(FontTier::Small.metrics(), SMALL);
        assert_eq!(FontTier::Small.scale(), 1.0);
        assert_eq!(FontTier::Medium.scale(), 1.5);
        assert_eq!(FontTier::Medium.metrics().advance_factor, 1.2);
        assert_eq!(FontTier::Large.scale(), 2.0);
        assert_eq!(FontTier::Large.metrics().advance_factor, 1.0);

        assert_eq!(FontTier::Small.vertical_offset(10), -8);
        assert_eq!(FontTier::Medium.vertical_offset(15), -12);
        assert_eq!(FontTier::Large.vertical_offset(22), -17);

        assert_eq!(FontTier::Small.metrics().left_quote_advance_delta, 2);
        assert_eq!(FontTier::Medium.metrics().left_quote_advance_delta, 2);
        assert_eq!(FontTier::Large.metrics().left_quote_advance_delta, -1);
    }

    #[test]
    fn base_advances_are_locked() {
        let widths = SpecialGlyph::ALL.map(base_advance);
        assert_eq!(widths, [12, 18, 6, 12, 18]);
    }

    #[test]
    fn medium_tier_widens_and_truncates() {
        assert_eq!(FontTier::Small.scaled_advance(SpecialGlyph::EnDash, 1.0), 12);
        assert_eq!(FontTier::Medium.scaled_advance(SpecialGlyph::EnDash, 1.0), 14);
        assert_eq!(FontTier::Medium.scaled_advance(SpecialGlyph::EnDash, 1.5), 21);
        assert_eq!(FontTier::Medium.scaled_advance(SpecialGlyph::Apostrophe, 1.5), 10);
        assert_eq!(FontTier::Large.scaled_advance(SpecialGlyph::EmDash, 2.0), 36);
    }
}
