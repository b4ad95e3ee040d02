//! Application constants.
//!
//! Centralizes magic numbers and configuration values for better maintainability.

/// Unit conversions.
pub mod units {
    /// Centimetres per typographic point.
    pub const CM_PER_PT: f64 = 0.035_277_8;

    /// EMUs (English Metric Units) per centimetre.
    pub const EMU_PER_CM: f64 = 360_000.0;

    /// EMUs per inch.
    pub const EMU_PER_INCH: f64 = 914_400.0;
}

/// Typography defaults.
pub mod fonts {
    /// Default title font size in points.
    pub const DEFAULT_TITLE_PT: f64 = 42.0;

    /// Default body font size in points.
    pub const DEFAULT_BODY_PT: f64 = 38.0;

    /// Default line spacing as a multiple of the body font size.
    pub const DEFAULT_LINE_SPACING: f64 = 1.4;

    /// Space after each verse paragraph, in points.
    pub const SPACE_AFTER_PT: f64 = 10.0;

    /// Font used for all slide text.
    pub const FONT_NAME: &str = "HY헤드라인M";
}

/// Page layout constants, in centimetres unless noted.
pub mod layout {
    /// Height available to the verse body on one slide.
    pub const MAX_BODY_HEIGHT_CM: f64 = 14.0;

    /// Estimated characters that fit on one wrapped body line.
    pub const CHARS_PER_LINE: usize = 20;

    /// Left margin of title and body boxes.
    pub const MARGIN_LEFT_CM: f64 = 1.0;

    /// Top of the title box.
    pub const TITLE_TOP_CM: f64 = 0.5;

    /// Height of the title box.
    pub const TITLE_HEIGHT_CM: f64 = 2.0;

    /// Top of the body box when the slide has a title.
    pub const BODY_TOP_CM: f64 = 2.5;

    /// Top of the body box on continuation slides (reclaims the title space).
    pub const BODY_TOP_CONTINUATION_CM: f64 = 0.5;

    /// Text box width on a 4:3 slide.
    pub const BOX_WIDTH_STANDARD_CM: f64 = 23.3;

    /// Text box width on a 16:9 slide.
    pub const BOX_WIDTH_WIDE_CM: f64 = 31.867;
}

/// Slide dimensions, in inches.
pub mod slide {
    /// Width of a 4:3 slide.
    pub const STANDARD_WIDTH_IN: f64 = 10.0;

    /// Width of a 16:9 slide.
    pub const WIDE_WIDTH_IN: f64 = 13.33;

    /// Height shared by both aspects.
    pub const HEIGHT_IN: f64 = 7.5;
}

/// Output file naming.
pub mod output {
    /// Prefix of generated deck files; older files with it are cleaned up.
    pub const FILE_PREFIX: &str = "versedeck_";

    /// Default corpus file name.
    pub const CORPUS_FILE: &str = "KorRV.json";
}
