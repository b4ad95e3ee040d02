//! PowerPoint (`.pptx`) deck renderer.
//!
//! Writes one slide per [`Page`](crate::layout::Page): white text on black,
//! a left-aligned title box and a body box with one paragraph per verse.

mod parts;
mod slide;

use std::io::{self, Cursor, Write};
use std::path::Path;

use quick_xml::escape::escape;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::constants::{fonts, layout, units};
use crate::error::{Error, Result};
use crate::services::scripture::Deck;
use crate::services::slides::{SlideAspect, SlideRenderer};

/// Fonts and colors applied to every slide.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// Title font size in points.
    pub title_pt: f64,
    /// Body font size in points.
    pub body_pt: f64,
    /// Line spacing as a multiple of the body font size.
    pub line_spacing: f64,
    /// Space after each verse paragraph in points.
    pub space_after_pt: f64,
    /// Typeface for all text.
    pub font_name: String,
    /// Text color as `RRGGBB`.
    pub foreground: &'static str,
    /// Background color as `RRGGBB`.
    pub background: &'static str,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            title_pt: fonts::DEFAULT_TITLE_PT,
            body_pt: fonts::DEFAULT_BODY_PT,
            line_spacing: fonts::DEFAULT_LINE_SPACING,
            space_after_pt: fonts::SPACE_AFTER_PT,
            font_name: fonts::FONT_NAME.to_string(),
            foreground: "FFFFFF",
            background: "000000",
        }
    }
}

/// Renders decks as PresentationML packages.
#[derive(Debug, Clone, Default)]
pub struct PptxRenderer {
    aspect: SlideAspect,
    style: TextStyle,
    title: Option<String>,
}

impl PptxRenderer {
    /// Create a renderer for the given slide aspect.
    pub fn new(aspect: SlideAspect) -> Self {
        Self { aspect, ..Self::default() }
    }

    /// Set fonts and colors.
    #[must_use]
    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the document title stored in the package properties.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    const fn box_width_cm(&self) -> f64 {
        match self.aspect {
            SlideAspect::Standard => layout::BOX_WIDTH_STANDARD_CM,
            SlideAspect::Wide => layout::BOX_WIDTH_WIDE_CM,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn slide_size_emu(&self) -> (i64, i64) {
        (
            (self.aspect.width_in() * units::EMU_PER_INCH).round() as i64,
            (self.aspect.height_in() * units::EMU_PER_INCH).round() as i64,
        )
    }

    /// Build the package in memory.
    pub fn to_bytes(&self, deck: &Deck) -> io::Result<Vec<u8>> {
        let slide_count = deck.page_count();
        let (width, height) = self.slide_size_emu();
        let title = self
            .title
            .clone()
            .unwrap_or_else(|| deck.sections.iter().map(|s| s.token.as_str()).collect::<Vec<_>>().join(", "));
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut add = |name: &str, content: &str| -> io::Result<()> {
            zip.start_file(name, options).map_err(io::Error::from)?;
            zip.write_all(content.as_bytes())
        };

        add("[Content_Types].xml", &parts::content_types(slide_count))?;
        add("_rels/.rels", &parts::root_rels())?;
        add("docProps/app.xml", &parts::app_props(slide_count, self.aspect.name()))?;
        add("docProps/core.xml", &parts::core_props(&escape(&title), &timestamp))?;
        add("ppt/presentation.xml", &parts::presentation(slide_count, width, height))?;
        add("ppt/_rels/presentation.xml.rels", &parts::presentation_rels(slide_count))?;
        add("ppt/slideMasters/slideMaster1.xml", &parts::slide_master())?;
        add("ppt/slideMasters/_rels/slideMaster1.xml.rels", &parts::slide_master_rels())?;
        add("ppt/slideLayouts/slideLayout1.xml", &parts::blank_layout())?;
        add("ppt/slideLayouts/_rels/slideLayout1.xml.rels", &parts::blank_layout_rels())?;
        add("ppt/theme/theme1.xml", &parts::theme(&escape(&self.style.font_name)))?;

        for (i, page) in deck.pages().enumerate() {
            let n = i + 1;
            let xml = slide::slide_xml(page, &self.style, self.box_width_cm(), layout::MAX_BODY_HEIGHT_CM);
            add(&format!("ppt/slides/slide{n}.xml"), &xml)?;
            add(&format!("ppt/slides/_rels/slide{n}.xml.rels"), &parts::slide_rels())?;
        }

        let cursor = zip.finish().map_err(io::Error::from)?;
        Ok(cursor.into_inner())
    }
}

impl SlideRenderer for PptxRenderer {
    fn render(&self, deck: &Deck, output: &Path) -> Result<()> {
        let bytes = self
            .to_bytes(deck)
            .map_err(|e| Error::io(e, output.to_path_buf()))?;
        fs_err::write(output, bytes).map_err(|source| Error::ArtifactWrite {
            path: output.to_path_buf(),
            source,
        })?;
        tracing::info!("Wrote {} slides to {}", deck.page_count(), output.display());
        Ok(())
    }

    fn extension(&self) -> &'static str {
        "pptx"
    }

    fn format_name(&self) -> &'static str {
        "PowerPoint"
    }
}
