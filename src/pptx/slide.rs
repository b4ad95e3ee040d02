//! Per-slide XML: black background, a title box and a verse body box.

use quick_xml::escape::escape;

use super::parts::{NS_DRAWING, NS_PRESENTATION, NS_RELATIONSHIPS};
use super::TextStyle;
use crate::constants::{layout, units};
use crate::layout::Page;

/// Position and size of a text box, in EMUs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Frame {
    pub x: i64,
    pub y: i64,
    pub cx: i64,
    pub cy: i64,
}

impl Frame {
    fn from_cm(x: f64, y: f64, cx: f64, cy: f64) -> Self {
        Self { x: cm(x), y: cm(y), cx: cm(cx), cy: cm(cy) }
    }
}

#[allow(clippy::cast_possible_truncation)]
pub(super) fn cm(value: f64) -> i64 {
    (value * units::EMU_PER_CM).round() as i64
}

/// Hundredths of a point, the unit of `sz` and `spcPts`.
#[allow(clippy::cast_possible_truncation)]
fn centipoints(pt: f64) -> i64 {
    (pt * 100.0).round() as i64
}

/// Title and body frames for a page; continuation pages move the body up.
pub(super) fn frames(page: &Page, box_width_cm: f64, max_body_height_cm: f64) -> (Frame, Frame) {
    let title = Frame::from_cm(
        layout::MARGIN_LEFT_CM,
        layout::TITLE_TOP_CM,
        box_width_cm,
        layout::TITLE_HEIGHT_CM,
    );
    let body_top = if page.is_continuation() {
        layout::BODY_TOP_CONTINUATION_CM
    } else {
        layout::BODY_TOP_CM
    };
    let body = Frame::from_cm(layout::MARGIN_LEFT_CM, body_top, box_width_cm, max_body_height_cm);
    (title, body)
}

/// `ppt/slides/slideN.xml`
pub(super) fn slide_xml(page: &Page, style: &TextStyle, box_width_cm: f64, max_body_height_cm: f64) -> String {
    let (title_frame, body_frame) = frames(page, box_width_cm, max_body_height_cm);

    let mut shapes = String::new();
    if !page.is_continuation() {
        let title = run_paragraph(&page.title, style.title_pt, None, style);
        shapes.push_str(&text_box(2, "Title", title_frame, &title));
    }

    let line_spacing_pt = style.body_pt * style.line_spacing;
    let body: String = page
        .lines
        .iter()
        .map(|line| run_paragraph(&line.rendered(), style.body_pt, Some(line_spacing_pt), style))
        .collect();
    shapes.push_str(&text_box(3, "Body", body_frame, &body));

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:bg><p:bgPr><a:solidFill><a:srgbClr val="{bg}"/></a:solidFill><a:effectLst/></p:bgPr></p:bg>
    <p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr/>
{shapes}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
        bg = style.background,
    )
}

fn text_box(id: u32, name: &str, frame: Frame, paragraphs: &str) -> String {
    let Frame { x, y, cx, cy } = frame;
    format!(
        r#"      <p:sp>
        <p:nvSpPr><p:cNvPr id="{id}" name="{name}"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>
        <p:spPr>
          <a:xfrm><a:off x="{x}" y="{y}"/><a:ext cx="{cx}" cy="{cy}"/></a:xfrm>
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
          <a:noFill/>
        </p:spPr>
        <p:txBody>
          <a:bodyPr wrap="square" rtlCol="0"><a:noAutofit/></a:bodyPr>
          <a:lstStyle/>
{paragraphs}        </p:txBody>
      </p:sp>
"#
    )
}

fn run_paragraph(text: &str, size_pt: f64, line_spacing_pt: Option<f64>, style: &TextStyle) -> String {
    let spacing = line_spacing_pt
        .map(|pt| {
            format!(
                r#"<a:lnSpc><a:spcPts val="{}"/></a:lnSpc><a:spcAft><a:spcPts val="{}"/></a:spcAft>"#,
                centipoints(pt),
                centipoints(style.space_after_pt),
            )
        })
        .unwrap_or_default();
    let font = escape(&style.font_name);
    format!(
        r#"          <a:p><a:pPr algn="l">{spacing}</a:pPr><a:r><a:rPr lang="ko-KR" altLang="en-US" sz="{sz}" dirty="0"><a:solidFill><a:srgbClr val="{color}"/></a:solidFill><a:latin typeface="{font}"/><a:ea typeface="{font}"/></a:rPr><a:t>{text}</a:t></a:r></a:p>
"#,
        sz = centipoints(size_pt),
        color = style.foreground,
        text = escape(text),
    )
}
