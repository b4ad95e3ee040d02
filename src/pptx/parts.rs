//! Fixed PresentationML package parts.
//!
//! Everything here is boilerplate shared by every deck: one slide master,
//! one blank layout, one theme. Per-slide XML lives in `slide.rs`.

use std::fmt::Write as _;

pub(super) const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
pub(super) const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub(super) const NS_PRESENTATION: &str =
    "http://schemas.openxmlformats.org/presentationml/2006/main";
pub(super) const NS_PACKAGE_RELS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";

const REL_SLIDE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";
const REL_SLIDE_LAYOUT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";
const REL_SLIDE_MASTER: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";
const REL_THEME: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// `[Content_Types].xml`
pub(super) fn content_types(slide_count: usize) -> String {
    let mut xml = format!(
        r#"{XML_DECL}
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
"#
    );
    for i in 1..=slide_count {
        let _ = writeln!(
            xml,
            r#"  <Override PartName="/ppt/slides/slide{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slide+xml"/>"#
        );
    }
    xml.push_str("</Types>");
    xml
}

/// `_rels/.rels`
pub(super) fn root_rels() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="{NS_PACKAGE_RELS}">
  <Relationship Id="rId1" Type="{NS_RELATIONSHIPS}/officeDocument" Target="ppt/presentation.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="{NS_RELATIONSHIPS}/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#
    )
}

/// `docProps/app.xml`
pub(super) fn app_props(slide_count: usize, aspect_name: &str) -> String {
    format!(
        r#"{XML_DECL}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <Application>{app}</Application>
  <PresentationFormat>On-screen Show ({aspect_name})</PresentationFormat>
  <Slides>{slide_count}</Slides>
  <AppVersion>{version}</AppVersion>
</Properties>"#,
        app = env!("CARGO_PKG_NAME"),
        version = env!("CARGO_PKG_VERSION"),
    )
}

/// `docProps/core.xml`; `title` must already be escaped.
pub(super) fn core_props(title: &str, timestamp: &str) -> String {
    format!(
        r#"{XML_DECL}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{title}</dc:title>
  <dc:creator>{app}</dc:creator>
  <dcterms:created xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:modified>
</cp:coreProperties>"#,
        app = env!("CARGO_PKG_NAME"),
    )
}

/// `ppt/presentation.xml`
pub(super) fn presentation(slide_count: usize, width_emu: i64, height_emu: i64) -> String {
    let mut slide_ids = String::new();
    for i in 1..=slide_count {
        // rId1 is the slide master; slides follow.
        let _ = writeln!(slide_ids, r#"    <p:sldId id="{}" r:id="rId{}"/>"#, 255 + i, i + 1);
    }
    format!(
        r#"{XML_DECL}
<p:presentation xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" saveSubsetFonts="1">
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:sldIdLst>
{slide_ids}  </p:sldIdLst>
  <p:sldSz cx="{width_emu}" cy="{height_emu}"/>
  <p:notesSz cx="{height_emu}" cy="{width_emu}"/>
</p:presentation>"#
    )
}

/// `ppt/_rels/presentation.xml.rels`
pub(super) fn presentation_rels(slide_count: usize) -> String {
    let mut xml = format!(
        r#"{XML_DECL}
<Relationships xmlns="{NS_PACKAGE_RELS}">
  <Relationship Id="rId1" Type="{REL_SLIDE_MASTER}" Target="slideMasters/slideMaster1.xml"/>
"#
    );
    for i in 1..=slide_count {
        let _ = writeln!(
            xml,
            r#"  <Relationship Id="rId{}" Type="{REL_SLIDE}" Target="slides/slide{i}.xml"/>"#,
            i + 1
        );
    }
    let _ = write!(
        xml,
        r#"  <Relationship Id="rId{}" Type="{REL_THEME}" Target="theme/theme1.xml"/>
</Relationships>"#,
        slide_count + 2
    );
    xml
}

/// `ppt/slideMasters/slideMaster1.xml`
pub(super) fn slide_master() -> String {
    format!(
        r#"{XML_DECL}
<p:sldMaster xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
  <p:txStyles>
    <p:titleStyle/>
    <p:bodyStyle/>
    <p:otherStyle/>
  </p:txStyles>
</p:sldMaster>"#
    )
}

/// `ppt/slideMasters/_rels/slideMaster1.xml.rels`
pub(super) fn slide_master_rels() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="{NS_PACKAGE_RELS}">
  <Relationship Id="rId1" Type="{REL_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="{REL_THEME}" Target="../theme/theme1.xml"/>
</Relationships>"#
    )
}

/// `ppt/slideLayouts/slideLayout1.xml`
pub(super) fn blank_layout() -> String {
    format!(
        r#"{XML_DECL}
<p:sldLayout xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" type="blank" preserve="1">
  <p:cSld name="Blank">
    <p:spTree>
      <p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#
    )
}

/// `ppt/slideLayouts/_rels/slideLayout1.xml.rels`
pub(super) fn blank_layout_rels() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="{NS_PACKAGE_RELS}">
  <Relationship Id="rId1" Type="{REL_SLIDE_MASTER}" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#
    )
}

/// `ppt/slides/_rels/slideN.xml.rels`
pub(super) fn slide_rels() -> String {
    format!(
        r#"{XML_DECL}
<Relationships xmlns="{NS_PACKAGE_RELS}">
  <Relationship Id="rId1" Type="{REL_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>
</Relationships>"#
    )
}

/// `ppt/theme/theme1.xml`
pub(super) fn theme(font_name: &str) -> String {
    format!(
        r#"{XML_DECL}
<a:theme xmlns:a="{NS_DRAWING}" name="versedeck">
  <a:themeElements>
    <a:clrScheme name="versedeck">
      <a:dk1><a:srgbClr val="000000"/></a:dk1>
      <a:lt1><a:srgbClr val="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="44546A"/></a:dk2>
      <a:lt2><a:srgbClr val="E7E6E6"/></a:lt2>
      <a:accent1><a:srgbClr val="4472C4"/></a:accent1>
      <a:accent2><a:srgbClr val="ED7D31"/></a:accent2>
      <a:accent3><a:srgbClr val="A5A5A5"/></a:accent3>
      <a:accent4><a:srgbClr val="FFC000"/></a:accent4>
      <a:accent5><a:srgbClr val="5B9BD5"/></a:accent5>
      <a:accent6><a:srgbClr val="70AD47"/></a:accent6>
      <a:hlink><a:srgbClr val="0563C1"/></a:hlink>
      <a:folHlink><a:srgbClr val="954F72"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="versedeck">
      <a:majorFont><a:latin typeface="{font_name}"/><a:ea typeface="{font_name}"/><a:cs typeface=""/></a:majorFont>
      <a:minorFont><a:latin typeface="{font_name}"/><a:ea typeface="{font_name}"/><a:cs typeface=""/></a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="versedeck">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#
    )
}
