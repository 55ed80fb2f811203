//! WordprocessingML writer.
//!
//! A `.docx` is a zip package of XML parts. Only the parts Word needs to open
//! a document are written: content types, the package relationships, the
//! main document, its styles and the relationship between the two.

use std::io::{Cursor, Write};

use html_escape::{encode_double_quoted_attribute, encode_text};
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::models::VariantProfile;
use crate::parsing::{Block, HeadingLevel, Indent, Run};

use super::RenderError;

/// Half-points.
const BODY_SIZE: u32 = 22;
const TITLE_SIZE: u32 = 44;

/// A4 in twips.
const PAGE_WIDTH: u32 = 11906;
const PAGE_HEIGHT: u32 = 16838;
const PAGE_MARGIN: u32 = 1440;

const LIST_INDENT: u32 = 720;

/// Size, spacing before and spacing after of `Heading1` .. `Heading4`.
const HEADING_STYLES: [(HeadingLevel, u32, u32, u32); 4] = [
    (HeadingLevel::H1, 32, 240, 120),
    (HeadingLevel::H2, 28, 180, 100),
    (HeadingLevel::H3, 26, 140, 80),
    (HeadingLevel::H4, 24, 120, 60),
];

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/><Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/></Types>"#;

const PACKAGE_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/></Relationships>"#;

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Renders `blocks` as a `.docx` package using the variant's font.
pub fn render(blocks: &[Block], profile: &VariantProfile) -> Result<Vec<u8>, RenderError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", PACKAGE_RELS_XML.to_string()),
        ("word/document.xml", document_xml(blocks)),
        ("word/styles.xml", styles_xml(profile)),
        ("word/_rels/document.xml.rels", DOCUMENT_RELS_XML.to_string()),
    ];
    for (name, xml) in parts {
        zip.start_file(name, options)?;
        zip.write_all(xml.as_bytes())?;
    }

    Ok(zip.finish()?.into_inner())
}

/// Paragraph properties. Unset values inherit from the paragraph style.
#[derive(Debug, Default, Clone, Copy)]
struct Para<'a> {
    style: Option<&'a str>,
    before: Option<u32>,
    after: Option<u32>,
    indent: Option<u32>,
    centered: bool,
}

impl<'a> Para<'a> {
    fn styled(style: &'a str) -> Self {
        Self {
            style: Some(style),
            ..Self::default()
        }
    }

    fn spacing(before: Option<u32>, after: u32) -> Self {
        Self {
            before,
            after: Some(after),
            ..Self::default()
        }
    }

    fn indented(mut self, indent: u32) -> Self {
        self.indent = Some(indent);
        self
    }

    fn write(&self, out: &mut String) {
        out.push_str("<w:pPr>");
        if let Some(style) = self.style {
            out.push_str(&format!(r#"<w:pStyle w:val="{style}"/>"#));
        }
        if self.before.is_some() || self.after.is_some() {
            out.push_str("<w:spacing");
            if let Some(before) = self.before {
                out.push_str(&format!(r#" w:before="{before}""#));
            }
            if let Some(after) = self.after {
                out.push_str(&format!(r#" w:after="{after}""#));
            }
            out.push_str("/>");
        }
        if let Some(indent) = self.indent {
            out.push_str(&format!(r#"<w:ind w:left="{indent}"/>"#));
        }
        if self.centered {
            out.push_str(r#"<w:jc w:val="center"/>"#);
        }
        out.push_str("</w:pPr>");
    }
}

fn document_xml(blocks: &[Block]) -> String {
    let mut out = String::with_capacity(blocks.len() * 128);
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    out.push('\n');
    out.push_str(&format!(r#"<w:document xmlns:w="{W_NS}"><w:body>"#));

    for block in blocks {
        write_block(&mut out, block);
    }

    out.push_str(&format!(
        r#"<w:sectPr><w:pgSz w:w="{PAGE_WIDTH}" w:h="{PAGE_HEIGHT}"/><w:pgMar w:top="{m}" w:right="{m}" w:bottom="{m}" w:left="{m}" w:header="708" w:footer="708" w:gutter="0"/></w:sectPr>"#,
        m = PAGE_MARGIN
    ));
    out.push_str("</w:body></w:document>");
    out
}

fn write_block(out: &mut String, block: &Block) {
    match block {
        Block::Title { text } => paragraph(
            out,
            Para {
                before: Some(400),
                after: Some(200),
                ..Para::styled("Title")
            },
            &[Run::plain(text.as_str())],
        ),
        Block::Subtitle { text } => paragraph(
            out,
            Para {
                after: Some(200),
                centered: true,
                ..Para::default()
            },
            &[Run::plain(text.as_str())],
        ),
        Block::Centered { text } => paragraph(
            out,
            Para {
                centered: true,
                ..Para::default()
            },
            &[Run::plain(text.as_str())],
        ),
        Block::Heading { level, text } => paragraph(
            out,
            Para::styled(&heading_style_id(*level)),
            &[Run::plain(text.as_str())],
        ),
        Block::EmphasisParagraph { text } => paragraph(
            out,
            Para::spacing(Some(120), 120),
            &[Run::bold(text.as_str())],
        ),
        Block::StyledParagraph { runs } => paragraph(out, Para::spacing(None, 120), runs),
        Block::ListItem { runs, .. } => {
            paragraph(out, Para::default().indented(LIST_INDENT), runs)
        }
        Block::RawLine { text } => paragraph(
            out,
            Para::spacing(Some(60), 60),
            &[Run::plain(text.as_str())],
        ),
        Block::NoteReference { number } => paragraph(
            out,
            Para::spacing(None, 0),
            &[Run::superscript(format!("^{number}"))],
        ),
        Block::Detail { runs, indent } => paragraph(out, detail_para(runs, *indent), runs),
        Block::Break => out.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#),
    }
}

/// Appendix spacing: entry headings open with a superscript number, the
/// truncation notice is the only all-italic source line.
fn detail_para(runs: &[Run], indent: Indent) -> Para<'static> {
    match indent {
        Indent::None if runs.first().is_some_and(|r| r.superscript) => {
            Para::spacing(Some(200), 80)
        }
        Indent::None => Para::spacing(None, 80),
        Indent::Field => Para::spacing(None, 60).indented(360),
        Indent::Source if !runs.is_empty() && runs.iter().all(|r| r.italic) => {
            Para::spacing(None, 120).indented(720)
        }
        Indent::Source => Para::spacing(None, 20).indented(720),
    }
}

fn heading_style_id(level: HeadingLevel) -> String {
    format!("Heading{}", level.depth())
}

fn paragraph(out: &mut String, para: Para<'_>, runs: &[Run]) {
    out.push_str("<w:p>");
    para.write(out);
    for run in runs {
        write_run(out, run);
    }
    out.push_str("</w:p>");
}

fn write_run(out: &mut String, run: &Run) {
    out.push_str("<w:r>");
    if run.bold || run.italic || run.superscript {
        out.push_str("<w:rPr>");
        if run.bold {
            out.push_str("<w:b/>");
        }
        if run.italic {
            out.push_str("<w:i/>");
        }
        if run.superscript {
            out.push_str(r#"<w:vertAlign w:val="superscript"/>"#);
        }
        out.push_str("</w:rPr>");
    }
    out.push_str(r#"<w:t xml:space="preserve">"#);
    out.push_str(&encode_text(&run.text));
    out.push_str("</w:t></w:r>");
}

fn styles_xml(profile: &VariantProfile) -> String {
    let font = encode_double_quoted_attribute(&profile.font);
    let lang = if profile.is_korean() { "ko-KR" } else { "en-US" };

    let mut out = String::new();
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    out.push('\n');
    out.push_str(&format!(r#"<w:styles xmlns:w="{W_NS}">"#));
    out.push_str(&format!(
        r#"<w:docDefaults><w:rPrDefault><w:rPr><w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:eastAsia="{font}" w:cs="{font}"/><w:sz w:val="{BODY_SIZE}"/><w:szCs w:val="{BODY_SIZE}"/><w:lang w:val="{lang}" w:eastAsia="{lang}"/></w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>"#
    ));
    out.push_str(
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
    );
    out.push_str(&format!(
        r#"<w:style w:type="paragraph" w:styleId="Title"><w:name w:val="Title"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:spacing w:after="240"/><w:jc w:val="center"/></w:pPr><w:rPr><w:b/><w:sz w:val="{TITLE_SIZE}"/><w:szCs w:val="{TITLE_SIZE}"/></w:rPr></w:style>"#
    ));
    for (level, size, before, after) in HEADING_STYLES {
        let depth = level.depth();
        out.push_str(&format!(
            r#"<w:style w:type="paragraph" w:styleId="{id}"><w:name w:val="heading {depth}"/><w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/><w:pPr><w:keepNext/><w:spacing w:before="{before}" w:after="{after}"/><w:outlineLvl w:val="{outline}"/></w:pPr><w:rPr><w:b/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr></w:style>"#,
            id = heading_style_id(level),
            outline = depth - 1,
        ));
    }
    out.push_str("</w:styles>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Variant;
    use pretty_assertions::assert_eq;
    use std::io::Read;

    fn part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut xml = String::new();
        file.read_to_string(&mut xml).unwrap();
        xml
    }

    fn render_en(blocks: &[Block]) -> Vec<u8> {
        render(blocks, &Variant::Primary.default_profile()).unwrap()
    }

    #[test]
    fn package_has_required_parts() {
        let bytes = render_en(&[]);
        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let mut names: Vec<&str> = archive.file_names().collect();
        names.sort();
        assert_eq!(
            names,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "word/_rels/document.xml.rels",
                "word/document.xml",
                "word/styles.xml",
            ]
        );
    }

    #[test]
    fn runs_carry_their_styles() {
        let bytes = render_en(&[Block::StyledParagraph {
            runs: vec![Run::plain("a "), Run::bold("b"), Run::italic("c")],
        }]);
        let xml = part(&bytes, "word/document.xml");
        assert!(xml.contains(
            r#"<w:p><w:pPr><w:spacing w:after="120"/></w:pPr><w:r><w:t xml:space="preserve">a </w:t></w:r><w:r><w:rPr><w:b/></w:rPr><w:t xml:space="preserve">b</w:t></w:r><w:r><w:rPr><w:i/></w:rPr><w:t xml:space="preserve">c</w:t></w:r></w:p>"#
        ));
    }

    #[test]
    fn text_is_escaped() {
        let bytes = render_en(&[Block::RawLine {
            text: "| a < b & c |".to_string(),
        }]);
        let xml = part(&bytes, "word/document.xml");
        assert!(xml.contains("| a &lt; b &amp; c |"));
    }

    #[test]
    fn headings_use_heading_styles() {
        let bytes = render_en(&[Block::Heading {
            level: HeadingLevel::H3,
            text: "Scope".to_string(),
        }]);
        let xml = part(&bytes, "word/document.xml");
        assert!(xml.contains(r#"<w:pStyle w:val="Heading3"/>"#));

        let styles = part(&bytes, "word/styles.xml");
        assert!(styles.contains(
            r#"<w:spacing w:before="140" w:after="80"/><w:outlineLvl w:val="2"/></w:pPr><w:rPr><w:b/><w:sz w:val="26"/>"#
        ));
    }

    #[test]
    fn page_breaks_and_note_references() {
        let bytes = render_en(&[Block::Break, Block::NoteReference { number: 3 }]);
        let xml = part(&bytes, "word/document.xml");
        assert!(xml.contains(r#"<w:br w:type="page"/>"#));
        assert!(xml.contains(
            r#"<w:rPr><w:vertAlign w:val="superscript"/></w:rPr><w:t xml:space="preserve">^3</w:t>"#
        ));
    }

    #[test]
    fn list_items_are_indented_without_a_bullet() {
        let bytes = render_en(&[Block::ListItem {
            runs: vec![Run::plain("item")],
            ordered: false,
        }]);
        let xml = part(&bytes, "word/document.xml");
        assert!(xml.contains(
            r#"<w:p><w:pPr><w:ind w:left="720"/></w:pPr><w:r><w:t xml:space="preserve">item</w:t></w:r></w:p>"#
        ));
        assert!(!xml.contains('•'));
    }

    #[test]
    fn title_page_spacing() {
        let bytes = render_en(&[
            Block::Title {
                text: "Free Will".to_string(),
            },
            Block::Subtitle {
                text: "Doctoral Dissertation".to_string(),
            },
            Block::Centered {
                text: "January 2026".to_string(),
            },
        ]);
        let xml = part(&bytes, "word/document.xml");
        assert!(xml.contains(
            r#"<w:pPr><w:pStyle w:val="Title"/><w:spacing w:before="400" w:after="200"/></w:pPr>"#
        ));
        assert!(xml.contains(
            r#"<w:pPr><w:spacing w:after="200"/><w:jc w:val="center"/></w:pPr><w:r><w:t xml:space="preserve">Doctoral Dissertation"#
        ));
        assert!(xml.contains(
            r#"<w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t xml:space="preserve">January 2026"#
        ));
    }

    #[test]
    fn detail_spacing_follows_line_role() {
        let heading = detail_para(
            &[Run::superscript("[1] ").emboldened(), Run::bold("Claim C1")],
            Indent::None,
        );
        assert_eq!((heading.before, heading.after), (Some(200), Some(80)));

        let notice = detail_para(&[Run::italic("...")], Indent::Source);
        assert_eq!((notice.after, notice.indent), (Some(120), Some(720)));

        let field = detail_para(&[Run::bold("Text: ")], Indent::Field);
        assert_eq!((field.after, field.indent), (Some(60), Some(360)));
    }

    #[test]
    fn styles_use_variant_font() {
        let bytes = render(&[], &Variant::Secondary.default_profile()).unwrap();
        let styles = part(&bytes, "word/styles.xml");
        assert!(styles.contains(r#"w:ascii="Malgun Gothic""#));
        assert!(styles.contains(r#"<w:lang w:val="ko-KR" w:eastAsia="ko-KR"/>"#));
        assert!(styles.contains(r#"<w:sz w:val="22"/>"#));
    }

    #[test]
    fn a4_page_with_inch_margins() {
        let xml = part(&render_en(&[]), "word/document.xml");
        assert!(xml.contains(r#"<w:pgSz w:w="11906" w:h="16838"/>"#));
        assert!(xml.contains(r#"w:top="1440" w:right="1440" w:bottom="1440" w:left="1440""#));
    }
}
