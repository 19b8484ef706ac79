use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::error;
use zip::ZipArchive;

/// Paragraph text in document order, joined with newlines.
///
/// DOCX files are ZIP archives; the body lives in `word/document.xml` as
/// `w:p` paragraph elements containing `w:t` text runs.
pub(super) fn extract(path: &Path) -> String {
    match read_paragraphs(path) {
        Ok(paragraphs) => paragraphs.join("\n"),
        Err(e) => {
            error!("Error extracting text from DOCX {}: {e}", path.display());
            String::new()
        }
    }
}

fn read_paragraphs(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let mut xml = String::new();
    archive
        .by_name("word/document.xml")?
        .read_to_string(&mut xml)?;

    let mut reader = Reader::from_str(&xml);
    reader.trim_text(false);

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text_run = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) if e.name().as_ref() == b"w:t" => in_text_run = true,
            Event::Text(e) if in_text_run => current.push_str(&e.unescape()?),
            Event::End(e) => match e.name().as_ref() {
                b"w:t" => in_text_run = false,
                b"w:p" => paragraphs.push(std::mem::take(&mut current)),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }
    // text runs outside any closed paragraph
    if !current.is_empty() {
        paragraphs.push(current);
    }

    Ok(paragraphs)
}
