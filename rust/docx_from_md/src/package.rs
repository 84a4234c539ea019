//! Writes the serialized parts into a `.docx` zip container.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use log::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::ConvertError;
use crate::model::Document;
use crate::ooxml;

pub const PARTS: [&str; 6] = [
    "[Content_Types].xml",
    "_rels/.rels",
    "word/document.xml",
    "word/styles.xml",
    "word/footer1.xml",
    "word/_rels/document.xml.rels",
];

pub fn write_docx(out_path: &Path, doc: &Document) -> Result<(), ConvertError> {
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let document_xml = ooxml::document_xml(doc);
    debug!(bytes = document_xml.len(); "Serialized document part");

    let file = File::create(out_path)?;
    let mut zip = ZipWriter::new(file);
    let opt = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", opt)?;
    zip.write_all(ooxml::content_types_xml().as_bytes())?;

    zip.add_directory("_rels/", opt)?;
    zip.start_file("_rels/.rels", opt)?;
    zip.write_all(ooxml::rels_xml().as_bytes())?;

    zip.add_directory("word/", opt)?;
    zip.add_directory("word/_rels/", opt)?;

    zip.start_file("word/document.xml", opt)?;
    zip.write_all(document_xml.as_bytes())?;

    zip.start_file("word/_rels/document.xml.rels", opt)?;
    zip.write_all(ooxml::document_rels_xml().as_bytes())?;

    zip.start_file("word/styles.xml", opt)?;
    zip.write_all(ooxml::styles_xml().as_bytes())?;

    zip.start_file("word/footer1.xml", opt)?;
    zip.write_all(ooxml::footer_xml().as_bytes())?;

    zip.finish()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn writes_every_part_and_creates_parent_dirs() {
        let dir = tempfile::tempdir().expect("tempdir");
        let out = dir.path().join("nested").join("out.docx");
        write_docx(&out, &Document::default()).expect("write docx");

        let mut archive = zip::ZipArchive::new(File::open(&out).expect("open")).expect("zip");
        for part in PARTS {
            assert!(archive.by_name(part).is_ok(), "missing {part}");
        }

        let mut xml = String::new();
        archive
            .by_name("word/document.xml")
            .expect("document part")
            .read_to_string(&mut xml)
            .expect("utf-8");
        assert!(xml.contains("footerReference"));
    }

    #[test]
    fn unwritable_target_is_an_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory cannot be opened as the output file.
        let err = write_docx(dir.path(), &Document::default()).unwrap_err();
        assert!(matches!(err, ConvertError::Io(_)));
    }
}
