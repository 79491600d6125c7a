//! Deterministic zip container writer.
//!
//! Parts are written in the fixed order the assembler produced, with a
//! fixed modification time, so the same logical document always yields the
//! same container bytes.

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::error::PackageError;

use super::parts::PackagePart;

pub fn write(parts: &[PackagePart]) -> Result<Vec<u8>, PackageError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    for part in parts {
        writer.start_file(part.path.as_str(), options)?;
        writer.write_all(&part.data)?;
    }

    Ok(writer.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use zip::ZipArchive;

    fn part(path: &str, data: &str) -> PackagePart {
        PackagePart {
            path: path.to_string(),
            content_type: "application/xml",
            data: data.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_round_trips_paths_and_content() {
        let parts = vec![part("a.xml", "<a/>"), part("dir/b.xml", "<b/>")];
        let bytes = write(&parts).unwrap();

        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(String::from).collect();
        assert_eq!(names, vec!["a.xml", "dir/b.xml"]);

        let mut content = String::new();
        std::io::Read::read_to_string(&mut archive.by_name("dir/b.xml").unwrap(), &mut content)
            .unwrap();
        assert_eq!(content, "<b/>");
    }

    #[test]
    fn test_output_is_deterministic() {
        let parts = vec![part("a.xml", "<a/>"), part("b.xml", "<b/>")];
        assert_eq!(write(&parts).unwrap(), write(&parts).unwrap());
    }
}
