use base64::{Engine, engine::general_purpose::STANDARD};
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Shortest encoded image we are willing to send. Anything below this is
/// treated as a failed read rather than a real photo.
pub const MIN_ENCODED_LEN: usize = 100;

/// Photo formats the recognition API accepts
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Base64-encode the full contents of `source`.
///
/// The reader is rewound first: an earlier consumer (a preview, a size probe)
/// may have left the cursor at the end. Returns `None` when there is no source.
pub fn encode<R: Read + Seek>(source: Option<&mut R>) -> io::Result<Option<String>> {
    let Some(reader) = source else {
        return Ok(None);
    };

    reader.seek(SeekFrom::Start(0))?;
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;

    Ok(Some(STANDARD.encode(&bytes)))
}

#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub path: PathBuf,
    pub media_type: &'static str,
    pub byte_len: u64,
    pub data: String,
}

impl EncodedImage {
    pub fn ensure_plausible(&self) -> Result<()> {
        if self.data.len() < MIN_ENCODED_LEN {
            return Err(Error::Input(format!(
                "Could not read {} ({} bytes); pick the photo again",
                self.path.display(),
                self.byte_len
            )));
        }
        Ok(())
    }
}

pub fn media_type(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// Open and encode a photo from disk
pub fn encode_file(path: &Path) -> Result<EncodedImage> {
    let media_type = media_type(path).ok_or_else(|| {
        Error::Input(format!(
            "Unsupported photo format: {} (accepted: {})",
            path.display(),
            ACCEPTED_EXTENSIONS.join(", ")
        ))
    })?;

    let mut file = File::open(path)
        .map_err(|e| Error::Input(format!("Cannot open {}: {}", path.display(), e)))?;
    let byte_len = file.metadata()?.len();

    let data = encode(Some(&mut file))?.unwrap_or_default();

    Ok(EncodedImage {
        path: path.to_path_buf(),
        media_type,
        byte_len,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_encode_none() -> io::Result<()> {
        assert_eq!(encode::<Cursor<Vec<u8>>>(None)?, None);
        Ok(())
    }

    #[test]
    fn test_encode_round_trip() -> anyhow::Result<()> {
        let original: Vec<u8> = (0..=255).collect();
        let mut cursor = Cursor::new(original.clone());

        let encoded = encode(Some(&mut cursor))?.unwrap();
        assert_eq!(STANDARD.decode(encoded)?, original);
        Ok(())
    }

    #[test]
    fn test_encode_rewinds_consumed_reader() -> anyhow::Result<()> {
        let original = b"\xFF\xD8\xFF\xE0 jpeg-ish payload".to_vec();
        let mut cursor = Cursor::new(original.clone());

        let mut preview = Vec::new();
        cursor.read_to_end(&mut preview)?;
        assert_eq!(cursor.position(), original.len() as u64);

        let encoded = encode(Some(&mut cursor))?.unwrap();
        assert_eq!(STANDARD.decode(encoded)?, original);
        Ok(())
    }

    #[test]
    fn test_encode_empty_is_not_an_error() -> io::Result<()> {
        let mut empty = Cursor::new(Vec::new());
        assert_eq!(encode(Some(&mut empty))?, Some(String::new()));
        Ok(())
    }

    #[test]
    fn test_known_encoding() -> io::Result<()> {
        let mut cursor = Cursor::new(b"tire".to_vec());
        assert_eq!(encode(Some(&mut cursor))?.as_deref(), Some("dGlyZQ=="));
        Ok(())
    }

    #[test]
    fn test_media_type() {
        assert_eq!(media_type(Path::new("a.JPG")), Some("image/jpeg"));
        assert_eq!(media_type(Path::new("a.jpeg")), Some("image/jpeg"));
        assert_eq!(media_type(Path::new("a.png")), Some("image/png"));
        assert_eq!(media_type(Path::new("a.gif")), None);
        assert_eq!(media_type(Path::new("noext")), None);
    }

    #[test]
    fn test_encode_file_rejects_unsupported_format() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("car.gif");
        std::fs::write(&path, b"GIF89a")?;

        let err = encode_file(&path).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
        assert!(err.to_string().contains("Unsupported photo format"));
        Ok(())
    }

    #[test]
    fn test_encode_file_missing_is_input_error() {
        let err = encode_file(Path::new("/definitely/not/here.jpg")).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }

    #[test]
    fn test_plausibility_threshold() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;

        let tiny = temp_dir.path().join("tiny.png");
        std::fs::write(&tiny, b"\x89PNG")?;
        let encoded = encode_file(&tiny)?;
        assert_eq!(encoded.byte_len, 4);
        assert!(encoded.ensure_plausible().is_err());

        let real = temp_dir.path().join("real.jpg");
        std::fs::write(&real, vec![0xABu8; 512])?;
        let encoded = encode_file(&real)?;
        assert_eq!(encoded.media_type, "image/jpeg");
        assert!(encoded.ensure_plausible().is_ok());
        Ok(())
    }
}
