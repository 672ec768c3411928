use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use tracing::{debug, info};

use crate::error::{LocalizeError, Result};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

#[derive(Debug)]
pub struct DecodedText {
    pub text: String,
    /// Lowercased encoding name, `utf-8-sig` when a BOM was stripped.
    pub encoding: String,
}

/// Decodes CSV bytes to text.
///
/// A forced `label` (WHATWG label such as `windows-1252` or `shift_jis`)
/// wins; otherwise a UTF-8 BOM is stripped, plain UTF-8 is taken as-is, and
/// anything else goes through charset detection.
pub fn decode(bytes: &[u8], label: Option<&str>) -> Result<DecodedText> {
    if let Some(label) = label {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| LocalizeError::Decode(format!("unknown encoding label \"{label}\"")))?;
        return decode_with(bytes, encoding);
    }

    // BOM UTF-8 (EF BB BF)
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        let text = std::str::from_utf8(rest)
            .map_err(|e| LocalizeError::Decode(format!("invalid UTF-8 after BOM: {e}")))?;
        debug!("stripped UTF-8 BOM");
        return Ok(DecodedText {
            text: text.to_string(),
            encoding: "utf-8-sig".into(),
        });
    }

    if let Ok(text) = std::str::from_utf8(bytes) {
        return Ok(DecodedText {
            text: text.to_string(),
            encoding: "utf-8".into(),
        });
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let encoding = detector.guess(None, true);

    info!(encoding = encoding.name(), "input is not UTF-8, using detected encoding");

    decode_with(bytes, encoding)
}

fn decode_with(bytes: &[u8], encoding: &'static Encoding) -> Result<DecodedText> {
    let (text, actual, had_errors) = encoding.decode(bytes);

    if had_errors {
        return Err(LocalizeError::Decode(format!(
            "input contains bytes that are invalid in {}",
            actual.name()
        )));
    }

    let name = if actual == UTF_8 && bytes.starts_with(UTF8_BOM) {
        "utf-8-sig".to_string()
    } else {
        actual.name().to_lowercase()
    };

    Ok(DecodedText {
        text: text.into_owned(),
        encoding: name,
    })
}
