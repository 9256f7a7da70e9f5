use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Image formats recognised from their leading magic bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Gif,
    Png,
}

impl ImageFormat {
    /// Anything unrecognised is treated as PNG.
    pub fn sniff(bytes: &[u8]) -> Self {
        match bytes {
            [0xFF, 0xD8, 0xFF, 0xE0 | 0xE1, ..] => ImageFormat::Jpeg,
            [b'G', b'I', b'F', ..] => ImageFormat::Gif,
            [0x89, b'P', b'N', b'G', ..] => ImageFormat::Png,
            _ => ImageFormat::Png,
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpg",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Png => "image/png",
        }
    }
}

/// Drop a `data:<mime>;base64,` header if one is present.
pub fn strip_header(payload: &str) -> &str {
    match payload.split_once(',') {
        Some((_, body)) => body,
        None => payload,
    }
}

/// Decode raw base64 or a data URL into bytes.
pub fn decode_payload(payload: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let body: String = strip_header(payload)
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    STANDARD.decode(body)
}

pub fn to_data_url(bytes: &[u8]) -> String {
    let format = ImageFormat::sniff(bytes);
    format!("data:{};base64,{}", format.mime_type(), STANDARD.encode(bytes))
}
