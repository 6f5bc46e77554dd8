// ABOUTME: Per-format width/height extraction from partial byte buffers
// ABOUTME: Ok(None) means "need more bytes"; errors are reserved for malformed data

use crate::dimensions::Dimensions;
use crate::error::ImageSizeError;
use crate::format::ImageFormat;

/// Extract the frame dimensions of `data`, already classified as `format`.
///
/// Returns `Ok(None)` when the buffer does not yet contain enough bytes to
/// reach the header fields — the caller should collect more data and retry.
/// All multi-byte reads use the explicit endianness of the format, never
/// the platform's.
pub fn extract_dimensions(
    format: ImageFormat,
    data: &[u8],
) -> Result<Option<Dimensions>, ImageSizeError> {
    if let Some(min) = format.minimum_sample() {
        if data.len() <= min {
            return Ok(None);
        }
    }

    match format {
        ImageFormat::Png => Ok(Some(png_dimensions(data))),
        ImageFormat::Gif => Ok(Some(gif_dimensions(data))),
        ImageFormat::Bmp => Ok(Some(bmp_dimensions(data))),
        ImageFormat::Jpeg => jpeg_dimensions(data),
    }
}

/// IHDR follows the 8-byte signature plus the 4-byte chunk length and
/// 4-byte chunk tag, so width/height sit at fixed offsets 16 and 20.
fn png_dimensions(data: &[u8]) -> Dimensions {
    let width = u32::from_be_bytes([data[16], data[17], data[18], data[19]]);
    let height = u32::from_be_bytes([data[20], data[21], data[22], data[23]]);
    Dimensions::new(width, height)
}

/// Logical screen descriptor of the first screen; GIF is little-endian.
fn gif_dimensions(data: &[u8]) -> Dimensions {
    let width = u16::from_le_bytes([data[6], data[7]]);
    let height = u16::from_le_bytes([data[8], data[9]]);
    Dimensions::new(u32::from(width), u32::from(height))
}

fn bmp_dimensions(data: &[u8]) -> Dimensions {
    let dib_len = u16::from_le_bytes([data[14], data[15]]);
    if dib_len == 12 {
        // OS/2 core header: 16-bit fields.
        let width = u16::from_le_bytes([data[18], data[19]]);
        let height = u16::from_le_bytes([data[20], data[21]]);
        Dimensions::new(u32::from(width), u32::from(height))
    } else {
        // BITMAPINFOHEADER and later: 32-bit fields, height negative for
        // top-down bitmaps.
        let width = i32::from_le_bytes([data[18], data[19], data[20], data[21]]);
        let height = i32::from_le_bytes([data[22], data[23], data[24], data[25]]);
        Dimensions::new(width.unsigned_abs(), height.unsigned_abs())
    }
}

/// Walk the marker chain until a Start-Of-Frame segment is found.
///
/// JPEG has no fixed header offset: the SOF segment carrying the frame
/// size can sit after any number of APPn/DQT/COM segments, so this is a
/// literal structural walk. Anything that looks like a truncated chain
/// (cursor past the buffer, or a non-marker byte where a marker should
/// be) answers `Ok(None)` so the caller can fetch a larger sample.
fn jpeg_dimensions(data: &[u8]) -> Result<Option<Dimensions>, ImageSizeError> {
    if data.len() < 11 {
        return Ok(None);
    }
    // SOI immediately followed by an APP0 segment...
    if data[0..4] != [0xFF, 0xD8, 0xFF, 0xE0] {
        return Err(ImageSizeError::UnsupportedFormat);
    }
    // ...whose payload carries the null-terminated JFIF identifier.
    if &data[6..10] != b"JFIF" || data[10] != 0x00 {
        return Err(ImageSizeError::UnsupportedFormat);
    }

    // The first segment never carries the frame size; its length field
    // sits right after the APP0 marker and counts itself plus payload.
    let mut cursor = 4usize;
    let mut segment_len = u16::from_be_bytes([data[4], data[5]]) as usize;
    loop {
        cursor += segment_len;
        if cursor + 1 >= data.len() {
            return Ok(None);
        }
        if data[cursor] != 0xFF {
            return Ok(None);
        }
        if (0xC0..=0xC3).contains(&data[cursor + 1]) {
            // SOF0..SOF3: two big-endian u16s, height first.
            if cursor + 8 >= data.len() {
                return Ok(None);
            }
            let height = u16::from_be_bytes([data[cursor + 5], data[cursor + 6]]);
            let width = u16::from_be_bytes([data[cursor + 7], data[cursor + 8]]);
            return Ok(Some(Dimensions::new(u32::from(width), u32::from(height))));
        }
        cursor += 2;
        if cursor + 1 >= data.len() {
            return Ok(None);
        }
        segment_len = u16::from_be_bytes([data[cursor], data[cursor + 1]]) as usize;
    }
}
