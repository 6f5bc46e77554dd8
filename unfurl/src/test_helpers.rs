// ABOUTME: Test fixture builders for synthetic image headers and OG HTML
// ABOUTME: Compiled only for unit tests inside this crate

/// Minimal PNG: signature, IHDR length/tag, width/height, padding.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut data = vec![0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&13u32.to_be_bytes());
    data.extend_from_slice(b"IHDR");
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&[8, 6, 0, 0, 0]);
    data.extend_from_slice(&[0; 4]);
    data
}

/// Minimal GIF89a logical screen descriptor.
pub fn gif_bytes(width: u16, height: u16) -> Vec<u8> {
    let mut data = b"GIF89a".to_vec();
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.extend_from_slice(&[0xF7, 0x00, 0x00]);
    data
}

/// JFIF JPEG with `filler_segments` COM segments before a SOF0 marker.
pub fn jpeg_bytes(width: u16, height: u16, filler_segments: usize) -> Vec<u8> {
    let mut data = jfif_prelude();
    for _ in 0..filler_segments {
        push_com_segment(&mut data);
    }
    data.extend_from_slice(&[0xFF, 0xC0]);
    data.extend_from_slice(&17u16.to_be_bytes());
    data.push(8);
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&[3, 1, 0x22, 0, 2, 0x11, 1, 3, 0x11, 1]);
    data
}

/// A valid JFIF marker chain of at least `min_len` bytes that never
/// reaches a SOF segment, for exercising probe starvation.
pub fn jpeg_without_sof(min_len: usize) -> Vec<u8> {
    let mut data = jfif_prelude();
    while data.len() < min_len {
        push_com_segment(&mut data);
    }
    data
}

fn jfif_prelude() -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xE0];
    data.extend_from_slice(&16u16.to_be_bytes());
    data.extend_from_slice(b"JFIF\0");
    data.extend_from_slice(&[0x01, 0x02, 0x00]);
    data.extend_from_slice(&[0x00, 0x48, 0x00, 0x48, 0x00, 0x00]);
    data
}

fn push_com_segment(data: &mut Vec<u8>) {
    data.extend_from_slice(&[0xFF, 0xFE]);
    data.extend_from_slice(&12u16.to_be_bytes());
    data.extend_from_slice(b"0123456789");
}

/// An HTML page with the given OG tags already rendered.
pub fn og_page(tags: &[(&str, &str)]) -> String {
    let meta: String = tags
        .iter()
        .map(|(name, content)| format!("<meta property=\"og:{name}\" content=\"{content}\">\n"))
        .collect();
    format!("<html><head>\n{meta}</head><body>hello</body></html>")
}

#[cfg(test)]
mod tests {
    use super::*;
    use unfurl_imagesize::{image_dimensions, Dimensions};

    #[test]
    fn fixtures_parse_to_their_encoded_dimensions() {
        assert_eq!(
            image_dimensions(&png_bytes(800, 600)).unwrap(),
            Some(Dimensions::new(800, 600))
        );
        assert_eq!(
            image_dimensions(&gif_bytes(320, 240)).unwrap(),
            Some(Dimensions::new(320, 240))
        );
        assert_eq!(
            image_dimensions(&jpeg_bytes(1920, 1080, 2)).unwrap(),
            Some(Dimensions::new(1920, 1080))
        );
        assert_eq!(image_dimensions(&jpeg_without_sof(600)).unwrap(), None);
    }
}
