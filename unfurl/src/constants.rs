// ABOUTME: Centralized constants for the unfurl pipeline
// ABOUTME: Probe range policy defaults, HTTP client settings, and body caps

/// Byte-range probe policy defaults.
pub mod probe {
    /// First range window when nothing hints at the format. Large enough
    /// that a JPEG SOF marker is almost always inside it.
    pub const DEFAULT_INITIAL_RANGE: u64 = 32 * 1024;

    /// Tight first window for formats whose header sits at a fixed offset
    /// (PNG/GIF/BMP minimum samples are all under 30 bytes).
    pub const FIXED_HEADER_RANGE: u64 = 64;

    /// Growth factor applied to the range when the parser asks for more.
    pub const RANGE_GROWTH_FACTOR: u64 = 4;

    /// Hard cap on a single probe window.
    pub const MAX_RANGE: u64 = 1024 * 1024;

    /// Maximum number of ranged fetches per image URL.
    pub const MAX_ATTEMPTS: u32 = 4;
}

/// HTTP client settings for the default fetcher.
pub mod http {
    use std::time::Duration;

    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    pub const USER_AGENT: &str = concat!("unfurl-rs/", env!("CARGO_PKG_VERSION"));

    pub const MAX_REDIRECTS: usize = 3;

    /// Cap on the unranged primary fetch; pages larger than this are cut
    /// off rather than buffered without bound.
    pub const MAX_BODY_BYTES: u64 = 8 * 1024 * 1024;
}
