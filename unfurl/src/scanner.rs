// ABOUTME: Open Graph meta tag scanner over raw HTML text
// ABOUTME: Regex-based extraction; malformed tags are skipped, never an error

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Whole `<meta ...>` tags, non-greedy, spanning line breaks, tolerating
/// attribute values quoted either way.
static META_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(?s)<meta(?:".*?"|'.*?'|[^'"])*?>"#).expect("meta tag pattern"));

/// `property="og:<name>"` (or single-quoted). Case-sensitive: only the
/// canonical lower-case names are ever recognized downstream.
static OG_PROPERTY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\sproperty=(?:"|')og:([a-zA-Z:]+?)(?:"|')"#).expect("property pattern"));

static CONTENT_DOUBLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\scontent="(.*?)""#).expect("content pattern"));

static CONTENT_SINGLE_QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\scontent='(.*?)'").expect("content pattern"));

/// The recognized Open Graph property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetadataField {
    Title,
    Description,
    Image,
    Url,
}

impl MetadataField {
    pub const ALL: [MetadataField; 4] = [
        MetadataField::Title,
        MetadataField::Description,
        MetadataField::Image,
        MetadataField::Url,
    ];

    /// Match an `og:` property name against the four canonical fields.
    /// Case-sensitive; anything else is not recognized.
    pub fn from_property(name: &str) -> Option<Self> {
        match name {
            "title" => Some(MetadataField::Title),
            "description" => Some(MetadataField::Description),
            "image" => Some(MetadataField::Image),
            "url" => Some(MetadataField::Url),
            _ => None,
        }
    }

    pub const fn property_name(self) -> &'static str {
        match self {
            MetadataField::Title => "title",
            MetadataField::Description => "description",
            MetadataField::Image => "image",
            MetadataField::Url => "url",
        }
    }
}

/// Scan `html` for Open Graph meta tags.
///
/// Tags without an `og:` property or without a `content` attribute are
/// silently skipped; when the same field appears more than once the last
/// occurrence wins. Absent fields are simply not present in the map.
pub fn scan(html: &str) -> HashMap<MetadataField, String> {
    let mut fields = HashMap::new();

    for tag_match in META_TAG.find_iter(html) {
        let tag = tag_match.as_str();

        let Some(property) = OG_PROPERTY.captures(tag) else {
            continue;
        };
        let content = CONTENT_DOUBLE_QUOTED
            .captures(tag)
            .or_else(|| CONTENT_SINGLE_QUOTED.captures(tag));
        let Some(content) = content else {
            continue;
        };

        if let Some(field) = MetadataField::from_property(&property[1]) {
            fields.insert(field, content[1].to_string());
        }
    }

    fields
}
