//! YAML frontmatter extraction.
//!
//! A frontmatter block sits at the very start of a note:
//!
//! ```text
//! ---
//! title: Frontmatter Title
//! tags:
//!   - tag1
//! ---
//! # Content
//! ```
//!
//! The block is parsed as a YAML mapping and merged into the note's
//! metadata, and the remaining markdown (trimmed) becomes the content.
//! Content without a block, and content whose block is not a valid YAML
//! mapping, are both left exactly as they were. A valid mapping holding a
//! number JSON cannot represent (`.nan`, `.inf`) is an error rather than
//! "no frontmatter", since the block would otherwise stay in the content.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

use super::error::FrontmatterError;
use super::note::{Metadata, Note};

static FRONTMATTER_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?s)^---\n(.*?)\n---\n(.*)$").ok());

/// Split `content` into its frontmatter and the remaining markdown.
///
/// Returns `(None, content)` unchanged when there is no leading block or
/// the block does not parse as a YAML mapping. Fails only when the mapping
/// holds a non-finite number.
pub fn parse_frontmatter(
    content: &str,
) -> Result<(Option<Metadata>, String), FrontmatterError> {
    let captures = FRONTMATTER_RE
        .as_ref()
        .and_then(|re| re.captures(content));

    let Some((header, body)) = captures.and_then(|c| Some((c.get(1)?, c.get(2)?))) else {
        return Ok((None, content.to_string()));
    };

    Ok(match parse_header(header.as_str())? {
        Some(frontmatter) => (Some(frontmatter), body.as_str().trim().to_string()),
        None => (None, content.to_string()),
    })
}

/// Move a note's frontmatter into its metadata.
///
/// Frontmatter values overwrite existing metadata entries with the same
/// key; other entries are kept. The metadata map is created if needed.
/// Notes without valid frontmatter, and notes whose frontmatter fails to
/// convert, are not touched.
pub fn extract_frontmatter(note: &mut Note) -> Result<(), FrontmatterError> {
    let (frontmatter, content) = parse_frontmatter(&note.content)?;
    if let Some(frontmatter) = frontmatter {
        note.metadata
            .get_or_insert_with(Metadata::new)
            .extend(frontmatter);
        note.content = content;
    }
    Ok(())
}

/// Why a parsed YAML mapping has no JSON form.
enum Unrepresentable {
    /// Sequence or mapping used as a key.
    ComplexKey,
    /// NaN or infinity, under the nearest enclosing key.
    NonFinite(Option<String>),
}

fn parse_header(header: &str) -> Result<Option<Metadata>, FrontmatterError> {
    let Ok(YamlValue::Mapping(mapping)) = serde_yaml::from_str::<YamlValue>(header) else {
        return Ok(None);
    };

    match mapping_to_json(mapping) {
        Ok(metadata) => Ok(Some(metadata)),
        // Same outcome as a YAML syntax error.
        Err(Unrepresentable::ComplexKey) => Ok(None),
        Err(Unrepresentable::NonFinite(key)) => Err(FrontmatterError::NonFiniteNumber {
            key: key.unwrap_or_default(),
        }),
    }
}

fn mapping_to_json(mapping: serde_yaml::Mapping) -> Result<Metadata, Unrepresentable> {
    let mut metadata = Metadata::new();
    for (key, value) in mapping {
        let key = key_to_string(key).ok_or(Unrepresentable::ComplexKey)?;
        let value = yaml_to_json(value).map_err(|e| match e {
            Unrepresentable::NonFinite(None) => Unrepresentable::NonFinite(Some(key.clone())),
            other => other,
        })?;
        metadata.insert(key, value);
    }
    Ok(metadata)
}

fn yaml_to_json(value: YamlValue) -> Result<JsonValue, Unrepresentable> {
    let json = match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(b),
        YamlValue::Number(n) => number_to_json(&n).ok_or(Unrepresentable::NonFinite(None))?,
        YamlValue::String(s) => JsonValue::String(s),
        YamlValue::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(yaml_to_json)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        YamlValue::Mapping(mapping) => JsonValue::Object(mapping_to_json(mapping)?),
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value)?,
    };
    Ok(json)
}

// JSON has no NaN or infinity.
fn number_to_json(n: &serde_yaml::Number) -> Option<JsonValue> {
    if let Some(i) = n.as_i64() {
        return Some(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.into());
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(JsonValue::Number)
}

fn key_to_string(key: YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Null => Some("null".to_string()),
        YamlValue::Tagged(tagged) => key_to_string(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}
