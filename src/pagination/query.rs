//! Query string helpers
//!
//! The query is kept as its raw `&`-separated segments so that only the
//! page parameter is rewritten; every other segment goes back byte for byte.
//! `url::form_urlencoded` decodes leniently, so escapes are checked here
//! before decoding to surface malformed queries as errors.

use crate::error::{Error, Result};
use url::form_urlencoded;

/// A raw query split into segments
#[derive(Debug)]
pub(crate) struct RawQuery<'a> {
    raw: &'a str,
    segments: Vec<&'a str>,
}

impl<'a> RawQuery<'a> {
    /// Split and validate a raw query
    pub(crate) fn parse(raw: &'a str) -> Result<Self> {
        if raw.contains(';') {
            return Err(Error::query_parse(raw, "invalid semicolon separator"));
        }
        check_escapes(raw)?;

        Ok(Self {
            raw,
            segments: raw.split('&').collect(),
        })
    }

    /// The query as it appeared in the URL
    pub(crate) fn as_str(&self) -> &'a str {
        self.raw
    }

    /// Index and decoded value of the first segment whose decoded key is `name`
    pub(crate) fn find(&self, name: &str) -> Option<(usize, String)> {
        self.segments.iter().enumerate().find_map(|(index, segment)| {
            let (key, value) = decode_segment(segment)?;
            (key == name).then_some((index, value))
        })
    }

    /// The query with the value of segment `index` replaced
    ///
    /// The raw key is kept, the new value is form-encoded.
    pub(crate) fn with_value(&self, index: usize, value: &str) -> String {
        let encoded: String = form_urlencoded::byte_serialize(value.as_bytes()).collect();
        self.segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                if i == index {
                    let raw_key = segment.split_once('=').map_or(*segment, |(key, _)| key);
                    format!("{raw_key}={encoded}")
                } else {
                    (*segment).to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Decoded key and value of one segment; `None` for an empty segment
fn decode_segment(segment: &str) -> Option<(String, String)> {
    form_urlencoded::parse(segment.as_bytes())
        .next()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
}

/// Every `%` must introduce two hex digits
fn check_escapes(raw: &str) -> Result<()> {
    let bytes = raw.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                let end = (i + 3).min(bytes.len());
                let escape = String::from_utf8_lossy(&bytes[i..end]);
                return Err(Error::query_parse(
                    raw,
                    format!("invalid URL escape '{escape}'"),
                ));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_find_first_decoded_key() {
        let query = RawQuery::parse("sort=asc&page=3&page=9&q=a+b%21").unwrap();
        assert_eq!(query.find("page"), Some((1, "3".to_string())));
        assert_eq!(query.find("q"), Some((3, "a b!".to_string())));
        assert_eq!(query.find("missing"), None);
    }

    #[test]
    fn test_find_encoded_key_and_bare_key() {
        let query = RawQuery::parse("flag&&p%61ge=1").unwrap();
        assert_eq!(query.find("flag"), Some((0, String::new())));
        assert_eq!(query.find("page"), Some((2, "1".to_string())));
    }

    #[test]
    fn test_with_value_leaves_other_segments_raw() {
        let query = RawQuery::parse("q=%FF&a=%41&&page=1&x=rust+lang").unwrap();
        assert_eq!(query.with_value(3, "2"), "q=%FF&a=%41&&page=2&x=rust+lang");
    }

    #[test]
    fn test_with_value_keeps_raw_key() {
        let query = RawQuery::parse("p%61ge=1").unwrap();
        assert_eq!(query.with_value(0, "2"), "p%61ge=2");

        let query = RawQuery::parse("page").unwrap();
        assert_eq!(query.with_value(0, "1"), "page=1");
    }

    #[test]
    fn test_parse_rejects_bad_escapes() {
        for raw in ["page=%zz", "page=1%", "page=%4", "%g1=2"] {
            let err = RawQuery::parse(raw).unwrap_err();
            assert!(matches!(err, Error::QueryParse { .. }), "{raw}");
        }
    }

    #[test]
    fn test_parse_rejects_semicolon() {
        let err = RawQuery::parse("a=1;page=2").unwrap_err();
        assert!(err.to_string().contains("semicolon"));
    }
}
