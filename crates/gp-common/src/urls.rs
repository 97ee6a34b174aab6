//! Image URL construction.
//!
//! Directory and file names come straight from disk or configuration, so each
//! one is percent-encoded as a single path segment.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Bytes that cannot appear raw inside one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Join `segments` under `prefix`, encoding each segment.
///
/// `prefix` is used as is, minus any trailing `/`.
pub fn url_path<'a, I>(prefix: &str, segments: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut url = prefix.trim_end_matches('/').to_string();
    for segment in segments {
        url.push('/');
        url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
    }
    url
}
