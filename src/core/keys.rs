//! Record key derivation
//!
//! Tag paths are turned into two kinds of keys: the raw key (innermost
//! semantic tag, prefix kept) and the friendly key (alias-resolved,
//! prefix-stripped, camelCased concatenation of every semantic tag).

/// Structural tags that never contribute to a key
pub const ENVELOPE_TAGS: &[&str] = &[
    "x:xmpmeta",
    "rdf:RDF",
    "rdf:Description",
    "rdf:Bag",
    "rdf:Alt",
    "rdf:Seq",
    "rdf:li",
    "mwg-rs:RegionList",
];

/// Qualified tag names that map onto a shared friendly term
pub const KEY_ALIASES: &[(&str, &str)] = &[
    ("mwg-rs:Regions", "region"),
    ("MicrosoftPhoto:LastKeywordXMP", "keywords"),
    ("MicrosoftPhoto:LastKeywordIPTC", "keywords"),
    ("dc:subject", "keywords"),
    ("MicrosoftPhoto:Rating", "mRating"),
    ("cc:attributionName", "attribution"),
    ("xmpRights:UsageTerms", "terms"),
    ("dc:rights", "terms"),
];

/// Whether `name` is a structural envelope tag
pub fn is_envelope_tag(name: &str) -> bool {
    ENVELOPE_TAGS.contains(&name)
}

/// Friendly term for a qualified tag name, if one is defined
pub fn alias_for(name: &str) -> Option<&'static str> {
    KEY_ALIASES
        .iter()
        .find(|(qualified, _)| *qualified == name)
        .map(|(_, alias)| *alias)
}

/// Raw key for a tag path: the innermost non-envelope tag, verbatim.
///
/// Returns `None` if the path holds only envelope tags.
pub fn raw_key<S: AsRef<str>>(path: &[S]) -> Option<&str> {
    path.iter()
        .map(S::as_ref)
        .filter(|name| !is_envelope_tag(name))
        .next_back()
}

/// Friendly key for a tag path.
///
/// ```rust
/// use xmpflat::core::keys::friendly_key;
///
/// let path = ["x:xmpmeta", "rdf:RDF", "rdf:Description", "mwg-rs:Regions", "mwg-rs:AppliedToDimensions", "stDim:w"];
/// assert_eq!(friendly_key(&path).as_deref(), Some("regionAppliedToDimensionsW"));
/// ```
///
/// Returns `None` if the path holds only envelope tags.
pub fn friendly_key<S: AsRef<str>>(path: &[S]) -> Option<String> {
    let mut key = String::new();
    let mut segments = path
        .iter()
        .map(S::as_ref)
        .filter(|name| !is_envelope_tag(name))
        .map(|name| local_name(alias_for(name).unwrap_or(name)));

    let first = segments.next()?;
    push_with_first(&mut key, first, char::to_lowercase);
    for segment in segments {
        push_with_first(&mut key, segment, char::to_uppercase);
    }
    Some(key)
}

/// Everything after the first `:`, or the whole name if unprefixed
fn local_name(name: &str) -> &str {
    name.split_once(':').map_or(name, |(_, local)| local)
}

fn push_with_first<I>(key: &mut String, segment: &str, convert: fn(char) -> I)
where
    I: Iterator<Item = char>,
{
    let mut chars = segment.chars();
    if let Some(first) = chars.next() {
        key.extend(convert(first));
        key.push_str(chars.as_str());
    }
}
