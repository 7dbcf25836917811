//! Package identifier parsing.

/// A parsed `<name>[@<version>]` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReference {
    pub name: String,
    pub version: Option<String>,
}

/// Split a raw CLI token into package name and optional version.
///
/// Only the first `@` is significant; everything after it, including further
/// `@` characters, is taken verbatim as the version. No semantic validation
/// is applied to either segment.
pub fn parse(token: &str) -> PackageReference {
    match token.split_once('@') {
        Some((name, version)) => PackageReference {
            name: name.to_string(),
            version: Some(version.to_string()),
        },
        None => PackageReference {
            name: token.to_string(),
            version: None,
        },
    }
}
