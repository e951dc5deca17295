//! Extension normalization and the registry of convertible audio formats

/// Reserved selector meaning "every recognized convertible extension".
pub const WILDCARD: &str = "all";

/// Folder label used when a target extension yields an empty name.
pub const DEFAULT_FOLDER_NAME: &str = "OUT";

/// Extensions matched by the wildcard selector, lowercase and dot-prefixed.
pub const CONVERTIBLE_EXTENSIONS: &[&str] = &[
    ".mp3", ".wav", ".flac", ".aac", ".ogg", ".m4a", ".wma", ".aiff", ".amr", ".opus", ".ac3",
    ".dts", ".mka", ".alac", ".tta", ".speex", ".mpc", ".ape", ".vqf",
];

/// Canonicalize a user-supplied extension token.
///
/// Trims and lowercases the token, then prepends a `.` when missing.
/// Empty input stays empty and the wildcard keyword is returned as-is
/// (lowercased); callers decide whether either is acceptable.
///
/// # Examples
/// ```
/// use gotobe::pipeline::normalize;
///
/// assert_eq!(normalize(" MP3 "), ".mp3");
/// assert_eq!(normalize(".Flac"), ".flac");
/// assert_eq!(normalize("ALL"), "all");
/// assert_eq!(normalize("   "), "");
/// ```
pub fn normalize(token: &str) -> String {
    let ext = token.trim().to_lowercase();
    if ext.is_empty() || ext == WILDCARD || ext.starts_with('.') {
        return ext;
    }
    format!(".{}", ext)
}

/// Output folder name for a normalized target extension: `.aac` becomes `AAC`.
pub fn folder_name_for(target_extension: &str) -> String {
    let name = target_extension
        .strip_prefix('.')
        .unwrap_or(target_extension)
        .to_uppercase();

    if name.is_empty() {
        DEFAULT_FOLDER_NAME.to_string()
    } else {
        name
    }
}

/// Whether a lowercase, dot-prefixed extension belongs to the wildcard registry.
pub fn is_convertible(extension: &str) -> bool {
    CONVERTIBLE_EXTENSIONS.contains(&extension)
}
