/// Character and device-name tables shared by `sanitize` and `classify`.
///
/// These are the constraints OneDrive and the Win32 file APIs enforce on a
/// single path component. Path-length limits are not covered.

/// Characters that may not appear anywhere in a file or folder name.
pub const INVALID_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Character written in place of each invalid character.
pub const REPLACEMENT: char = '_';

/// Name used when nothing survives sanitization.
pub const PLACEHOLDER: &str = "unnamed";

/// Legacy DOS device names. Matched against the upper-cased stem.
pub const RESERVED_NAMES: [&str; 22] = [
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

#[inline]
pub fn is_invalid_char(c: char) -> bool {
    INVALID_CHARS.contains(&c)
}

/// `true` for the characters Windows silently drops from the end of a name.
#[inline]
pub fn is_trailing_junk(c: char) -> bool {
    c == ' ' || c == '.'
}

/// The part of `name` before the first dot, or the whole name if it has none.
///
/// Windows treats `CON.tar.gz` as the device `CON`, so the split is at the
/// first dot rather than the last.
pub fn stem(name: &str) -> &str {
    match name.find('.') {
        Some(pos) => &name[..pos],
        None => name,
    }
}

/// Case-insensitive check of a stem against [`RESERVED_NAMES`].
pub fn is_reserved_stem(stem: &str) -> bool {
    let upper = stem.to_uppercase();
    RESERVED_NAMES.iter().any(|r| *r == upper)
}
