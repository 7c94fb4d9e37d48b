/// Sanitizing names that are not valid Unicode.
///
/// Every rule only looks at ASCII, so the same rules can run over the
/// platform's raw code units (bytes on Unix, UTF-16 on Windows) and leave
/// every other unit exactly as it was on disk.
use super::rules::{INVALID_CHARS, PLACEHOLDER, REPLACEMENT, RESERVED_NAMES};
use std::ffi::{OsStr, OsString};

/// [`sanitize`](super::sanitize) for a name straight from the filesystem.
///
/// Valid Unicode names go through the `str` rules; anything else is handled
/// unit by unit so undecodable bytes survive the rename.
pub fn sanitize_os(name: &OsStr) -> OsString {
    match name.to_str() {
        Some(s) => OsString::from(super::sanitize(s)),
        None => sanitize_non_unicode(name),
    }
}

#[cfg(unix)]
fn sanitize_non_unicode(name: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};
    OsString::from_vec(sanitize_units(name.as_bytes()))
}

#[cfg(windows)]
fn sanitize_non_unicode(name: &OsStr) -> OsString {
    use std::os::windows::ffi::{OsStrExt, OsStringExt};
    let wide: Vec<u16> = name.encode_wide().collect();
    OsString::from_wide(&sanitize_units(&wide))
}

#[cfg(not(any(unix, windows)))]
fn sanitize_non_unicode(name: &OsStr) -> OsString {
    OsString::from(super::sanitize(&name.to_string_lossy()))
}

/// The four sanitize rules over raw code units.
fn sanitize_units<T>(name: &[T]) -> Vec<T>
where
    T: Copy + PartialEq + From<u8>,
{
    let unit = |c: char| T::from(c as u8);
    let replacement = unit(REPLACEMENT);
    let dot = unit('.');
    let space = unit(' ');

    let mut fixed: Vec<T> = name
        .iter()
        .map(|&u| {
            if INVALID_CHARS.iter().any(|&c| u == unit(c)) {
                replacement
            } else {
                u
            }
        })
        .collect();

    while fixed.last().is_some_and(|&u| u == space || u == dot) {
        fixed.pop();
    }

    let stem_len = fixed.iter().position(|&u| u == dot).unwrap_or(fixed.len());
    if is_reserved_units(&fixed[..stem_len]) {
        fixed.insert(0, replacement);
    }

    if fixed.is_empty() {
        fixed.extend(PLACEHOLDER.bytes().map(T::from));
    }
    fixed
}

/// ASCII case-insensitive match of a stem against the device names.
fn is_reserved_units<T>(stem: &[T]) -> bool
where
    T: Copy + PartialEq + From<u8>,
{
    RESERVED_NAMES.iter().any(|reserved| {
        reserved.len() == stem.len()
            && reserved
                .bytes()
                .zip(stem)
                .all(|(b, &u)| u == T::from(b) || u == T::from(b.to_ascii_lowercase()))
    })
}
