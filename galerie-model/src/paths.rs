//! Path helpers decoupled from any real filesystem.
//!
//! The engine operates purely on `/`-separated absolute path strings.
//! Inputs are expected to be pre-normalized: no trailing slashes and no
//! `.`/`..` segments. Separator counting and containment tests rely on
//! that precondition and do not guard against unnormalized input.

/// The parent directory of `path`, or `None` when the path has no
/// parent ("/" itself, or a path without any separator).
pub fn parent_path(path: &str) -> Option<&str> {
    let idx = path.rfind('/')?;
    if idx == 0 {
        if path.len() > 1 { Some("/") } else { None }
    } else {
        Some(&path[..idx])
    }
}

/// The final segment of `path`; the whole string when it has none.
pub fn name_of(path: &str) -> &str {
    match path.rfind('/') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

/// True when any segment of `path` begins with a dot.
pub fn is_hidden_path(path: &str) -> bool {
    path.split('/').any(|segment| segment.starts_with('.'))
}

/// True when `path` equals `base` or lies anywhere inside it.
pub fn is_within(path: &str, base: &str) -> bool {
    if base == "/" {
        return path.starts_with('/');
    }
    path == base
        || (path.len() > base.len()
            && path.starts_with(base)
            && path.as_bytes()[base.len()] == b'/')
}

/// True when `path` lies inside `base`, excluding `base` itself.
pub fn is_strictly_within(path: &str, base: &str) -> bool {
    path != base && is_within(path, base)
}

/// True when `parent` is the immediate parent directory of `path`.
pub fn is_direct_child(path: &str, parent: &str) -> bool {
    parent_path(path) == Some(parent)
}

/// Number of `/` separators in `path`. Used as the promotion depth
/// measure during tree search; meaningful only on normalized paths.
pub fn separator_count(path: &str) -> usize {
    path.bytes().filter(|b| *b == b'/').count()
}

/// The extension of the final path segment, without the dot, or `None`
/// when the segment has none. Leading dots (hidden files) do not count
/// as extension separators.
pub fn extension_of(path: &str) -> Option<&str> {
    let name = name_of(path);
    let idx = name.rfind('.')?;
    if idx == 0 { None } else { Some(&name[idx + 1..]) }
}
