//! Dotted field paths naming a value inside the settings tree.
//!
//! Keys are joined with `.` and list positions are written as `[index]`,
//! e.g. `targetPackage.model` or `tables[2]`. The root path is empty.

/// Appends a mapping key to a field path.
pub fn push_key(path: &mut String, key: &str) {
    if !path.is_empty() {
        path.push('.');
    }
    path.push_str(key);
}

/// Appends a list position to a field path.
pub fn push_index(path: &mut String, index: usize) {
    path.push('[');
    path.push_str(&index.to_string());
    path.push(']');
}

/// Returns a new field path by appending a key to the given path.
#[must_use]
pub fn key(path: &str, key: &str) -> String {
    let mut result: String = path.to_string();
    push_key(&mut result, key);
    result
}

/// Returns a new field path by appending a list position to the given path.
#[must_use]
pub fn index(path: &str, index: usize) -> String {
    let mut result: String = path.to_string();
    push_index(&mut result, index);
    result
}
