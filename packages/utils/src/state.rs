pub fn is_valid_name(name: &str) -> bool {
    let bytes = name.as_bytes();
    if bytes.len() < 3 || bytes.len() > 50 {
        return false;
    }
    true
}

/// Prefixes end up inside randomness job ids, `-` is reserved as the separator there.
pub fn is_valid_prefix(prefix: &str, max_len: usize) -> bool {
    !prefix.is_empty() && prefix.len() <= max_len && !prefix.contains('-')
}
