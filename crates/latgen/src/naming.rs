/// Turn an arbitrary type id into a name usable as a symbol in the generated sources.
///
/// Every character outside `[A-Za-z0-9_]` is replaced by `_`, and a name that would start with
/// a digit gets a leading `_`.
pub fn typedef_name(typeid: &str) -> String {
    let mut name = String::with_capacity(typeid.len() + 1);

    if typeid.is_empty() || typeid.starts_with(|c: char| c.is_ascii_digit()) {
        name.push('_');
    }

    for c in typeid.chars() {
        if c.is_ascii_alphanumeric() || c == '_' {
            name.push(c);
        } else {
            name.push('_');
        }
    }

    name
}

/// Whether the name is already a valid symbol.
pub fn is_typedef_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
