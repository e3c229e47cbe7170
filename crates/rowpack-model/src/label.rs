//! Default header label derivation.

/// Derive a display label from a raw column name.
///
/// The name is split on underscores; each word is lowercased, its first
/// letter capitalized, and the words are joined with single spaces:
/// `"SOME_NAME"` becomes `"Some Name"`, `"ID"` becomes `"Id"`.
#[must_use]
pub fn default_label(name: &str) -> String {
    let mut label = String::with_capacity(name.len());

    for word in name.split('_').filter(|word| !word.is_empty()) {
        if !label.is_empty() {
            label.push(' ');
        }

        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            label.extend(first.to_uppercase());
            for ch in chars {
                label.extend(ch.to_lowercase());
            }
        }
    }

    label
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercase_names() {
        assert_eq!(default_label("ID"), "Id");
        assert_eq!(default_label("VALUE"), "Value");
    }

    #[test]
    fn underscore_words() {
        assert_eq!(default_label("SOME_NAME"), "Some Name");
        assert_eq!(default_label("created_at"), "Created At");
    }

    #[test]
    fn degenerate_names() {
        assert_eq!(default_label(""), "");
        assert_eq!(default_label("___"), "");
        assert_eq!(default_label("_X_"), "X");
    }
}
