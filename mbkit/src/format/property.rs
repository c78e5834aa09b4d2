//! Property lines: `<indent>key<whitespace>value`

/// A parsed property line. Values are opaque; quotes are kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'a> {
    /// Leading whitespace.
    pub indent: &'a str,
    /// The key, up to the first whitespace.
    pub key: &'a str,
    /// Whitespace between key and value (empty for a bare key).
    pub separator: &'a str,
    /// Everything after the separator, trailing whitespace removed.
    pub value: &'a str,
}

impl<'a> Property<'a> {
    /// Parse a line body (no line ending). Blank lines and comment lines
    /// (`//...`) are not properties.
    pub fn parse(body: &'a str) -> Option<Self> {
        let rest = body.trim_start();
        let indent = &body[..body.len() - rest.len()];
        if rest.is_empty() || rest.starts_with("//") {
            return None;
        }

        let key_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (key, after_key) = rest.split_at(key_end);
        let value = after_key.trim_start();
        let separator = &after_key[..after_key.len() - value.len()];

        Some(Self {
            indent,
            key,
            separator,
            value: value.trim_end(),
        })
    }

    /// Whether the key is followed by whitespace (it may still have an empty value).
    #[must_use]
    pub fn has_separator(&self) -> bool {
        !self.separator.is_empty()
    }

    /// Render `key<TAB>value` with no indentation.
    #[must_use]
    pub fn render(key: &str, value: &str) -> String {
        format!("{key}\t{value}")
    }
}
