use std::fmt;

/// A multi-word identifier with casing conversions.
///
/// Formatters receive a `Name` rather than a raw string so they can pick the
/// casing convention of their target ecosystem. The original text is kept
/// alongside the detected words.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    original: String,
    words: Vec<String>,
}

impl Name {
    /// Build a name from an upper-camel-like identifier.
    ///
    /// Input is accepted in any casing: the first character is uppercased to
    /// form the original text and the words are detected from camel-case
    /// humps and `_`, `-` or whitespace delimiters.
    ///
    /// ```
    /// use codepath::domain::Name;
    ///
    /// let name = Name::upper_camel("listFoos");
    /// assert_eq!(name.original(), "ListFoos");
    /// assert_eq!(name.to_lower_underscore(), "list_foos");
    /// ```
    pub fn upper_camel(text: &str) -> Self {
        Self { original: capitalize(text), words: split_words(text) }
    }

    /// The identifier as given, with its first character uppercased.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Lowercased words in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// `ListFoos`
    pub fn to_upper_camel(&self) -> String {
        self.words.iter().map(|w| capitalize(w)).collect()
    }

    /// `listFoos`
    pub fn to_lower_camel(&self) -> String {
        let mut words = self.words.iter();
        let mut out = words.next().cloned().unwrap_or_default();
        for word in words {
            out.push_str(&capitalize(word));
        }
        out
    }

    /// `list_foos`
    pub fn to_lower_underscore(&self) -> String {
        self.words.join("_")
    }

    /// `LIST_FOOS`
    pub fn to_upper_underscore(&self) -> String {
        self.words.join("_").to_uppercase()
    }

    /// `list-foos`
    pub fn to_kebab(&self) -> String {
        self.words.join("-")
    }

    /// `listfoos`
    pub fn to_lowercase(&self) -> String {
        self.words.concat()
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_delimiter(c: char) -> bool {
    c == '_' || c == '-' || c.is_whitespace()
}

/// Split an identifier into lowercased words.
///
/// A new word starts at an uppercase letter that follows a lowercase letter
/// or digit, and at the last capital of an acronym run when a lowercase
/// letter follows it (`HTTPServer` -> `http`, `server`). Digits stay with
/// the preceding word.
fn split_words(text: &str) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if is_delimiter(c) {
            flush(&mut words, &mut current);
            continue;
        }
        // `current` is non-empty only when chars[i - 1] belongs to it.
        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let starts_word = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if starts_word {
                flush(&mut words, &mut current);
            }
        }
        current.push(c);
    }
    flush(&mut words, &mut current);
    words
}

fn flush(words: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        words.push(current.to_lowercase());
        current.clear();
    }
}
