//! Ordered field tables rendered as PHP array assignment lines

/// Wrap a value in single quotes
///
/// ```rust
/// assert_eq!(snipgen::enclose_in_single_quotes("VALUE"), "'VALUE'");
/// ```
pub fn enclose_in_single_quotes(value: &str) -> String {
    format!("'{}'", value)
}

/// Format one array line: `<indent>'<name>' => <value>,<line_break>`
pub fn array_line(indent: &str, name: &str, value: &str, line_break: &str) -> String {
    format!("{}'{}' => {},{}", indent, name, value, line_break)
}

/// Ordered (name, literal value) pairs
///
/// Lines render in insertion order. Setting a name that is already present
/// replaces its value without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldTable {
    fields: Vec<(String, String)>,
}

impl FieldTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field whose value is emitted verbatim (numbers, `array(...)`, `false`)
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Add a field whose value is emitted as a single-quoted string
    pub fn quoted(mut self, name: impl Into<String>, value: &str) -> Self {
        self.set(name, enclose_in_single_quotes(value));
        self
    }

    /// Insert a field, or replace the value of an existing one in place
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Render every field as an array line
    pub fn render(&self, indent: &str, line_break: &str) -> String {
        self.iter()
            .map(|(name, value)| array_line(indent, name, value, line_break))
            .collect()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for FieldTable {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut table = FieldTable::new();
        for (name, value) in iter {
            table.set(name, value);
        }
        table
    }
}
