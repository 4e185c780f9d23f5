use serde::{Deserialize, Serialize};

/// Configuration of [`parse_delimited`](super::parse_delimited).
///
/// Can be deserialized from JSON with camelCase keys. Missing keys take default values:
///
/// ```
/// use cartokit::delimited::ParseOptions;
///
/// let options: ParseOptions = serde_json::from_str(r#"{"fieldSeparator": ";"}"#).unwrap();
/// assert_eq!(options.field_separator, ";");
/// assert_eq!(options.titles, vec!["lon", "lat"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Names of the columns. Ignored if `first_line_titles` is set.
    pub titles: Vec<String>,
    /// Title of the latitude column.
    pub latitude_title: String,
    /// Title of the longitude column.
    pub longitude_title: String,
    /// String between fields of one line.
    pub field_separator: String,
    /// String between lines.
    pub line_separator: String,
    /// Trim values and remove a leading and a trailing double quote from them.
    pub delete_double_quotes: bool,
    /// Take column names from the first line of the text.
    pub first_line_titles: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            titles: vec!["lon".to_string(), "lat".to_string()],
            latitude_title: "lat".to_string(),
            longitude_title: "lon".to_string(),
            field_separator: ",".to_string(),
            line_separator: "\n".to_string(),
            delete_double_quotes: true,
            first_line_titles: false,
        }
    }
}

impl ParseOptions {
    /// Sets column names.
    pub fn with_titles<T: Into<String>>(mut self, titles: impl IntoIterator<Item = T>) -> Self {
        self.titles = titles.into_iter().map(Into::into).collect();
        self
    }

    /// Sets titles of the longitude and latitude columns.
    pub fn with_coordinate_titles(
        mut self,
        longitude_title: impl Into<String>,
        latitude_title: impl Into<String>,
    ) -> Self {
        self.longitude_title = longitude_title.into();
        self.latitude_title = latitude_title.into();
        self
    }

    /// Sets field separator.
    pub fn with_field_separator(mut self, separator: impl Into<String>) -> Self {
        self.field_separator = separator.into();
        self
    }

    /// Sets line separator.
    pub fn with_line_separator(mut self, separator: impl Into<String>) -> Self {
        self.line_separator = separator.into();
        self
    }

    /// Sets whether double quotes around values are removed.
    pub fn with_delete_double_quotes(mut self, delete: bool) -> Self {
        self.delete_double_quotes = delete;
        self
    }

    /// Sets whether the first line contains column names.
    pub fn with_first_line_titles(mut self, first_line_titles: bool) -> Self {
        self.first_line_titles = first_line_titles;
        self
    }

    pub(super) fn dequote<'a>(&self, value: &'a str) -> &'a str {
        if !self.delete_double_quotes {
            return value;
        }

        let value = value.trim();
        let value = value.strip_prefix('"').unwrap_or(value);
        value.strip_suffix('"').unwrap_or(value)
    }
}
