//! Display formatting helpers.
//!
//! Pure functions shared by every surface that renders dates or status
//! badges. Date formatting is deliberately forgiving: callers hand over
//! whatever the backend produced (RFC 3339 strings, bare dates, parsed
//! timestamps) and get either a clean rendering or an empty string, never an
//! error.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

/// A date-like input accepted by [`format_date`].
#[derive(Debug, Clone, PartialEq)]
pub enum DateValue {
    /// Raw text, typically straight off the wire.
    Text(String),
    /// An already-parsed timestamp.
    Moment(DateTime<Utc>),
}

impl DateValue {
    /// Resolves the value to a calendar date, or `None` when the text is
    /// empty or unparseable.
    ///
    /// Text is tried as RFC 3339 first, then as a bare date, then as a date
    /// with time and no offset. The calendar date is read as written, with
    /// no time zone normalization.
    #[must_use]
    pub fn resolve(&self) -> Option<NaiveDate> {
        match self {
            Self::Moment(moment) => Some(moment.date_naive()),
            Self::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return None;
                }
                DateTime::<FixedOffset>::parse_from_rfc3339(text)
                    .map(|parsed| parsed.date_naive())
                    .or_else(|_| NaiveDate::parse_from_str(text, "%Y-%m-%d"))
                    .or_else(|_| {
                        NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                            .map(|parsed| parsed.date())
                    })
                    .ok()
            }
        }
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<DateTime<Utc>> for DateValue {
    fn from(moment: DateTime<Utc>) -> Self {
        Self::Moment(moment)
    }
}

/// Target rendering for [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// ISO `YYYY-MM-DD`, suitable for date input fields.
    Input,
    /// Human-readable `DD/MM/YYYY`.
    Display,
}

/// Formats a date-like value, returning `""` for absent, empty, or
/// unparseable input.
#[must_use]
pub fn format_date(value: Option<DateValue>, style: DateStyle) -> String {
    let Some(date) = value.as_ref().and_then(DateValue::resolve) else {
        return String::new();
    };

    let pattern = match style {
        DateStyle::Input => "%Y-%m-%d",
        DateStyle::Display => "%d/%m/%Y",
    };
    date.format(pattern).to_string()
}

/// Badge variants for status labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Positive emphasis.
    Default,
    /// Neutral emphasis.
    Secondary,
    /// Negative emphasis.
    Destructive,
    /// Muted emphasis.
    Outline,
}

impl BadgeVariant {
    /// Variant name as used by the component library.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Secondary => "secondary",
            Self::Destructive => "destructive",
            Self::Outline => "outline",
        }
    }
}

impl std::fmt::Display for BadgeVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a status label to its badge variant.
///
/// `"active"` renders as the default badge, `"inactive"` as outline, and
/// anything else (order statuses included) as secondary.
#[must_use]
pub fn status_variant(status: &str) -> BadgeVariant {
    match status {
        "active" => BadgeVariant::Default,
        "inactive" => BadgeVariant::Outline,
        _ => BadgeVariant::Secondary,
    }
}
