use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

/// Wire date format used by the scrape service (`YYYY-MM-DD`).
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Requested artifact format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

impl OutputFormat {
    /// Parse raw form input. Anything other than `json`/`csv` is rejected.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(ValidationError::InvalidOutputFormat {
                value: input.to_owned(),
            }),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a `YYYY-MM-DD` date as used throughout the scrape wire format.
pub fn parse_date(input: &str) -> Result<Date, ValidationError> {
    Date::parse(input, DATE_FORMAT).map_err(|_| ValidationError::InvalidDate {
        value: input.to_owned(),
    })
}

pub(crate) fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .expect("dates must be formattable as YYYY-MM-DD")
}

/// A validated scrape job description.
///
/// Created fresh per submission attempt from a snapshot of form input and
/// owned by the in-flight lifecycle state until the outcome resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRequest {
    /// Ordered ticker symbols, duplicates preserved.
    pub symbols: Vec<String>,
    pub start: Date,
    pub end: Date,
    pub format: OutputFormat,
}

impl JobRequest {
    pub fn builder() -> JobRequestBuilder {
        JobRequestBuilder::new()
    }

    /// Start of the range in wire format.
    pub fn start_date(&self) -> String {
        format_date(self.start)
    }

    /// End of the range in wire format.
    pub fn end_date(&self) -> String {
        format_date(self.end)
    }
}

/// Normalizes raw form input into a [`JobRequest`].
///
/// Blank symbol entries are dropped; surviving entries pass through
/// untouched (no trimming or case folding) so that result echoes match what
/// the user typed.
#[derive(Debug, Clone, Default)]
pub struct JobRequestBuilder {
    symbols: Vec<String>,
    start: Option<Date>,
    end: Option<Date>,
    format: Option<OutputFormat>,
}

impl JobRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbols.push(symbol.into());
        self
    }

    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.symbols.extend(symbols.into_iter().map(Into::into));
        self
    }

    pub fn start_date(mut self, date: Date) -> Self {
        self.start = Some(date);
        self
    }

    pub fn end_date(mut self, date: Date) -> Self {
        self.end = Some(date);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Build the request, refusing input a dispatch could not act on.
    pub fn build(self) -> Result<JobRequest, ValidationError> {
        let symbols: Vec<String> = self
            .symbols
            .into_iter()
            .filter(|symbol| !symbol.trim().is_empty())
            .collect();

        if symbols.is_empty() {
            return Err(ValidationError::NoSymbols);
        }

        let start = self.start.ok_or(ValidationError::MissingStartDate)?;
        let end = self.end.ok_or(ValidationError::MissingEndDate)?;
        let format = self.format.ok_or(ValidationError::MissingOutputFormat)?;

        if start > end {
            return Err(ValidationError::StartAfterEnd { start, end });
        }

        Ok(JobRequest {
            symbols,
            start,
            end,
            format,
        })
    }
}
