//! Row template matcher.
//!
//! The export writes the same six-field schema with four different quoting
//! conventions for the two list-valued fields:
//!
//! ```text
//! Plain          id,"case",date,{class},{subject},year
//! QuotedClass    id,"case",date,"{class}",{subject},year
//! QuotedSubject  id,"case",date,{class},"{subject}",year
//! QuotedBoth     id,"case",date,"{class}","{subject}",year
//! ```
//!
//! Templates are tried in that order. The first one that captures all six
//! fields wins. When none does, the best field count seen is returned so the
//! caller can report how far the row got before it was dropped.
//!
//! Capture counting is scanf-like: a field counts as soon as its value is
//! read, even if the delimiter after it is missing. Integers skip leading
//! whitespace; text fields do not. Anything after the election year is
//! ignored.

use std::fmt;
use std::str::FromStr;

/// Number of fields a complete row yields.
pub const FIELD_COUNT: usize = 6;

/// One of the four structural layouts of a data row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowTemplate {
    Plain,
    QuotedClass,
    QuotedSubject,
    QuotedBoth,
}

impl RowTemplate {
    /// Trial order. Earlier templates take precedence.
    pub const PRIORITY: [RowTemplate; 4] = [
        RowTemplate::Plain,
        RowTemplate::QuotedClass,
        RowTemplate::QuotedSubject,
        RowTemplate::QuotedBoth,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RowTemplate::Plain => "plain",
            RowTemplate::QuotedClass => "quoted-class",
            RowTemplate::QuotedSubject => "quoted-subject",
            RowTemplate::QuotedBoth => "quoted-both",
        }
    }

    fn class_quoted(self) -> bool {
        matches!(self, RowTemplate::QuotedClass | RowTemplate::QuotedBoth)
    }

    fn subject_quoted(self) -> bool {
        matches!(self, RowTemplate::QuotedSubject | RowTemplate::QuotedBoth)
    }

    /// Scan `line` with this template.
    ///
    /// Returns the captured fields, or the number of fields captured before
    /// the template stopped matching.
    fn scan(self, line: &str) -> Result<RowFields, usize> {
        let mut s = Scanner::new(line);
        let mut fields = RowFields::default();

        fields.id = s.integer().ok_or(0usize)?;
        s.literal(',').ok_or(1usize)?;
        s.literal('"').ok_or(1usize)?;
        fields.case_number = s.until('"', false).ok_or(1usize)?.to_string();
        s.literal('"').ok_or(2usize)?;
        s.literal(',').ok_or(2usize)?;
        fields.date_text = s.until(',', false).ok_or(2usize)?.to_string();
        s.literal(',').ok_or(3usize)?;

        s.open_list(self.class_quoted()).ok_or(3usize)?;
        fields.class_text = s.until('}', true).unwrap_or_default().to_string();
        s.close_list(self.class_quoted()).ok_or(4usize)?;
        s.literal(',').ok_or(4usize)?;

        s.open_list(self.subject_quoted()).ok_or(4usize)?;
        fields.subject_text = s.until('}', true).unwrap_or_default().to_string();
        s.close_list(self.subject_quoted()).ok_or(5usize)?;
        s.literal(',').ok_or(5usize)?;

        fields.election_year = s.integer().ok_or(5usize)?;

        Ok(fields)
    }
}

impl fmt::Display for RowTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The six raw fields of a data row, braces already stripped from the lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowFields {
    pub id: i64,
    pub case_number: String,
    pub date_text: String,
    pub class_text: String,
    pub subject_text: String,
    pub election_year: i32,
}

/// A complete six-field match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowMatch {
    pub template: RowTemplate,
    pub fields: RowFields,
}

/// No template captured all six fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartialMatch {
    /// Best field count reached by any template.
    pub fields_matched: usize,
}

/// Match a raw line against every template in priority order.
pub fn match_row(line: &str) -> Result<RowMatch, PartialMatch> {
    let mut best = 0;

    for template in RowTemplate::PRIORITY {
        match template.scan(line) {
            Ok(fields) => return Ok(RowMatch { template, fields }),
            Err(matched) => best = best.max(matched),
        }
    }

    Err(PartialMatch {
        fields_matched: best,
    })
}

/// Forward-only cursor over a line.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn literal(&mut self, c: char) -> Option<()> {
        self.rest = self.rest.strip_prefix(c)?;
        Some(())
    }

    /// Optionally signed decimal integer after optional leading whitespace.
    fn integer<T: FromStr>(&mut self) -> Option<T> {
        let s = self.rest.trim_start();
        let sign_len = usize::from(s.starts_with(['+', '-']));
        let digits = s[sign_len..]
            .bytes()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return None;
        }
        let end = sign_len + digits;
        let value = s[..end].parse().ok()?;
        self.rest = &s[end..];
        Some(value)
    }

    /// Text up to (not including) `stop`, or to the end of the line.
    fn until(&mut self, stop: char, allow_empty: bool) -> Option<&'a str> {
        let end = self.rest.find(stop).unwrap_or(self.rest.len());
        if end == 0 && !allow_empty {
            return None;
        }
        let (value, rest) = self.rest.split_at(end);
        self.rest = rest;
        Some(value)
    }

    fn open_list(&mut self, quoted: bool) -> Option<()> {
        if quoted {
            self.literal('"')?;
        }
        self.literal('{')
    }

    fn close_list(&mut self, quoted: bool) -> Option<()> {
        self.literal('}')?;
        if quoted {
            self.literal('"')?;
        }
        Some(())
    }
}
