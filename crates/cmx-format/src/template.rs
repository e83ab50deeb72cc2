//! Compiled format strings and their evaluation.

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::warn;

use crate::context::StateContext;
use crate::error::{FormatError, Result};
use crate::token::{DateField, Token, scan};

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// A format string scanned into tokens, ready to render repeatedly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    tokens: Vec<Token>,
}

impl Template {
    pub fn parse(format: &str) -> Self {
        Self {
            source: format.to_string(),
            tokens: scan(format).into_iter().map(Token::from).collect(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn needs_release_date(&self) -> bool {
        self.tokens.iter().any(Token::needs_release_date)
    }

    /// Render every token in order.
    ///
    /// Fails as a whole if any token needs a release date that `context`
    /// lacks.
    pub fn render(&self, context: &StateContext<'_>) -> Result<String> {
        let mut out = String::new();
        for token in &self.tokens {
            self.render_token(token, context, &mut out)?;
        }
        Ok(out)
    }

    /// Render for persistence: failures are logged and yield `""`.
    pub fn render_state(&self, context: &StateContext<'_>) -> String {
        self.render(context).unwrap_or_else(|error| {
            warn!(%error, format = %self.source, "state string not rendered");
            String::new()
        })
    }

    fn render_token(
        &self,
        token: &Token,
        context: &StateContext<'_>,
        out: &mut String,
    ) -> Result<()> {
        match token {
            Token::Date { field, width } => {
                let date = self.release_date(context)?;
                out.push_str(&pad(&date_part(date, *field, *width), *width));
            }
            Token::MonthName { full } => {
                let month = self.release_date(context)?.month0() as usize;
                let name = MONTH_NAMES[month];
                out.push_str(if *full { name } else { &name[..3] });
            }
            Token::Chapter { numeric } => {
                let title = context.chapter_title;
                push_title_or_number(out, *numeric, title, context.chapter_number);
            }
            Token::Page { numeric } => {
                push_title_or_number(out, *numeric, context.page_title, context.page_number);
            }
            Token::FileName => {
                let source = context.primary_source;
                out.push_str(source.rsplit_once('/').map_or(source, |(_, name)| name));
            }
            Token::Literal(text) => out.push_str(text),
        }
        Ok(())
    }

    fn release_date(&self, context: &StateContext<'_>) -> Result<NaiveDateTime> {
        context
            .release_date
            .ok_or_else(|| FormatError::MissingReleaseDate {
                format: self.source.clone(),
            })
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn date_part(date: NaiveDateTime, field: DateField, width: usize) -> String {
    match field {
        DateField::Year => {
            let year = date.year().to_string();
            if width < 3 && year.len() > 2 {
                year[year.len() - 2..].to_string()
            } else {
                year
            }
        }
        DateField::Month => date.month().to_string(),
        DateField::Day => date.day().to_string(),
        DateField::Hour => date.hour().to_string(),
        DateField::Minute => date.minute().to_string(),
        DateField::Second => date.second().to_string(),
    }
}

/// Left-pad with zeros up to `width`; never truncates.
fn pad(value: &str, width: usize) -> String {
    format!("{value:0>width$}")
}

fn push_title_or_number(out: &mut String, numeric: bool, title: Option<&str>, number: i64) {
    match title {
        Some(title) if !numeric && !title.is_empty() => out.push_str(title),
        _ => out.push_str(&number.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn released(y: i32, m: u32, d: u32) -> StateContext<'static> {
        StateContext {
            release_date: NaiveDate::from_ymd_opt(y, m, d)
                .and_then(|date| date.and_hms_opt(9, 5, 7)),
            primary_source: "comics/ch1/p003.png",
            page_number: 3,
            chapter_number: 1,
            ..StateContext::default()
        }
    }

    #[test]
    fn pad_never_truncates() {
        assert_eq!(pad("7", 3), "007");
        assert_eq!(pad("2024", 2), "2024");
        assert_eq!(pad("5", 0), "5");
    }

    #[test]
    fn short_year_keeps_last_two_digits() {
        let context = released(2005, 1, 1);
        assert_eq!(Template::parse("Y").render(&context).unwrap(), "05");
        assert_eq!(Template::parse("YY").render(&context).unwrap(), "05");
        assert_eq!(Template::parse("YYY").render(&context).unwrap(), "2005");
        assert_eq!(Template::parse("YYYYYY").render(&context).unwrap(), "002005");
    }

    #[test]
    fn time_fields_are_padded() {
        let context = released(2024, 3, 5);
        assert_eq!(Template::parse("hh:uu:ss").render(&context).unwrap(), "09:05:07");
        assert_eq!(Template::parse("h:u:s").render(&context).unwrap(), "9:5:7");
    }

    #[test]
    fn missing_date_fails_whole_render() {
        let context = StateContext {
            page_number: 2,
            ..StateContext::default()
        };
        let template = Template::parse("PP-YY");
        assert!(template.needs_release_date());
        assert_eq!(
            template.render(&context),
            Err(FormatError::MissingReleaseDate {
                format: "PP-YY".to_string()
            })
        );
        assert_eq!(template.render_state(&context), "");
    }
}
