//! Turns amounts and timestamps into the strings shown on the dashboard.

use std::fmt::Debug;

use num_format::ToFormattedString;
use time::{OffsetDateTime, UtcOffset, format_description::BorrowedFormatItem, macros::format_description};
use time_tz::{TimeZone, Tz};

use crate::{
    Error,
    timezone::{get_offset_at, get_timezone},
};

/// The conventions used to write money and dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Locale {
    /// Brazilian Portuguese, e.g. "R$ 5.000,00" and "05/01/2024".
    PtBr,
    /// American English, e.g. "$5,000.00" and "01/05/2024".
    EnUs,
}

struct CurrencyStyle {
    symbol: &'static str,
    thousands_separator: char,
    decimal_separator: char,
}

impl Locale {
    fn currency_style(self) -> CurrencyStyle {
        match self {
            Locale::PtBr => CurrencyStyle {
                symbol: "R$ ",
                thousands_separator: '.',
                decimal_separator: ',',
            },
            Locale::EnUs => CurrencyStyle {
                symbol: "$",
                thousands_separator: ',',
                decimal_separator: '.',
            },
        }
    }

    fn date_format(self) -> &'static [BorrowedFormatItem<'static>] {
        match self {
            Locale::PtBr => format_description!("[day]/[month]/[year]"),
            Locale::EnUs => format_description!("[month]/[day]/[year]"),
        }
    }
}

/// Formats values for one viewer: their locale and their timezone.
#[derive(Clone, Copy)]
pub struct DisplayFormat {
    locale: Locale,
    timezone: &'static Tz,
}

impl DisplayFormat {
    /// Create a formatter for `locale` that shows dates in `canonical_timezone`,
    /// e.g. "America/Sao_Paulo".
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if the timezone name is unknown.
    pub fn new(locale: Locale, canonical_timezone: &str) -> Result<Self, Error> {
        let timezone = get_timezone(canonical_timezone).ok_or_else(|| {
            tracing::error!("Invalid timezone {}", canonical_timezone);
            Error::InvalidTimezoneError(canonical_timezone.to_owned())
        })?;

        Ok(Self { locale, timezone })
    }

    /// Format `amount` as currency with exactly two decimal places.
    ///
    /// Negative amounts put the sign before the currency symbol, e.g. "-$12.50".
    /// Amounts that round to zero are never shown with a sign. Amounts that
    /// cannot be written out in full, i.e. NaN, infinities and anything with
    /// [MAX_CENTS] cents or more, are shown as [UNREPRESENTABLE_AMOUNT].
    pub fn format_currency(&self, amount: f64) -> String {
        let style = self.locale.currency_style();
        let cents = (amount.abs() * 100.0).round();

        if !cents.is_finite() || cents >= MAX_CENTS {
            tracing::error!("Cannot format {amount} as currency");
            return UNREPRESENTABLE_AMOUNT.to_owned();
        }

        // In range and non-negative, so the conversion is exact.
        let cents = cents as u128;
        let sign = if amount < 0.0 && cents != 0 { "-" } else { "" };
        let whole = group_thousands(cents / 100, style.thousands_separator);

        format!(
            "{sign}{}{whole}{}{:02}",
            style.symbol,
            style.decimal_separator,
            cents % 100
        )
    }

    /// Format the calendar date of `date_time` as seen in the viewer's timezone.
    ///
    /// Falls back to the UTC date if the local date is outside the range
    /// `time` can represent.
    pub fn format_date(&self, date_time: OffsetDateTime) -> String {
        let offset = get_offset_at(self.timezone, &date_time);
        let local = date_time.checked_to_offset(offset).unwrap_or_else(|| {
            tracing::error!(
                "Date {date_time} is out of range in {}, showing it in UTC",
                self.timezone.name()
            );
            date_time
                .checked_to_offset(UtcOffset::UTC)
                .unwrap_or(date_time)
        });

        local
            .format(self.locale.date_format())
            .unwrap_or_else(|error| {
                tracing::error!("Could not format date {date_time}: {error}");
                local.date().to_string()
            })
    }
}

impl Debug for DisplayFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayFormat")
            .field("locale", &self.locale)
            .field("timezone", &self.timezone.name())
            .finish()
    }
}

/// Amounts with this many cents or more are not formatted.
pub const MAX_CENTS: f64 = 1e36;

/// Shown in place of amounts that cannot be formatted.
pub const UNREPRESENTABLE_AMOUNT: &str = "N/A";

/// Write `number` with `separator` between each group of three digits.
fn group_thousands(number: u128, separator: char) -> String {
    let grouped = number.to_formatted_string(&num_format::Locale::en);

    if separator == ',' {
        grouped
    } else {
        grouped.replace(',', &separator.to_string())
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use crate::Error;

    use super::{DisplayFormat, Locale, UNREPRESENTABLE_AMOUNT};

    fn brazil() -> DisplayFormat {
        DisplayFormat::new(Locale::PtBr, "Etc/UTC").unwrap()
    }

    fn america() -> DisplayFormat {
        DisplayFormat::new(Locale::EnUs, "Etc/UTC").unwrap()
    }

    #[test]
    fn formats_brazilian_currency() {
        let format = brazil();

        assert_eq!(format.format_currency(5000.0), "R$ 5.000,00");
        assert_eq!(format.format_currency(0.0), "R$ 0,00");
        assert_eq!(format.format_currency(12.5), "R$ 12,50");
        assert_eq!(format.format_currency(999.999), "R$ 1.000,00");
        assert_eq!(format.format_currency(1_234_567.891), "R$ 1.234.567,89");
        assert_eq!(format.format_currency(-12.5), "-R$ 12,50");
    }

    #[test]
    fn formats_american_currency() {
        let format = america();

        assert_eq!(format.format_currency(5000.0), "$5,000.00");
        assert_eq!(format.format_currency(0.1), "$0.10");
        assert_eq!(format.format_currency(-1234.56), "-$1,234.56");
    }

    #[test]
    fn formats_amounts_of_a_trillion_and_more() {
        assert_eq!(america().format_currency(1e12), "$1,000,000,000,000.00");
        assert_eq!(
            america().format_currency(-1e18),
            "-$1,000,000,000,000,000,000.00"
        );
        assert_eq!(brazil().format_currency(1e12), "R$ 1.000.000.000.000,00");
        assert_eq!(
            brazil().format_currency(2.5e15),
            "R$ 2.500.000.000.000.000,00"
        );
    }

    #[test]
    fn unrepresentable_amounts_are_not_formatted() {
        assert_eq!(brazil().format_currency(f64::NAN), UNREPRESENTABLE_AMOUNT);
        assert_eq!(
            america().format_currency(f64::INFINITY),
            UNREPRESENTABLE_AMOUNT
        );
        assert_eq!(america().format_currency(-1e40), UNREPRESENTABLE_AMOUNT);
    }

    #[test]
    fn amounts_rounding_to_zero_have_no_sign() {
        assert_eq!(brazil().format_currency(-0.004), "R$ 0,00");
        assert_eq!(america().format_currency(-0.0), "$0.00");
    }

    #[test]
    fn formats_dates_for_locale() {
        let created_at = datetime!(2024-01-05 0:00 UTC);

        assert_eq!(brazil().format_date(created_at), "05/01/2024");
        assert_eq!(america().format_date(created_at), "01/05/2024");
    }

    #[test]
    fn formats_dates_in_viewer_timezone() {
        let format = DisplayFormat::new(Locale::PtBr, "America/Sao_Paulo").unwrap();

        assert_eq!(
            format.format_date(datetime!(2024-01-05 0:00 UTC)),
            "04/01/2024"
        );
        assert_eq!(
            format.format_date(datetime!(2024-01-05 3:00 UTC)),
            "05/01/2024"
        );
    }

    #[test]
    fn dates_outside_local_range_fall_back_to_utc() {
        let format = DisplayFormat::new(Locale::PtBr, "Pacific/Kiritimati").unwrap();

        assert_eq!(
            format.format_date(datetime!(9999-12-31 23:00 UTC)),
            "31/12/9999"
        );
    }

    #[test]
    fn rejects_unknown_timezone() {
        let result = DisplayFormat::new(Locale::PtBr, "Mars/Olympus_Mons");

        assert_eq!(
            result.map(|_| ()),
            Err(Error::InvalidTimezoneError("Mars/Olympus_Mons".to_owned()))
        );
    }
}
