//! Locale-aware formatting for footer dates.

use std::fmt;

use time::macros::format_description;
use time::{Date, OffsetDateTime};

use crate::i18n::SupportedLocale;

/// Short date as browsers print it for `et-EE` (`5.10.2026`) and `en-US` (`10/5/2026`).
pub fn format_short_date(locale: SupportedLocale, date: Date) -> String {
    let formatted = match locale {
        SupportedLocale::Et => date.format(format_description!(
            "[day padding:none].[month padding:none].[year]"
        )),
        SupportedLocale::En => date.format(format_description!(
            "[month padding:none]/[day padding:none]/[year]"
        )),
    };
    formatted.unwrap_or_else(|err| {
        tracing::warn!(%err, "date formatting failed");
        date.to_string()
    })
}

/// The visitor's calendar date.
pub fn today() -> Date {
    local_date_or_utc(OffsetDateTime::now_local(), OffsetDateTime::now_utc())
}

/// Local date when the offset is known, otherwise the UTC date.
fn local_date_or_utc<E: fmt::Display>(local: Result<OffsetDateTime, E>, utc: OffsetDateTime) -> Date {
    match local {
        Ok(now) => now.date(),
        Err(err) => {
            tracing::debug!(%err, "local offset unavailable; using UTC date");
            utc.date()
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::{date, datetime};

    use super::*;

    #[test]
    fn estonian_short_date() {
        assert_eq!(format_short_date(SupportedLocale::Et, date!(2026 - 10 - 05)), "5.10.2026");
        assert_eq!(format_short_date(SupportedLocale::Et, date!(2025 - 01 - 31)), "31.1.2025");
    }

    #[test]
    fn english_short_date() {
        assert_eq!(format_short_date(SupportedLocale::En, date!(2026 - 10 - 05)), "10/5/2026");
        assert_eq!(format_short_date(SupportedLocale::En, date!(2025 - 01 - 31)), "1/31/2025");
    }

    #[test]
    fn local_date_wins_across_midnight() {
        let local = datetime!(2026-01-01 00:30 +2);
        let utc = datetime!(2025-12-31 22:30 UTC);
        assert_eq!(local_date_or_utc::<&str>(Ok(local), utc), date!(2026 - 01 - 01));
    }

    #[test]
    fn unknown_offset_falls_back_to_utc() {
        let utc = datetime!(2025-12-31 22:30 UTC);
        assert_eq!(local_date_or_utc(Err("indeterminate offset"), utc), date!(2025 - 12 - 31));
    }
}
