use chrono::{Datelike, Duration, NaiveDate};

/// A Monday–Sunday calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    start: NaiveDate,
}

impl Week {
    /// The week containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        let offset = date.weekday().num_days_from_monday() as i64;
        Self {
            start: date - Duration::days(offset),
        }
    }

    /// Monday of this week
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Sunday of this week
    pub fn end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    /// The week immediately before this one
    pub fn previous(&self) -> Self {
        Self {
            start: self.start - Duration::days(7),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_containing_wednesday() {
        let week = Week::containing(ymd(2024, 6, 12));
        assert_eq!(week.start(), ymd(2024, 6, 10));
        assert_eq!(week.end(), ymd(2024, 6, 16));
    }

    #[test]
    fn test_week_containing_monday_and_sunday() {
        assert_eq!(Week::containing(ymd(2024, 6, 10)).start(), ymd(2024, 6, 10));
        assert_eq!(Week::containing(ymd(2024, 6, 16)).start(), ymd(2024, 6, 10));
    }

    #[test]
    fn test_previous_week() {
        let last = Week::containing(ymd(2024, 6, 12)).previous();
        assert_eq!(last.start(), ymd(2024, 6, 3));
        assert_eq!(last.end(), ymd(2024, 6, 9));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let week = Week::containing(ymd(2024, 6, 12));
        assert!(week.contains(ymd(2024, 6, 10)));
        assert!(week.contains(ymd(2024, 6, 16)));
        assert!(!week.contains(ymd(2024, 6, 9)));
        assert!(!week.contains(ymd(2024, 6, 17)));
    }

    #[test]
    fn test_week_across_year_boundary() {
        // 2025-01-01 is a Wednesday
        let week = Week::containing(ymd(2025, 1, 1));
        assert_eq!(week.start(), ymd(2024, 12, 30));
        assert_eq!(week.end(), ymd(2025, 1, 5));
    }
}
