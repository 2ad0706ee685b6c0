use chrono::{Datelike, Days, Duration, Months, NaiveDate};

/// Best guess at the newest published stats folder for `today`.
///
/// A month's stats show up a day or two into the following month, so the
/// 1st still counts as the previous month's edge and gets pushed back 48h.
/// After that the date always moves back one month and one day.
pub fn guess_date_folder(today: NaiveDate) -> String {
    let date = if today.day() == 1 {
        today - Duration::hours(48)
    } else {
        today
    };

    let date = date - Months::new(1) - Days::new(1);
    date.format("%Y-%m").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_first_of_month_steps_back_two_months() {
        assert_eq!(guess_date_folder(date(2024, 3, 1)), "2024-01");
    }

    #[test]
    fn test_mid_month_uses_previous_month() {
        assert_eq!(guess_date_folder(date(2024, 3, 15)), "2024-02");
    }

    #[test]
    fn test_second_of_month_lands_in_previous_month() {
        assert_eq!(guess_date_folder(date(2024, 3, 2)), "2024-02");
    }

    #[test]
    fn test_year_boundary() {
        assert_eq!(guess_date_folder(date(2024, 1, 1)), "2023-11");
        assert_eq!(guess_date_folder(date(2024, 1, 20)), "2023-12");
    }

    #[test]
    fn test_month_end_clamps() {
        // March 31 minus a month clamps to Feb 29, then one more day
        assert_eq!(guess_date_folder(date(2024, 3, 31)), "2024-02");
    }
}
