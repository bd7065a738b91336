/* 📖 # Why does greet take a PalHandle?

The greeting is a pure template plus one write to standard output.
Routing the write (and, for greet_now, the clock) through the PAL lets tests pin the
time and read back exactly what was printed, without capturing the process stdout.
*/

use std::fmt::Display;

use chrono::{DateTime, TimeZone};
use tracing::{debug, instrument};

use hello_base::{HelloResult, PalHandle, ResultExt};

use crate::date_text::render_date;
use crate::greeting::Greeting;

/// Print `Hello {person}, today is {date}!` followed by a newline.
///
/// The date is rendered with [`render_date`]. Exactly one line is written per call.
/// A failed write is returned to the caller, nothing is retried.
///
/// # Examples
/// ```
/// use chrono::{FixedOffset, TimeZone};
/// use hello_base::{MockPal, PalHandle};
/// use hello_greeter::greet;
///
/// let mock = MockPal::new();
/// let pal = PalHandle::new(mock.clone());
/// let date = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
///
/// greet(&pal, "Brendan", &date).unwrap();
/// assert_eq!(mock.stdout(), "Hello Brendan, today is Mon Jan 01 2024!\n");
/// ```
#[instrument(skip(pal, date))]
pub fn greet<Tz: TimeZone>(pal: &PalHandle, person: &str, date: &DateTime<Tz>) -> HelloResult<()>
where
    Tz::Offset: Display,
{
    greet_with(pal, person, date, render_date::<Tz>)
}

/// Like [`greet`], but the date is rendered by `render`.
#[instrument(skip(pal, date, render))]
pub fn greet_with<Tz, F>(
    pal: &PalHandle,
    person: &str,
    date: &DateTime<Tz>,
    render: F,
) -> HelloResult<()>
where
    Tz: TimeZone,
    F: FnOnce(&DateTime<Tz>) -> String,
{
    let greeting = Greeting::new(person, render(date));
    debug!(date_text = %greeting.date_text(), "writing greeting");
    pal.write_stdout_line(&greeting.to_string())
        .with_context(|| format!("Failed to greet '{}'", greeting.person()))
}

/// Greet `person` with the PAL's current time.
pub fn greet_now(pal: &PalHandle, person: &str) -> HelloResult<()> {
    let now = pal.now();
    greet(pal, person, &now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};
    use expect_test::expect;
    use hello_base::MockPal;
    use hello_base::error::ErrorKind;

    fn new_year_2024() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(0)
            .unwrap()
            .with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
            .unwrap()
    }

    fn mock_pal() -> (MockPal, PalHandle) {
        let mock = MockPal::new();
        let pal = PalHandle::new(mock.clone());
        (mock, pal)
    }

    #[test]
    fn test_greet_brendan() {
        let (mock, pal) = mock_pal();

        greet(&pal, "Brendan", &new_year_2024()).unwrap();

        expect![[r#"
            Hello Brendan, today is Mon Jan 01 2024!
        "#]]
        .assert_eq(&mock.stdout());
    }

    #[test]
    fn test_greet_with_fixed_renderer() {
        let (mock, pal) = mock_pal();

        greet_with(&pal, "Ada", &new_year_2024(), |_| "DATE".to_string()).unwrap();

        assert_eq!(mock.stdout(), "Hello Ada, today is DATE!\n");
    }

    #[test]
    fn test_greet_with_renderer_sees_the_date() {
        let (mock, pal) = mock_pal();

        greet_with(&pal, "Ada", &new_year_2024(), |date| date.to_rfc3339()).unwrap();

        assert_eq!(
            mock.stdout_lines(),
            ["Hello Ada, today is 2024-01-01T00:00:00+00:00!"]
        );
    }

    #[test]
    fn test_greet_matches_template_for_any_name() {
        let date = new_year_2024();
        for name in ["", "Brendan", "  x  ", "Zoë"] {
            let (mock, pal) = mock_pal();
            greet(&pal, name, &date).unwrap();

            let expected = format!("Hello {}, today is {}!\n", name, render_date(&date));
            assert_eq!(mock.stdout(), expected);
        }
    }

    #[test]
    fn test_greet_empty_name() {
        let (mock, pal) = mock_pal();

        greet(&pal, "", &new_year_2024()).unwrap();

        assert_eq!(mock.stdout_lines(), ["Hello , today is Mon Jan 01 2024!"]);
    }

    #[test]
    fn test_greet_is_idempotent() {
        let (mock, pal) = mock_pal();
        let date = new_year_2024();

        greet(&pal, "Brendan", &date).unwrap();
        greet(&pal, "Brendan", &date).unwrap();

        let lines = mock.stdout_lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], lines[1]);
    }

    #[test]
    fn test_greet_writes_exactly_one_line_per_call() {
        let (mock, pal) = mock_pal();

        greet(&pal, "A", &new_year_2024()).unwrap();
        assert_eq!(mock.stdout_lines().len(), 1);
        greet(&pal, "B", &new_year_2024()).unwrap();
        assert_eq!(mock.stdout_lines().len(), 2);
    }

    #[test]
    fn test_greet_accepts_other_time_zones() {
        let (mock, pal) = mock_pal();
        let date = Utc.with_ymd_and_hms(2000, 7, 4, 12, 0, 0).unwrap();

        greet(&pal, "Brendan", &date).unwrap();

        assert_eq!(mock.stdout(), "Hello Brendan, today is Tue Jul 04 2000!\n");
    }

    #[test]
    fn test_greet_now_uses_pal_clock() {
        let mock = MockPal::at(
            FixedOffset::east_opt(9 * 3600)
                .unwrap()
                .with_ymd_and_hms(2024, 2, 29, 7, 0, 0)
                .unwrap(),
        );
        let pal = PalHandle::new(mock.clone());

        greet_now(&pal, "Brendan").unwrap();

        expect![[r#"
            Hello Brendan, today is Thu Feb 29 2024!
        "#]]
        .assert_eq(&mock.stdout());
    }

    #[test]
    fn test_greet_output_failure_propagates() {
        let (mock, pal) = mock_pal();
        mock.fail_output("stdout closed");

        let err = greet(&pal, "Brendan", &new_year_2024()).unwrap_err();

        assert!(matches!(err.kind(), ErrorKind::OutputError { .. }));
        expect!["Failed to greet 'Brendan': Failed to write to standard output: stdout closed"]
            .assert_eq(&err.to_string());
        assert_eq!(err.root_cause().to_string(), "stdout closed");
        assert!(mock.stdout_lines().is_empty());
    }

    #[test]
    fn test_greet_year_above_9999_has_no_sign() {
        let (mock, pal) = mock_pal();
        let date = Utc.with_ymd_and_hms(10000, 1, 1, 12, 0, 0).unwrap();

        greet(&pal, "Brendan", &date).unwrap();

        assert_eq!(mock.stdout(), "Hello Brendan, today is Sat Jan 01 10000!\n");
    }
}
