//! Tests for report rendering.

use chrono::{NaiveDate, NaiveTime};
use freeslot_core::{render, FreeInterval, Horizon};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 7, d).unwrap()
}

fn free(d: u32, sh: u32, sm: u32, eh: u32, em: u32) -> FreeInterval {
    FreeInterval {
        day: day(d),
        start: NaiveTime::from_hms_opt(sh, sm, 0).unwrap(),
        end: NaiveTime::from_hms_opt(eh, em, 0).unwrap(),
    }
}

#[test]
fn renders_day_blocks_between_separators() {
    let horizon = Horizon::consecutive(day(5), 3);
    let intervals = vec![
        free(5, 13, 0, 15, 30),
        free(5, 18, 0, 21, 0),
        free(7, 13, 0, 21, 0),
    ];

    let expected = "\
------------------------

2021-07-05 13:00 - 15:30
2021-07-05 18:00 - 21:00

\n\
2021-07-07 13:00 - 21:00

------------------------
";
    assert_eq!(render(&intervals, &horizon), expected);
}

#[test]
fn empty_horizon_day_contributes_only_its_blank_line() {
    let horizon = Horizon::consecutive(day(5), 1);
    let report = render(&[], &horizon);

    assert_eq!(report, "------------------------\n\n\n------------------------\n");
}

#[test]
fn single_digit_hours_are_space_padded() {
    let horizon = Horizon::consecutive(day(5), 1);
    let report = render(&[free(5, 8, 0, 9, 30)], &horizon);

    assert!(report.contains("2021-07-05  8:00 -  9:30"));
}
