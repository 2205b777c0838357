//! Unit Tests for Event Date Semantics
//!
//! Covers effective dates, durations, day ranges, and preview formatting
//! for both timed and all-day events.

#[cfg(test)]
mod event_tests {
    use crate::models::Event;
    use chrono::{NaiveDate, NaiveDateTime};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn effective_date_is_from_date_when_all_day() {
        let event = Event::all_day("page-1", "Fair", date(2008, 1, 1), None);
        assert_eq!(event.effective_date(), Some(date(2008, 1, 1)));
    }

    #[test]
    fn effective_date_is_datetime_date_when_timed() {
        let event = Event::timed("page-1", "Gig", datetime(2009, 1, 1, 19, 30));
        assert_eq!(event.effective_date(), Some(date(2009, 1, 1)));
    }

    #[test]
    fn duration_counts_inclusive_days_for_all_day_span() {
        let event = Event::all_day(
            "page-1",
            "Festival",
            date(2010, 1, 1),
            Some(date(2010, 1, 3)),
        );
        assert_eq!(event.duration(), 3);
    }

    #[test]
    fn duration_is_one_for_single_day_all_day_event() {
        let event = Event::all_day(
            "page-1",
            "Open day",
            date(2010, 1, 1),
            Some(date(2010, 1, 1)),
        );
        assert_eq!(event.duration(), 1);
    }

    #[test]
    fn duration_is_one_when_to_date_unset() {
        let event = Event::all_day("page-1", "Open day", date(2010, 1, 1), None);
        assert_eq!(event.duration(), 1);
    }

    #[test]
    fn duration_is_one_for_timed_events() {
        let event = Event::timed("page-1", "Gig", datetime(2010, 1, 1, 0, 0));
        assert_eq!(event.duration(), 1);
    }

    #[test]
    fn range_lists_every_covered_day() {
        let event = Event::all_day(
            "page-1",
            "Festival",
            date(2010, 1, 1),
            Some(date(2010, 1, 3)),
        );
        assert_eq!(
            event.range(),
            vec![date(2010, 1, 1), date(2010, 1, 2), date(2010, 1, 3)]
        );
    }

    #[test]
    fn range_is_single_element_for_one_day_events() {
        // An unset to_date and to_date == from_date must behave identically.
        let implicit = Event::all_day("page-1", "Open day", date(2010, 1, 1), None);
        let explicit = Event::all_day(
            "page-1",
            "Open day",
            date(2010, 1, 1),
            Some(date(2010, 1, 1)),
        );
        assert_eq!(implicit.range(), vec![date(2010, 1, 1)]);
        assert_eq!(explicit.range(), vec![date(2010, 1, 1)]);
    }

    #[test]
    fn range_is_single_element_for_timed_events() {
        let event = Event::timed("page-1", "Gig", datetime(2010, 1, 2, 21, 0));
        assert_eq!(event.range(), vec![date(2010, 1, 2)]);
    }

    #[test]
    fn preview_formats_single_all_day() {
        let event = Event::all_day("page-1", "Open day", date(2010, 1, 1), None);
        assert_eq!(event.preview(), "Friday, 01 January");
    }

    #[test]
    fn preview_formats_multi_day_pair() {
        let event = Event::all_day(
            "page-1",
            "Weekender",
            date(2010, 1, 1),
            Some(date(2010, 1, 2)),
        );
        assert_eq!(event.preview(), "Friday, 01 January <br />Saturday, 02 January");
    }

    #[test]
    fn preview_formats_timed_with_clock() {
        let event = Event::timed("page-1", "Gig", datetime(2010, 1, 1, 0, 0));
        assert_eq!(event.preview(), "Friday, 01 January 00:00");
    }

    #[test]
    fn validate_rejects_empty_name() {
        let mut event = Event::timed("page-1", "Gig", datetime(2010, 1, 1, 0, 0));
        event.name = String::new();
        assert!(event.validate().is_err());
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let event = Event::all_day(
            "page-1",
            "Backwards",
            date(2010, 1, 3),
            Some(date(2010, 1, 1)),
        );
        assert!(event.validate().is_err());
    }

    #[test]
    fn validate_requires_datetime_for_timed_events() {
        let mut event = Event::timed("page-1", "Gig", datetime(2010, 1, 1, 0, 0));
        event.datetime = None;
        assert!(event.validate().is_err());
    }

    #[test]
    fn serializes_camel_case_and_skips_unset_dates() {
        let event = Event::all_day("page-1", "Fair", date(2010, 1, 1), None);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["pageId"], "page-1");
        assert_eq!(json["allDay"], true);
        assert_eq!(json["fromDate"], "2010-01-01");
        assert!(json.get("datetime").is_none());
        assert!(json.get("toDate").is_none());

        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn timed_event_round_trips_its_datetime() {
        let event = Event::timed("page-1", "Gig", datetime(2010, 1, 1, 19, 30));
        let json = serde_json::to_value(&event).unwrap();

        assert!(json.get("fromDate").is_none());
        let back: Event = serde_json::from_value(json).unwrap();
        assert_eq!(back, event);
    }

    #[test]
    fn permalink_is_lowercase_dashed() {
        let event = Event::timed("page-1", "This is a Test", datetime(2010, 1, 1, 0, 0));
        assert_eq!(event.permalink(), "this-is-a-test");
    }

    #[test]
    fn slug_is_id_dash_permalink() {
        let event = Event::timed("page-1", "Slappy", datetime(2010, 1, 1, 0, 0));
        assert_eq!(event.slug(), format!("{}-slappy", event.id));
    }
}
