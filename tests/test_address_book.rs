//! Address book behaviour through the public API.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use contact_book::{
    AddressBook, Assistant, BirthdayReport, BookError, Field, Phone, Record, Reply,
};

fn date(day: u32, month: u32, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn reply_text(reply: Reply) -> String {
    reply.text().to_string()
}

#[test]
fn test_add_contact_scenario() {
    let mut assistant = Assistant::new(AddressBook::new());
    assert_eq!(
        reply_text(assistant.handle_line("add Alice 1234567890")),
        "Contact added."
    );

    let record = assistant.book().find("Alice").unwrap();
    assert_eq!(record.name().as_str(), "Alice");
    let phones: Vec<&str> = record.phones().iter().map(Phone::as_str).collect();
    assert_eq!(phones, vec!["1234567890"]);
}

#[test]
fn test_change_contact_scenario() {
    let mut assistant = Assistant::new(AddressBook::new());
    assistant.handle_line("add Bob 1111111111");
    assert_eq!(
        reply_text(assistant.handle_line("change Bob 1111111111 2222222222")),
        "Contact updated Bob."
    );
    assert_eq!(reply_text(assistant.handle_line("phone Bob")), "2222222222");
}

#[test]
fn test_birthday_scenario_preserves_original_string() {
    let mut assistant = Assistant::new(AddressBook::new());
    assistant.handle_line("add Carl 1234567890");
    assistant.handle_line("add-birthday Carl 15.03.2020");
    assert_eq!(
        reply_text(assistant.handle_line("show-birthday Carl")),
        "15.03.2020"
    );
}

#[test]
fn test_delete_then_find_is_absent() {
    let mut book = AddressBook::new();
    book.add_record(Record::with_name("Alice").unwrap());
    book.delete("Alice").unwrap();
    assert!(book.find("Alice").is_none());
    assert!(matches!(book.delete("Alice"), Err(BookError::NotFound(_))));
}

#[test]
fn test_every_phone_length_other_than_ten_fails() {
    for len in 0..20 {
        let raw = "7".repeat(len);
        assert_eq!(Phone::parse(raw).is_ok(), len == 10, "length {len}");
    }
}

#[test]
fn test_every_single_non_digit_fails() {
    for bad in ['a', ' ', '-', '+', '.', '(', 'Z'] {
        for pos in 0..10 {
            let mut raw: Vec<char> = "0123456789".chars().collect();
            raw[pos] = bad;
            let raw: String = raw.into_iter().collect();
            assert!(Phone::parse(raw.clone()).is_err(), "{raw}");
        }
    }
}

/// Every day of the week as a birthday: the greeting date is always a weekday
/// and never more than two days after the birthday.
#[test]
fn test_greeting_dates_never_fall_on_weekends() {
    let today = date(6, 1, 2025);
    let mut book = AddressBook::new();
    for offset in 0..=7 {
        let day = today + Duration::days(offset);
        let mut record = Record::with_name(&format!("P{offset}")).unwrap();
        record
            .add_birthday(&format!("{:02}.{:02}.1980", day.day(), day.month()))
            .unwrap();
        book.add_record(record);
    }

    let BirthdayReport::Upcoming(entries) = book.upcoming_birthdays(today) else {
        panic!("expected upcoming birthdays");
    };
    assert_eq!(entries.len(), 8);
    for (offset, entry) in entries.iter().enumerate() {
        let birthday = today + Duration::days(offset as i64);
        let shift = (entry.greeting_date - birthday).num_days();
        match birthday.weekday() {
            Weekday::Sat => assert_eq!(shift, 2),
            Weekday::Sun => assert_eq!(shift, 1),
            _ => assert_eq!(shift, 0),
        }
        assert!(!matches!(
            entry.greeting_date.weekday(),
            Weekday::Sat | Weekday::Sun
        ));
    }
}

#[test]
fn test_birthday_window_across_year_end() {
    let mut book = AddressBook::new();
    let mut record = Record::with_name("Nora").unwrap();
    record.add_birthday("01.01.2001").unwrap();
    book.add_record(record);

    // 01.01.2026 is a Thursday.
    for (today, expected) in [
        (date(24, 12, 2025), false),
        (date(25, 12, 2025), true),
        (date(30, 12, 2025), true),
        (date(1, 1, 2026), true),
        (date(2, 1, 2026), false),
    ] {
        let included = matches!(book.upcoming_birthdays(today), BirthdayReport::Upcoming(_));
        assert_eq!(included, expected, "today {today}");
    }
}
