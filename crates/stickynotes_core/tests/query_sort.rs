use stickynotes_core::{filter_notes, sort_notes, sort_notes_by_label, Note, SortOrder};

// The fixture trio used throughout: titles and stamps chosen so every
// criterion produces a distinct order.
fn fixture() -> Vec<Note> {
    vec![
        Note::with_created_at("banana", "yellow", 100),
        Note {
            reminder_at: Some(50),
            ..Note::with_created_at("Apple", "red", 200)
        },
        Note::with_created_at("cherry", "dark", 150),
    ]
}

fn titles(notes: &[Note]) -> Vec<&str> {
    notes.iter().map(|note| note.title.as_str()).collect()
}

#[test]
fn title_ascending_is_case_insensitive() {
    let sorted = sort_notes(fixture(), SortOrder::TitleAsc);
    assert_eq!(titles(&sorted), vec!["Apple", "banana", "cherry"]);
}

#[test]
fn title_descending_is_case_insensitive() {
    let sorted = sort_notes(fixture(), SortOrder::TitleDesc);
    assert_eq!(titles(&sorted), vec!["cherry", "banana", "Apple"]);
}

#[test]
fn creation_newest_orders_by_stamp_descending() {
    let sorted = sort_notes(fixture(), SortOrder::CreationNewest);
    assert_eq!(titles(&sorted), vec!["Apple", "cherry", "banana"]);
}

#[test]
fn creation_oldest_orders_by_stamp_ascending() {
    let sorted = sort_notes(fixture(), SortOrder::CreationOldest);
    assert_eq!(titles(&sorted), vec!["banana", "cherry", "Apple"]);
}

#[test]
fn reminder_date_puts_reminderless_notes_last() {
    let sorted = sort_notes(fixture(), SortOrder::ReminderDate);
    assert_eq!(sorted[0].title, "Apple");
    // The two reminderless notes keep their input order (stable sort).
    assert_eq!(titles(&sorted)[1..], ["banana", "cherry"]);
}

#[test]
fn reminder_date_orders_reminders_ascending() {
    let notes = vec![
        Note {
            reminder_at: Some(900),
            ..Note::with_created_at("later", "b", 1)
        },
        Note::with_created_at("never", "c", 2),
        Note {
            reminder_at: Some(300),
            ..Note::with_created_at("sooner", "a", 3)
        },
    ];

    let sorted = sort_notes(notes, SortOrder::ReminderDate);
    assert_eq!(titles(&sorted), vec!["sooner", "later", "never"]);
}

#[test]
fn unrecognized_label_keeps_input_order() {
    let input = fixture();
    let sorted = sort_notes_by_label(input.clone(), "Recently Hummed");
    assert_eq!(sorted, input);
}

#[test]
fn recognized_labels_dispatch_to_their_order() {
    let sorted = sort_notes_by_label(fixture(), "Creation Date (Newest)");
    assert_eq!(titles(&sorted), vec!["Apple", "cherry", "banana"]);
}

#[test]
fn filter_returns_exactly_the_matching_subset() {
    let notes = fixture();

    let hits = filter_notes(&notes, "an");
    assert_eq!(titles(&hits), vec!["banana"]);

    let by_content = filter_notes(&notes, "RED");
    assert_eq!(titles(&by_content), vec!["Apple"]);

    assert!(filter_notes(&notes, "mango").is_empty());
}

#[test]
fn filter_with_blank_query_returns_empty_not_everything() {
    let notes = fixture();
    assert!(filter_notes(&notes, "").is_empty());
    assert!(filter_notes(&notes, " \t ").is_empty());
}

#[test]
fn filter_is_idempotent_for_the_same_query() {
    let notes = fixture();
    let once = filter_notes(&notes, "e");
    let twice = filter_notes(&once, "e");
    assert_eq!(once, twice);
}

#[test]
fn filter_composes_over_a_sorted_collection() {
    let sorted = sort_notes(fixture(), SortOrder::TitleAsc);
    let hits = filter_notes(&sorted, "r");
    // Matching preserves the sorted order it was given.
    assert_eq!(titles(&hits), vec!["Apple", "cherry"]);
}
