use pretty_assertions::assert_eq;
use quotes_core::{
    default_quotes, export_json, parse_import, update, AppState, Effect, Filter, ImportError, Msg,
    Quote, IMPORT_OK_MESSAGE,
};

fn restored(quotes: Vec<Quote>) -> AppState {
    let (mut state, _) = update(
        AppState::new(),
        Msg::Restore {
            quotes,
            filter: Filter::All,
            last_viewed: None,
        },
    );
    state.consume_dirty();
    state
}

#[test]
fn export_then_import_appends_duplicates() {
    let original = default_quotes();
    let state = restored(original.clone());

    let (state, effects) = update(state, Msg::ExportRequested);
    let exported = match effects.as_slice() {
        [Effect::ExportQuotes(quotes)] => export_json(quotes),
        other => panic!("unexpected effects {other:?}"),
    };

    let (state, effects) = update(state, Msg::ImportText(exported));

    // Import does not dedupe: the round trip doubles the list.
    let mut expected = original.clone();
    expected.extend(original.iter().cloned());
    assert_eq!(state.quotes(), expected.as_slice());
    assert_eq!(
        effects,
        vec![
            Effect::PersistQuotes(expected),
            Effect::RefreshDisplay,
            Effect::Alert(IMPORT_OK_MESSAGE.to_string()),
        ]
    );
    for quote in &original {
        assert!(state.quotes().contains(quote));
    }
}

#[test]
fn export_is_a_pure_read() {
    let state = restored(default_quotes());
    let (mut next, effects) = update(state.clone(), Msg::ExportRequested);

    assert_eq!(effects, vec![Effect::ExportQuotes(default_quotes())]);
    assert!(!next.consume_dirty());
    assert_eq!(state, next);
}

#[test]
fn import_rejects_non_array_shapes() {
    for raw in [r#"{"text":"a","category":"b"}"#, "42", "\"quotes\"", "null"] {
        assert_eq!(parse_import(raw), Err(ImportError::NotAnArray), "input {raw}");
    }
}

#[test]
fn import_reports_parse_failures() {
    let err = parse_import("[{\"text\": ").unwrap_err();
    assert!(matches!(err, ImportError::Parse(_)));
    assert!(err.to_string().starts_with("Error reading file:"));
}

#[test]
fn import_rejects_whole_file_on_one_bad_entry() {
    let raw = r#"[
        {"text": "Carpe diem", "category": "Life"},
        {"text": "   ", "category": "Life"}
    ]"#;
    let err = parse_import(raw).unwrap_err();
    assert!(matches!(err, ImportError::InvalidEntry { index: 1, .. }));

    let state = restored(default_quotes());
    let (mut next, effects) = update(state.clone(), Msg::ImportText(raw.to_string()));
    assert_eq!(next.quotes(), state.quotes());
    assert!(!next.consume_dirty());
    assert!(matches!(effects.as_slice(), [Effect::Alert(_)]));
}

#[test]
fn import_rejects_entries_missing_fields() {
    let err = parse_import(r#"[{"text": "Carpe diem"}]"#).unwrap_err();
    assert!(matches!(err, ImportError::InvalidEntry { index: 0, .. }));
}

#[test]
fn import_trims_fields_and_accepts_empty_array() {
    let quotes = parse_import(r#"[{"text": " Carpe diem ", "category": "Life "}]"#).unwrap();
    assert_eq!(quotes, vec![Quote::new("Carpe diem", "Life").unwrap()]);
    assert_eq!(parse_import("[]").unwrap(), Vec::<Quote>::new());
}

#[test]
fn unreadable_file_is_reported() {
    let state = restored(default_quotes());
    let (next, effects) = update(
        state.clone(),
        Msg::ImportUnreadable("permission denied".into()),
    );
    assert_eq!(next, state);
    assert_eq!(
        effects,
        vec![Effect::Alert("Error reading file: permission denied".into())]
    );
}
