use glaze::ThemePath;
use palette::defaults::default_theme;
use palette::error::EditorError;
use palette::fields::{Field, FieldKind, ThemeForm, split_unit};
use palette::store::ThemeStore;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn path(raw: &str) -> ThemePath {
    raw.parse().unwrap()
}

fn counted_store() -> (ThemeStore, Arc<AtomicUsize>) {
    let mut store = ThemeStore::new(default_theme());
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    (store, count)
}

#[test]
fn test_kind_follows_category() {
    assert_eq!(Field::new(path("colors.primary.50")).kind(), FieldKind::Color);
    assert_eq!(Field::new(path("fontSize.lg")).kind(), FieldKind::FontSize);
    assert_eq!(Field::new(path("fontWeight.bold")).kind(), FieldKind::FontWeight);
    assert_eq!(Field::new(path("spacing.4")).kind(), FieldKind::Text);
}

#[test]
fn test_split_unit() {
    assert_eq!(split_unit("1.25rem"), Some(("1.25", "rem")));
    assert_eq!(split_unit("16px"), Some(("16", "px")));
    assert_eq!(split_unit("1.5"), Some(("1.5", "")));
    assert_eq!(split_unit("big"), None);
    assert_eq!(split_unit("1.5r3m"), None);
}

#[test]
fn test_font_size_round_trip() {
    let mut store = ThemeStore::new(default_theme().with_entry("fontSize", "lg", "1.25rem"));
    let mut field = Field::new(path("fontSize.lg"));
    assert_eq!(field.display(store.theme()), Some("1.25".to_string()));

    // Staged only until committed.
    assert_eq!(field.input(&mut store, "1.5").unwrap(), None);
    assert_eq!(store.get(&path("fontSize.lg")), Some("1.25rem"));

    assert_eq!(field.commit(&mut store).unwrap(), "1.5rem");
    assert_eq!(store.get(&path("fontSize.lg")), Some("1.5rem"));
    assert_eq!(field.display(store.theme()), Some("1.5".to_string()));
}

#[test]
fn test_font_size_keeps_existing_unit() {
    let mut store = ThemeStore::new(default_theme().with_entry("fontSize", "lg", "16px"));
    let mut field = Field::new(path("fontSize.lg"));
    assert_eq!(field.submit(&mut store, "18").unwrap(), "18px");
    assert_eq!(field.submit(&mut store, "1.2em").unwrap(), "1.2em");
}

#[test]
fn test_font_size_rejects_non_numbers() {
    let (mut store, count) = counted_store();
    let mut field = Field::new(path("fontSize.base"));
    let err = field.submit(&mut store, "huge").unwrap_err();
    assert!(matches!(err, EditorError::InvalidInput { .. }));
    assert_eq!(store.get(&path("fontSize.base")), Some("1rem"));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_font_size_rejects_negative_values() {
    let (mut store, count) = counted_store();
    let mut field = Field::new(path("fontSize.base"));
    for bad in ["-1", "-0.5rem"] {
        let err = field.submit(&mut store, bad).unwrap_err();
        assert!(matches!(err, EditorError::InvalidInput { .. }), "{bad}");
    }
    assert_eq!(store.get(&path("fontSize.base")), Some("1rem"));
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_font_weight_is_clamped_and_immediate() {
    let (mut store, count) = counted_store();
    let mut field = Field::new(path("fontWeight.bold"));

    assert_eq!(field.input(&mut store, "50").unwrap(), Some("100".to_string()));
    assert_eq!(store.get(&path("fontWeight.bold")), Some("100"));

    assert_eq!(field.input(&mut store, "1000").unwrap(), Some("900".to_string()));
    assert_eq!(store.get(&path("fontWeight.bold")), Some("900"));

    assert_eq!(field.input(&mut store, "650").unwrap(), Some("650".to_string()));
    assert_eq!(count.load(Ordering::SeqCst), 3);

    assert!(field.input(&mut store, "heavy").is_err());
    assert_eq!(store.get(&path("fontWeight.bold")), Some("650"));
}

#[test]
fn test_color_waits_for_commit() {
    let (mut store, count) = counted_store();
    let mut field = Field::new(path("colors.primary.50"));

    field.input(&mut store, "#AABBCC").unwrap();
    field.input(&mut store, "#ff0000").unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(field.draft(), Some("#ff0000"));

    assert_eq!(field.commit(&mut store).unwrap(), "#ff0000");
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(field.draft(), None);

    assert_eq!(field.submit(&mut store, "#ABC").unwrap(), "#abc");
}

#[test]
fn test_color_validation_and_empty_commit() {
    let (mut store, _) = counted_store();
    let mut field = Field::new(path("colors.primary.50"));

    assert!(matches!(
        field.commit(&mut store),
        Err(EditorError::NothingStaged(_))
    ));
    for bad in ["red", "#12", "#gggggg", "243d48"] {
        assert!(field.submit(&mut store, bad).is_err(), "{bad}");
    }
    assert_eq!(store.get(&path("colors.primary.50")), Some("#243d48"));
}

#[test]
fn test_form_has_one_field_per_leaf() {
    let theme = default_theme();
    let form = ThemeForm::new(&theme);
    assert_eq!(form.fields().len(), theme.leaves().len());
    assert!(form.field(&path("colors.primary.900")).is_some());
    assert!(form.field(&path("fontWeight.normal")).is_some());
    assert!(form.field(&path("colors.secondary.50")).is_none());
}
