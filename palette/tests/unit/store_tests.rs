use glaze::{ThemeConfiguration, ThemePath};
use palette::defaults::default_theme;
use palette::store::ThemeStore;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn path(raw: &str) -> ThemePath {
    raw.parse().unwrap()
}

#[test]
fn test_subscribers_see_new_value() {
    let mut store = ThemeStore::new(default_theme());
    let seen: Arc<Mutex<Vec<ThemeConfiguration>>> = Arc::default();
    let sink = Arc::clone(&seen);
    store.subscribe(move |theme| sink.lock().unwrap().push(theme.clone()));

    store.set(&path("colors.primary.50"), "#000000").unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].get(&path("colors.primary.50")), Some("#000000"));
    assert_eq!(seen[0], *store.theme());
}

#[test]
fn test_unchanged_value_still_notifies() {
    let mut store = ThemeStore::new(default_theme());
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    store.set(&path("fontWeight.bold"), "700").unwrap();
    store.set(&path("fontWeight.bold"), "700").unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_unknown_path_fails_without_notifying() {
    let mut store = ThemeStore::new(default_theme());
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(store.set(&path("colors.secondary.50"), "#000000").is_err());
    assert_eq!(count.load(Ordering::SeqCst), 0);
    assert_eq!(*store.theme(), default_theme());
}

#[test]
fn test_unsubscribe() {
    let mut store = ThemeStore::new(default_theme());
    let count = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&count);
    let id = store.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert!(store.unsubscribe(id));
    assert!(!store.unsubscribe(id));
    store.set(&path("fontSize.lg"), "1.2rem").unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 0);
}
