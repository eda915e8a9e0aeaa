use glaze::engine::scan::candidates;
use glaze::{
    BASELINE_STYLESHEET, EngineKind, GenerationConfig, GlazeError, StylesheetEngine,
    ThemeConfiguration, ThemeValue, UtilityEngine, render_stylesheet,
};

fn primary() -> ThemeConfiguration {
    ThemeConfiguration::new().with_entry(
        "colors",
        "primary",
        ThemeValue::scale([("50", "#243d48"), ("100", "#2f5161")]),
    )
}

fn render(markup: &str, fragment: &ThemeConfiguration) -> String {
    render_stylesheet(&UtilityEngine::new(), markup, fragment).unwrap()
}

#[test]
fn test_button_gets_primary_background() {
    let css = render(r#"<button class="bg-primary-50">X</button>"#, &primary());
    assert!(css.contains(".bg-primary-50 {\n    background-color: #243d48;\n}\n"));
}

#[test]
fn test_output_contains_every_layer() {
    let css = render(r#"<div class="container p-4"></div>"#, &primary());

    assert!(!css.contains("@tailwind"));
    // base
    assert!(css.contains("box-sizing: border-box;"));
    // components
    assert!(css.contains(".container {\n    width: 100%;\n}\n"));
    // utilities
    assert!(css.contains(".p-4 {\n    padding: 1rem;\n}\n"));

    let base = css.find("box-sizing").unwrap();
    let container = css.find(".container").unwrap();
    let padding = css.find(".p-4").unwrap();
    assert!(base < container && container < padding);
}

#[test]
fn test_render_is_idempotent() {
    let markup = r#"<p class="text-lg font-bold md:p-4 hover:bg-primary-100">Hi</p>"#;
    assert_eq!(render(markup, &primary()), render(markup, &primary()));
}

#[test]
fn test_extend_keeps_default_spacing() {
    let css = render(r#"<div class="p-4 bg-primary-50"></div>"#, &primary());
    assert!(css.contains(".p-4 {\n    padding: 1rem;\n}\n"));
    assert!(css.contains("background-color: #243d48;"));
}

#[test]
fn test_extend_overrides_default_shade() {
    let fragment = ThemeConfiguration::new()
        .with_entry("colors", "gray", ThemeValue::scale([("500", "#123456")]));
    let css = render(r#"<p class="text-gray-500 text-gray-100"></p>"#, &fragment);
    assert!(css.contains(".text-gray-500 {\n    color: #123456;\n}\n"));
    assert!(css.contains(".text-gray-100 {\n    color: #f3f4f6;\n}\n"));
}

#[test]
fn test_text_prefers_font_size_over_color() {
    let css = render(r#"<p class="text-lg text-white"></p>"#, &ThemeConfiguration::new());
    assert!(css.contains(".text-lg {\n    font-size: 1.125rem;\n}\n"));
    assert!(css.contains(".text-white {\n    color: #ffffff;\n}\n"));
}

#[test]
fn test_font_weight_and_radius() {
    let css = render(
        r#"<b class="font-bold rounded rounded-lg"></b>"#,
        &ThemeConfiguration::new(),
    );
    assert!(css.contains(".font-bold {\n    font-weight: 700;\n}\n"));
    assert!(css.contains(".rounded {\n    border-radius: 0.25rem;\n}\n"));
    assert!(css.contains(".rounded-lg {\n    border-radius: 0.5rem;\n}\n"));
}

#[test]
fn test_axis_spacing_and_fractional_keys() {
    let css = render(r#"<div class="px-2 p-0.5"></div>"#, &ThemeConfiguration::new());
    assert!(css.contains(".px-2 {\n    padding-left: 0.5rem;\n    padding-right: 0.5rem;\n}\n"));
    assert!(css.contains(".p-0\\.5 {\n    padding: 0.125rem;\n}\n"));
}

#[test]
fn test_pseudo_and_screen_variants() {
    let css = render(
        r#"<a class="hover:bg-primary-50 lg:p-2 md:p-4 p-1"></a>"#,
        &primary(),
    );

    assert!(css.contains(".hover\\:bg-primary-50:hover {\n    background-color: #243d48;\n}\n"));
    assert!(css.contains("@media (min-width: 768px) {\n    .md\\:p-4 {\n        padding: 1rem;\n    }\n}\n"));

    let plain = css.find(".p-1 {").unwrap();
    let md = css.find("@media (min-width: 768px)").unwrap();
    let lg = css.find("@media (min-width: 1024px)").unwrap();
    assert!(plain < md && md < lg);
}

#[test]
fn test_unknown_classes_and_variants_are_ignored() {
    let css = render(
        r#"<div class="bg-nope shadow-xl print:p-4 md:lg:p-4"></div>"#,
        &primary(),
    );
    assert!(!css.contains("bg-nope"));
    assert!(!css.contains("shadow-xl"));
    assert!(!css.contains("print"));
    assert!(!css.contains("md\\:lg"));
}

#[test]
fn test_container_only_when_used() {
    let css = render(r#"<div class="p-4"></div>"#, &primary());
    assert!(!css.contains(".container"));
}

#[test]
fn test_unknown_layer_fails() {
    let config = GenerationConfig::for_markup("", ThemeConfiguration::new());
    let err = UtilityEngine::new()
        .process("@tailwind screens;\n", &config)
        .unwrap_err();
    assert!(matches!(err, GlazeError::UnknownLayer(layer) if layer == "screens"));
}

#[test]
fn test_non_directive_lines_pass_through() {
    let config = GenerationConfig::for_markup("", ThemeConfiguration::new());
    let baseline = format!("/* preview */\n{BASELINE_STYLESHEET}");
    let css = UtilityEngine::new().process(&baseline, &config).unwrap();
    assert!(css.starts_with("/* preview */\n"));
}

#[test]
fn test_candidates_split_markup() {
    let found = candidates([r#"<button class="bg-primary-50 md:p-4">X</button>"#]);
    assert!(found.contains("bg-primary-50"));
    assert!(found.contains("md:p-4"));
    assert!(found.contains("button"));
    assert!(!found.contains("X"));
}

#[test]
fn test_engine_kind_parse() {
    assert_eq!("builtin".parse::<EngineKind>().unwrap(), EngineKind::Builtin);
    assert_eq!("Tailwind".parse::<EngineKind>().unwrap(), EngineKind::Tailwind);
    assert!("postcss".parse::<EngineKind>().is_err());
    assert_eq!(EngineKind::default().to_string(), "builtin");
}
