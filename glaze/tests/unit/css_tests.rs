use glaze::css::{CssRule, escape_class};

#[test]
fn test_render_rule() {
    let rule = CssRule::new(".bg-primary-50").property("background-color", "#243d48");
    assert_eq!(
        rule.render(),
        ".bg-primary-50 {\n    background-color: #243d48;\n}\n"
    );
}

#[test]
fn test_render_nested_rule() {
    let rule = CssRule::new("@media (min-width: 768px)")
        .child(CssRule::new(".md\\:p-4").property("padding", "1rem"));
    assert_eq!(
        rule.render(),
        "@media (min-width: 768px) {\n    .md\\:p-4 {\n        padding: 1rem;\n    }\n}\n"
    );
}

#[test]
fn test_escape_class() {
    assert_eq!(escape_class("bg-primary-50"), "bg-primary-50");
    assert_eq!(escape_class("p-0.5"), "p-0\\.5");
    assert_eq!(escape_class("hover:text-lg"), "hover\\:text-lg");
    assert_eq!(escape_class("w-1/2"), "w-1\\/2");
}
