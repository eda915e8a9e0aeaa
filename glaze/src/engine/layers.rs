use super::utilities::screens;
use crate::css::CssRule;
use crate::theme::ThemeConfiguration;
use std::collections::BTreeSet;

const SANS_STACK: &str = "ui-sans-serif, system-ui, sans-serif";

pub(super) fn base(theme: &ThemeConfiguration) -> Vec<CssRule> {
    let border_color = theme
        .flattened("colors")
        .into_iter()
        .find(|(name, _)| name == "gray-200")
        .map(|(_, value)| value)
        .unwrap_or_else(|| "currentColor".to_string());

    vec![
        CssRule::new("*,\n::before,\n::after")
            .property("box-sizing", "border-box")
            .property("border-width", "0")
            .property("border-style", "solid")
            .property("border-color", &border_color),
        CssRule::new("html")
            .property("line-height", "1.5")
            .property("-webkit-text-size-adjust", "100%")
            .property("tab-size", "4")
            .property("font-family", SANS_STACK),
        CssRule::new("body")
            .property("margin", "0")
            .property("line-height", "inherit"),
        CssRule::new("h1,\nh2,\nh3,\nh4,\nh5,\nh6")
            .property("font-size", "inherit")
            .property("font-weight", "inherit"),
        CssRule::new("a")
            .property("color", "inherit")
            .property("text-decoration", "inherit"),
        CssRule::new("button,\ninput,\nselect,\ntextarea")
            .property("font-family", "inherit")
            .property("font-size", "100%")
            .property("font-weight", "inherit")
            .property("color", "inherit")
            .property("margin", "0")
            .property("padding", "0"),
        CssRule::new("button")
            .property("background-color", "transparent")
            .property("cursor", "pointer"),
        CssRule::new("blockquote,\ndl,\ndd,\nh1,\nh2,\nh3,\nh4,\nh5,\nh6,\nhr,\nfigure,\np,\npre")
            .property("margin", "0"),
        CssRule::new("img,\nsvg,\nvideo")
            .property("display", "block")
            .property("max-width", "100%"),
    ]
}

pub(super) fn components(
    theme: &ThemeConfiguration,
    candidates: &BTreeSet<String>,
) -> Vec<CssRule> {
    if !candidates.contains("container") {
        return Vec::new();
    }

    let mut rules = vec![CssRule::new(".container").property("width", "100%")];
    for screen in screens(theme) {
        rules.push(
            CssRule::new(&format!("@media (min-width: {})", screen.min_width))
                .child(CssRule::new(".container").property("max-width", &screen.min_width)),
        );
    }
    rules
}
