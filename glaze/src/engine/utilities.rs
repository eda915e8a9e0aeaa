//! Utility table and candidate resolution for the `utilities` layer.

use crate::css::{CssRule, escape_class};
use crate::theme::ThemeConfiguration;
use std::collections::{BTreeSet, HashMap};

struct Utility {
    prefix: &'static str,
    category: &'static str,
    properties: &'static [&'static str],
}

const fn utility(
    prefix: &'static str,
    category: &'static str,
    properties: &'static [&'static str],
) -> Utility {
    Utility {
        prefix,
        category,
        properties,
    }
}

// Order matters: the first entry whose theme has the key wins, and rules are
// emitted in this order.
const UTILITIES: &[Utility] = &[
    utility("bg", "colors", &["background-color"]),
    utility("text", "fontSize", &["font-size"]),
    utility("text", "colors", &["color"]),
    utility("border", "colors", &["border-color"]),
    utility("font", "fontWeight", &["font-weight"]),
    utility("rounded", "borderRadius", &["border-radius"]),
    utility("p", "spacing", &["padding"]),
    utility("px", "spacing", &["padding-left", "padding-right"]),
    utility("py", "spacing", &["padding-top", "padding-bottom"]),
    utility("pt", "spacing", &["padding-top"]),
    utility("pr", "spacing", &["padding-right"]),
    utility("pb", "spacing", &["padding-bottom"]),
    utility("pl", "spacing", &["padding-left"]),
    utility("m", "spacing", &["margin"]),
    utility("mx", "spacing", &["margin-left", "margin-right"]),
    utility("my", "spacing", &["margin-top", "margin-bottom"]),
    utility("mt", "spacing", &["margin-top"]),
    utility("mr", "spacing", &["margin-right"]),
    utility("mb", "spacing", &["margin-bottom"]),
    utility("ml", "spacing", &["margin-left"]),
    utility("gap", "spacing", &["gap"]),
    utility("w", "spacing", &["width"]),
    utility("h", "spacing", &["height"]),
];

const PSEUDO_VARIANTS: &[&str] = &["hover", "focus", "active"];

pub(crate) struct Screen {
    pub name: String,
    pub min_width: String,
    width: f64,
}

/// Breakpoints from the `screens` category, narrowest first.
pub(crate) fn screens(theme: &ThemeConfiguration) -> Vec<Screen> {
    let mut screens = theme
        .flattened("screens")
        .into_iter()
        .filter_map(|(name, min_width)| {
            let width = min_width
                .trim_end_matches(|c: char| c.is_ascii_alphabetic())
                .parse::<f64>()
                .ok()?;
            Some(Screen {
                name,
                min_width,
                width,
            })
        })
        .collect::<Vec<_>>();
    screens.sort_by(|a, b| a.width.total_cmp(&b.width));
    screens
}

struct Matched {
    screen: Option<usize>,
    pseudo: bool,
    order: usize,
    class: String,
    rule: CssRule,
}

pub fn generate(theme: &ThemeConfiguration, candidates: &BTreeSet<String>) -> Vec<CssRule> {
    let screens = screens(theme);
    let tables: Vec<HashMap<String, String>> = UTILITIES
        .iter()
        .map(|u| theme.flattened(u.category).into_iter().collect())
        .collect();

    let mut matched = candidates
        .iter()
        .filter_map(|candidate| resolve(candidate, &tables, &screens))
        .collect::<Vec<_>>();
    matched.sort_by(|a, b| {
        (a.screen, a.pseudo, a.order, &a.class).cmp(&(b.screen, b.pseudo, b.order, &b.class))
    });

    let (plain, responsive): (Vec<_>, Vec<_>) =
        matched.into_iter().partition(|m| m.screen.is_none());

    let mut rules = plain.into_iter().map(|m| m.rule).collect::<Vec<_>>();
    for (idx, screen) in screens.iter().enumerate() {
        let children = responsive
            .iter()
            .filter(|m| m.screen == Some(idx))
            .map(|m| m.rule.clone())
            .collect::<Vec<_>>();
        if children.is_empty() {
            continue;
        }
        let media = CssRule::new(&format!("@media (min-width: {})", screen.min_width));
        rules.push(children.into_iter().fold(media, CssRule::child));
    }
    rules
}

fn resolve(
    candidate: &str,
    tables: &[HashMap<String, String>],
    screens: &[Screen],
) -> Option<Matched> {
    let mut parts = candidate.split(':').collect::<Vec<_>>();
    let name = parts.pop()?;

    let mut screen = None;
    let mut pseudos = String::new();
    for variant in parts {
        if PSEUDO_VARIANTS.contains(&variant) {
            pseudos.push(':');
            pseudos.push_str(variant);
        } else if let Some(idx) = screens.iter().position(|s| s.name == variant) {
            if screen.replace(idx).is_some() {
                return None;
            }
        } else {
            return None;
        }
    }

    let (order, entry, value) = UTILITIES.iter().enumerate().find_map(|(order, entry)| {
        let key = match name.strip_prefix(entry.prefix)? {
            "" => "",
            rest => rest.strip_prefix('-')?,
        };
        tables[order].get(key).map(|value| (order, entry, value))
    })?;

    let selector = format!(".{}{pseudos}", escape_class(candidate));
    let rule = entry
        .properties
        .iter()
        .fold(CssRule::new(&selector), |rule, property| {
            rule.property(property, value)
        });

    Some(Matched {
        screen,
        pseudo: !pseudos.is_empty(),
        order,
        class: candidate.to_string(),
        rule,
    })
}
