use crate::theme::{ThemeConfiguration, ThemeValue};

const SPACING_STEPS: &[&str] = &[
    "0.5", "1", "1.5", "2", "2.5", "3", "3.5", "4", "5", "6", "7", "8", "9", "10", "11", "12",
    "14", "16", "20", "24", "28", "32", "36", "40", "44", "48", "52", "56", "60", "64",
];

/// Theme every request is extended from.
pub fn default_theme() -> ThemeConfiguration {
    let mut theme = ThemeConfiguration::new()
        .with_entry("colors", "transparent", "transparent")
        .with_entry("colors", "current", "currentColor")
        .with_entry("colors", "black", "#000000")
        .with_entry("colors", "white", "#ffffff")
        .with_entry(
            "colors",
            "gray",
            ThemeValue::scale([
                ("50", "#f9fafb"),
                ("100", "#f3f4f6"),
                ("200", "#e5e7eb"),
                ("300", "#d1d5db"),
                ("400", "#9ca3af"),
                ("500", "#6b7280"),
                ("600", "#4b5563"),
                ("700", "#374151"),
                ("800", "#1f2937"),
                ("900", "#111827"),
            ]),
        )
        .with_entry(
            "colors",
            "red",
            ThemeValue::scale([
                ("100", "#fee2e2"),
                ("500", "#ef4444"),
                ("700", "#b91c1c"),
            ]),
        )
        .with_entry(
            "colors",
            "green",
            ThemeValue::scale([
                ("100", "#dcfce7"),
                ("500", "#22c55e"),
                ("700", "#15803d"),
            ]),
        )
        .with_entry(
            "colors",
            "blue",
            ThemeValue::scale([
                ("100", "#dbeafe"),
                ("500", "#3b82f6"),
                ("700", "#1d4ed8"),
            ]),
        )
        .with_entry("fontSize", "xs", "0.75rem")
        .with_entry("fontSize", "sm", "0.875rem")
        .with_entry("fontSize", "base", "1rem")
        .with_entry("fontSize", "lg", "1.125rem")
        .with_entry("fontSize", "xl", "1.25rem")
        .with_entry("fontSize", "2xl", "1.5rem")
        .with_entry("fontSize", "3xl", "1.875rem")
        .with_entry("fontSize", "4xl", "2.25rem")
        .with_entry("fontWeight", "thin", "100")
        .with_entry("fontWeight", "extralight", "200")
        .with_entry("fontWeight", "light", "300")
        .with_entry("fontWeight", "normal", "400")
        .with_entry("fontWeight", "medium", "500")
        .with_entry("fontWeight", "semibold", "600")
        .with_entry("fontWeight", "bold", "700")
        .with_entry("fontWeight", "extrabold", "800")
        .with_entry("fontWeight", "black", "900")
        .with_entry("borderRadius", "none", "0px")
        .with_entry("borderRadius", "sm", "0.125rem")
        .with_entry("borderRadius", "DEFAULT", "0.25rem")
        .with_entry("borderRadius", "md", "0.375rem")
        .with_entry("borderRadius", "lg", "0.5rem")
        .with_entry("borderRadius", "xl", "0.75rem")
        .with_entry("borderRadius", "full", "9999px")
        .with_entry("screens", "sm", "640px")
        .with_entry("screens", "md", "768px")
        .with_entry("screens", "lg", "1024px")
        .with_entry("screens", "xl", "1280px")
        .with_entry("spacing", "0", "0px")
        .with_entry("spacing", "px", "1px");

    for step in SPACING_STEPS {
        // Steps are quarter-rem units.
        let rem = step.parse::<f64>().unwrap_or_default() * 0.25;
        theme = theme.with_entry("spacing", step, format!("{rem}rem"));
    }

    theme
}
