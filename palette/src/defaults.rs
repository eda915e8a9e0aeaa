use glaze::{ThemeConfiguration, ThemeValue};

/// Starting configuration for the editor.
pub fn default_theme() -> ThemeConfiguration {
    ThemeConfiguration::new()
        .with_entry(
            "colors",
            "primary",
            ThemeValue::scale([
                ("50", "#243d48"),
                ("100", "#2c4a58"),
                ("200", "#355a6b"),
                ("300", "#426f84"),
                ("400", "#55879e"),
                ("500", "#6e9fb5"),
                ("600", "#8db6c8"),
                ("700", "#aecbd9"),
                ("800", "#cfe0e9"),
                ("900", "#edf4f7"),
            ]),
        )
        .with_entry("fontSize", "sm", "0.875rem")
        .with_entry("fontSize", "base", "1rem")
        .with_entry("fontSize", "lg", "1.125rem")
        .with_entry("fontSize", "xl", "1.25rem")
        .with_entry("fontSize", "2xl", "1.5rem")
        .with_entry("fontWeight", "normal", "400")
        .with_entry("fontWeight", "medium", "500")
        .with_entry("fontWeight", "semibold", "600")
        .with_entry("fontWeight", "bold", "700")
}

pub const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <meta charset="utf-8">
        <title>Palette preview</title>
    </head>
    <body>
        <main class="container p-4">
            <h1 class="text-2xl font-bold text-primary-50">Palette</h1>
            <p class="text-base font-normal text-primary-300 mt-2">Edit the theme and watch this page follow.</p>
            <div class="gap-4 mt-4">
                <button class="bg-primary-50 text-white font-semibold px-4 py-2 rounded">Primary</button>
                <button class="bg-primary-200 hover:bg-primary-300 text-sm font-medium px-4 py-2 rounded">Secondary</button>
                <span class="text-lg md:text-xl text-primary-500">Accent</span>
            </div>
        </main>
    </body>
</html>
"#;
