pub mod config;
pub mod css;
pub mod defaults;
pub mod engine;
pub mod error;
pub mod theme;

pub use config::{GenerationConfig, RenderRequest};
pub use engine::{EngineKind, StylesheetEngine, TailwindCli, UtilityEngine, build_engine};
pub use error::{GlazeError, Result};
pub use theme::{ThemeConfiguration, ThemePath, ThemeValue};

/// Fixed input stylesheet: base reset, component layer, utility layer.
pub const BASELINE_STYLESHEET: &str =
    "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// Generates CSS for `markup`, with `fragment` merged into the theme's extend layer.
pub fn render_stylesheet(
    engine: &dyn StylesheetEngine,
    markup: &str,
    fragment: &ThemeConfiguration,
) -> Result<String> {
    let config = GenerationConfig::for_markup(markup, fragment.clone());
    engine.process(BASELINE_STYLESHEET, &config)
}
