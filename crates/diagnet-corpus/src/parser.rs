//! Parse and render single corpus lines.

use diagnet_core::constants::CORPUS_MARKER;
use diagnet_core::FactBundle;

/// Parse one corpus line.
///
/// Splits on the first marker, strips every period, splits effects on
/// commas, and trims. Returns `None` when the marker is missing or either
/// side ends up empty.
pub fn parse_line(line: &str) -> Option<FactBundle> {
    let (cause, effects) = line.trim().split_once(CORPUS_MARKER)?;
    let cause = cause.replace('.', "").trim().to_string();
    let effects: Vec<String> = effects
        .replace('.', "")
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(str::to_string)
        .collect();
    if cause.is_empty() || effects.is_empty() {
        return None;
    }
    Some(FactBundle::new(cause, effects))
}

/// Render a bundle as a corpus line, without the trailing newline.
pub fn render_line(bundle: &FactBundle) -> String {
    format!(
        "{}{}{}.",
        bundle.cause,
        CORPUS_MARKER,
        bundle.effects.join(", ")
    )
}
