//! Severity and logger panel visibility.

use logpage_types::{ElementIds, LogLevel};

use crate::dom::PageDom;

/// Show/hide decision for every severity class at `threshold`.
///
/// Always covers all four levels, so the result never depends on what was
/// applied before.
pub fn level_plan(threshold: LogLevel) -> [(LogLevel, bool); 4] {
    let all = LogLevel::all();
    std::array::from_fn(|i| (all[i], all[i].is_visible_at(threshold)))
}

/// Apply `threshold` to every log entry on the page.
pub fn apply_level<D: PageDom + ?Sized>(dom: &D, ids: &ElementIds, threshold: LogLevel) {
    for (level, visible) in level_plan(threshold) {
        let class = ids.level_class(level);
        let matched = dom.set_class_visible(&class, visible);
        tracing::trace!(%class, visible, matched, "Applied level visibility");
    }
}

/// Show exactly one logger panel, hiding `previous` if given.
///
/// A missing panel is skipped.
pub fn apply_logger<D: PageDom + ?Sized>(
    dom: &D,
    ids: &ElementIds,
    previous: Option<&str>,
    logger: &str,
) {
    if let Some(previous) = previous {
        let panel = ids.logger_panel(previous);
        if !dom.set_element_visible(&panel, false) {
            tracing::debug!(%panel, "Previous logger panel not found");
        }
    }
    let panel = ids.logger_panel(logger);
    if !dom.set_element_visible(&panel, true) {
        tracing::debug!(%panel, "Logger panel not found");
    }
}
