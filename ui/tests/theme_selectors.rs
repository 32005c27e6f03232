#![cfg(test)]
/*!
Theme selector lint for the landing page.

Purpose:
- Ensure that the selectors the Dioxus components emit remain present in
  `ui/assets/theme/landing.css`, which native release builds also inline.
- Fail fast if a refactor drops or renames a class, instead of shipping an
  unstyled section.

If you intentionally rename a class:
    1. Update the component markup.
    2. Adjust REQUIRED_SELECTORS accordingly.

A substring presence check is enough as an early warning.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/theme/landing.css"
));

/// Selectors / tokens the components rely on.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global
    ":root",
    "body {",
    ".landing {",
    "--gradient-brand",
    // Buttons
    ".button {",
    ".button--primary",
    ".button--outline",
    ".button--inverse",
    // Header & toggle
    ".site-header {",
    ".site-header__links",
    ".locale-toggle__option",
    ".locale-toggle__option--active",
    // Sections
    ".hero__highlight",
    ".hero__actions",
    ".stats__tile",
    ".feature-grid--6",
    ".feature-card__icon",
    ".steps__item",
    ".testimonial__stars",
    ".signup__form",
    ".signup__input",
    ".site-footer__columns",
    ".site-footer__legal",
    // Responsive block
    "@media (max-width: 720px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(**sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in landing theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 4_000,
        "Landing theme appears unexpectedly small ({non_ws_len} non-whitespace chars) – \
         did the file get truncated or path change?"
    );
}
