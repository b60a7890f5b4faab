//! Motion markup generation
//!
//! Serializes the typed animation core into the document: the fade-up
//! keyframes, per-sibling stagger delays, hover/press transitions, the
//! reduced-motion override, and the one-shot visibility observer snippet.
//! Every constant in the emitted CSS/JS comes from `folio_motion`, so the
//! page's observable behavior cannot drift from the tested values.

use folio_motion::{
    hover_lift, press_scale, Easing, MotionPrefs, RevealTrigger, StaggerSchedule, Variant,
};

use crate::element::Element;

/// CSS timing-function text for an easing curve
pub fn css_timing(easing: Easing) -> String {
    match easing {
        Easing::Linear => "linear".into(),
        Easing::EaseOut => "ease-out".into(),
        Easing::CubicBezier(x1, y1, x2, y2) => {
            format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
        }
    }
}

/// Attach reveal metadata for a visibility-triggered section
pub fn visibility_reveal(element: Element, threshold: f32) -> Element {
    element
        .attr("data-reveal", "view")
        .attr("data-threshold", format!("{threshold}"))
}

/// Attach reveal metadata for the mount-triggered header
pub fn mount_reveal(element: Element) -> Element {
    element.attr("data-reveal", "mount")
}

/// The animation stylesheet for a given motion preference
///
/// `max_group_size` is the largest stagger group on the page; nth-child
/// delay rules are emitted up to that index.
pub fn stylesheet(prefs: MotionPrefs, max_group_size: usize) -> String {
    let variant: Variant = folio_motion::fade_up(prefs);
    let schedule = StaggerSchedule::default();
    let lift = hover_lift(prefs);
    let press = press_scale();

    let mut css = String::new();

    // Hidden-state targets apply until the section's edge fires
    css.push_str(&format!(
        "[data-reveal] > * {{ opacity: {}; transform: translateY({}px); }}\n",
        variant.hidden.opacity, variant.hidden.translate_y
    ));
    css.push_str(&format!(
        "@keyframes fade-up {{ from {{ opacity: {}; transform: translateY({}px); }} \
         to {{ opacity: {}; transform: translateY({}px); }} }}\n",
        variant.hidden.opacity,
        variant.hidden.translate_y,
        variant.shown.opacity,
        variant.shown.translate_y
    ));
    css.push_str(&format!(
        "[data-reveal].is-shown > * {{ animation: fade-up {}ms {} both; }}\n",
        variant.duration_ms,
        css_timing(variant.easing)
    ));

    // Per-sibling stagger delays
    for index in 0..max_group_size {
        css.push_str(&format!(
            "[data-reveal].is-shown > *:nth-child({}) {{ animation-delay: {}ms; }}\n",
            index + 1,
            schedule.delay_for_index(index)
        ));
    }

    // Pointer micro-interactions
    if lift.is_identity() {
        // Reduced motion at generation time: no lift, press still settles
        // to identity so nothing moves
        css.push_str(".lift:hover, .lift:active { transform: none; }\n");
    } else {
        css.push_str(&format!(
            ".lift {{ transition: transform {}ms ease-out; }}\n",
            lift.duration_ms
        ));
        css.push_str(&format!(
            ".lift:hover {{ transform: translateY({}px); }}\n",
            lift.translate_y
        ));
        css.push_str(&format!(
            ".lift:active {{ transform: translateY({}px) scale({}); }}\n",
            lift.translate_y, press.scale
        ));
    }

    // Client-side preference wins even over a full-motion build
    css.push_str(
        "@media (prefers-reduced-motion: reduce) {\n\
         [data-reveal] > * { transform: none; }\n\
         @keyframes fade-up { from { opacity: 0; transform: none; } \
         to { opacity: 1; transform: none; } }\n\
         .lift:hover, .lift:active { transform: none; }\n\
         }\n",
    );

    css
}

/// The one-shot visibility observer snippet
///
/// Mount-triggered elements are shown as soon as the document loads; each
/// visibility-triggered element gets an IntersectionObserver with its own
/// threshold and is unobserved after its single firing.
pub fn observer_script() -> String {
    let default_threshold = RevealTrigger::DEFAULT_THRESHOLD;
    format!(
        "document.addEventListener('DOMContentLoaded', function () {{\n\
         document.querySelectorAll('[data-reveal=\"mount\"]').forEach(function (el) {{\n\
         el.classList.add('is-shown');\n\
         }});\n\
         document.querySelectorAll('[data-reveal=\"view\"]').forEach(function (el) {{\n\
         var threshold = parseFloat(el.dataset.threshold) || {default_threshold};\n\
         var observer = new IntersectionObserver(function (entries) {{\n\
         entries.forEach(function (entry) {{\n\
         if (entry.intersectionRatio >= threshold) {{\n\
         el.classList.add('is-shown');\n\
         observer.unobserve(el);\n\
         }}\n\
         }});\n\
         }}, {{ threshold: threshold }});\n\
         observer.observe(el);\n\
         }});\n\
         }});\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::el;

    #[test]
    fn test_css_timing_settle() {
        assert_eq!(
            css_timing(Easing::settle()),
            "cubic-bezier(0.22, 1, 0.36, 1)"
        );
    }

    #[test]
    fn test_stylesheet_carries_variant_constants() {
        let css = stylesheet(MotionPrefs::full(), 5);
        assert!(css.contains("translateY(14px)"));
        assert!(css.contains("fade-up 500ms cubic-bezier(0.22, 1, 0.36, 1)"));
        assert!(css.contains("animation-delay: 20ms"));
        assert!(css.contains("animation-delay: 340ms"));
        assert!(!css.contains("animation-delay: 420ms"));
    }

    #[test]
    fn test_stylesheet_reduced_motion_has_no_offsets() {
        let css = stylesheet(MotionPrefs::reduced(), 5);
        assert!(css.contains("translateY(0px)"));
        assert!(!css.contains("translateY(14px)"));
        assert!(!css.contains("translateY(-2px)"));
    }

    #[test]
    fn test_stylesheet_hover_lift() {
        let css = stylesheet(MotionPrefs::full(), 3);
        assert!(css.contains("transition: transform 150ms"));
        assert!(css.contains(".lift:hover { transform: translateY(-2px); }"));
        assert!(css.contains("scale(0.98)"));
    }

    #[test]
    fn test_reveal_attrs() {
        let html = visibility_reveal(el("section"), 0.15).render();
        assert!(html.contains("data-reveal=\"view\""));
        assert!(html.contains("data-threshold=\"0.15\""));

        let html = mount_reveal(el("header")).render();
        assert!(html.contains("data-reveal=\"mount\""));
    }

    #[test]
    fn test_observer_script_is_one_shot() {
        let js = observer_script();
        assert!(js.contains("observer.unobserve(el)"));
        assert!(js.contains("intersectionRatio >= threshold"));
    }
}
