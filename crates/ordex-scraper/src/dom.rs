//! Small helpers over `scraper` element trees.

use scraper::{ElementRef, Selector};

/// Compiles a selector literal. Selectors in this crate are all
/// compile-time constants, so a parse failure is a programming error.
pub(crate) fn selector(css: &'static str) -> Selector {
    Selector::parse(css).expect("selector literal is valid CSS")
}

/// The element's visible text, whitespace-collapsed at the edges — the
/// closest analog of the DOM `innerText` reads the page scripts relied on.
pub(crate) fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_owned()
}

/// Nearest ancestor element with the given tag name, akin to
/// `Element.closest(tag)`.
pub(crate) fn closest<'a>(el: ElementRef<'a>, tag: &str) -> Option<ElementRef<'a>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| a.value().name() == tag)
}
