//! Language state for the bilingual page.
//!
//! The page knows exactly two languages. Text direction is derived from
//! the language, never stored, and every document-level side effect of a
//! language change goes through [`apply_to_document`] so there is a
//! single call site mutating shared document state.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Language {
    En,
    Ar,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    pub fn dir(self) -> &'static str {
        match self {
            Language::En => "ltr",
            Language::Ar => "rtl",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Language::Ar)
    }

    pub fn toggled(self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    pub fn document_title(self) -> &'static str {
        match self {
            Language::En => "Radar - Watch, Earn, Reward",
            Language::Ar => "رادار - شاهد، اكسب، كافئ",
        }
    }

    pub fn brand_title(self) -> &'static str {
        match self {
            Language::En => "Radar",
            Language::Ar => "رادار",
        }
    }
}

/// Push the current language onto the document: `<html dir>`, `<html lang>`
/// and the tab title. Safe to call repeatedly with the same language.
pub fn apply_to_document(language: Language) {
    if let Some(window) = web_sys::window() {
        if let Some(document) = window.document() {
            if let Some(root) = document.document_element() {
                let _ = root.set_attribute("dir", language.dir());
                let _ = root.set_attribute("lang", language.code());
            }
            document.set_title(language.document_title());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_is_a_function_of_language() {
        assert_eq!(Language::En.dir(), "ltr");
        assert_eq!(Language::Ar.dir(), "rtl");
        assert!(Language::Ar.is_rtl());
        assert!(!Language::En.is_rtl());
    }

    #[test]
    fn toggle_round_trips() {
        assert_eq!(Language::En.toggled(), Language::Ar);
        assert_eq!(Language::Ar.toggled(), Language::En);
        assert_eq!(Language::En.toggled().toggled(), Language::En);
    }

    #[test]
    fn document_titles_differ_per_language() {
        assert_ne!(
            Language::En.document_title(),
            Language::Ar.document_title()
        );
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::Ar.code(), "ar");
    }
}
