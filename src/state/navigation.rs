use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Anchored page sections the menu and the CTAs can jump to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Features,
    Success,
    Flow,
    Faq,
    Register,
}

/// Menu entries, in display order. Register is reached through the CTAs
/// rather than the menu links.
pub const NAV_SECTIONS: [Section; 4] = [
    Section::Features,
    Section::Success,
    Section::Flow,
    Section::Faq,
];

const ALL_SECTIONS: [Section; 5] = [
    Section::Features,
    Section::Success,
    Section::Flow,
    Section::Faq,
    Section::Register,
];

impl Section {
    pub fn id(self) -> &'static str {
        match self {
            Section::Features => "features",
            Section::Success => "success",
            Section::Flow => "flow",
            Section::Faq => "faq",
            Section::Register => "registration-form",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Features => "What We Offer",
            Section::Success => "Success Stories",
            Section::Flow => "How It Works",
            Section::Faq => "FAQ",
            Section::Register => "Free Assessment",
        }
    }

    pub fn resolve(id: &str) -> Option<Section> {
        ALL_SECTIONS.into_iter().find(|section| section.id() == id)
    }

    /// Resolves an entry-URL fragment (`#faq`, with or without the hash) so
    /// deep links land on their section. Unknown fragments resolve to
    /// nothing rather than an error.
    pub fn from_fragment(fragment: &str) -> Option<Section> {
        Section::resolve(fragment.trim_start_matches('#'))
    }
}

/// Smooth-scrolls the viewport to a section anchor.
pub fn scroll_to(section: Section) {
    scroll_to_id(section.id(), ScrollLogicalPosition::Start);
}

/// Re-centers the registration form, used after it grows a step so the newly
/// revealed fields stay on screen.
pub fn scroll_to_registration_centered() {
    scroll_to_id(Section::Register.id(), ScrollLogicalPosition::Center);
}

// A missing document or an unknown anchor leaves the viewport alone; bad
// navigation is never an error.
fn scroll_to_id(id: &str, block: ScrollLogicalPosition) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    if let Some(element) = document.get_element_by_id(id) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(block);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_anchors() {
        assert_eq!(Section::resolve("features"), Some(Section::Features));
        assert_eq!(Section::resolve("success"), Some(Section::Success));
        assert_eq!(Section::resolve("flow"), Some(Section::Flow));
        assert_eq!(Section::resolve("faq"), Some(Section::Faq));
        assert_eq!(Section::resolve("registration-form"), Some(Section::Register));
    }

    #[test]
    fn entry_fragments_resolve_to_their_section() {
        assert_eq!(Section::from_fragment("#faq"), Some(Section::Faq));
        assert_eq!(Section::from_fragment("faq"), Some(Section::Faq));
        assert_eq!(
            Section::from_fragment("#registration-form"),
            Some(Section::Register)
        );
    }

    #[test]
    fn unknown_entry_fragments_resolve_to_nothing() {
        assert_eq!(Section::from_fragment("#pricing"), None);
        assert_eq!(Section::from_fragment("#"), None);
        assert_eq!(Section::from_fragment(""), None);
    }

    #[test]
    fn unknown_anchor_resolves_to_nothing() {
        assert_eq!(Section::resolve("pricing"), None);
        assert_eq!(Section::resolve(""), None);
    }

    #[test]
    fn anchors_are_distinct() {
        for (i, a) in ALL_SECTIONS.iter().enumerate() {
            for b in &ALL_SECTIONS[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }

    #[test]
    fn menu_sections_have_labels() {
        for section in NAV_SECTIONS {
            assert!(!section.label().is_empty());
        }
    }
}
