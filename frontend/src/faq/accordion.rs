/// Identifies one question on the page: its category and its position there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemKey {
    pub category: usize,
    pub entry: usize,
}

impl ItemKey {
    pub fn new(category: usize, entry: usize) -> Self {
        Self { category, entry }
    }

    pub fn question_id(&self) -> String {
        format!("faq-q-{}-{}", self.category, self.entry)
    }
}

/// Single-open accordion shared by every category on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
    open: Option<ItemKey>,
}

impl Accordion {
    pub fn is_open(&self, key: ItemKey) -> bool {
        self.open == Some(key)
    }

    pub fn open_item(&self) -> Option<ItemKey> {
        self.open
    }

    /// Collapses `key` if it is open, otherwise expands it and collapses
    /// whatever was open. Returns true when `key` ends up expanded.
    pub fn toggle(&mut self, key: ItemKey) -> bool {
        if self.is_open(key) {
            self.open = None;
            false
        } else {
            self.open = Some(key);
            true
        }
    }
}

/// Which category tab is active. Exactly one panel is shown at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryFilter {
    active: String,
}

impl CategoryFilter {
    pub fn new(active: impl Into<String>) -> Self {
        Self { active: active.into() }
    }

    pub fn select(&mut self, category: &str) {
        self.active = category.to_string();
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn is_active(&self, category: &str) -> bool {
        self.active == category
    }

    pub fn shows_panel(&self, panel: &str) -> bool {
        panel == panel_id(&self.active)
    }
}

pub fn panel_id(category: &str) -> String {
    format!("{}-faq", category)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    mod accordion {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn starts_collapsed() {
            let accordion = Accordion::default();
            assert_eq!(accordion.open_item(), None);
        }

        #[test]
        fn expanding_b_collapses_a() {
            let a = ItemKey::new(0, 0);
            let b = ItemKey::new(0, 1);
            let mut accordion = Accordion::default();
            assert!(accordion.toggle(a));
            assert!(accordion.toggle(b));
            assert!(!accordion.is_open(a));
            assert!(accordion.is_open(b));
        }

        #[test]
        fn clicking_open_item_collapses_it() {
            let a = ItemKey::new(1, 2);
            let mut accordion = Accordion::default();
            accordion.toggle(a);
            assert!(!accordion.toggle(a));
            assert_eq!(accordion.open_item(), None);
        }

        #[test]
        fn one_item_open_across_categories() {
            let mut accordion = Accordion::default();
            accordion.toggle(ItemKey::new(0, 3));
            accordion.toggle(ItemKey::new(2, 0));
            assert_eq!(accordion.open_item(), Some(ItemKey::new(2, 0)));
        }

        #[test]
        fn question_ids_are_unique_per_key() {
            assert_eq!(ItemKey::new(1, 4).question_id(), "faq-q-1-4");
            assert_ne!(ItemKey::new(1, 4).question_id(), ItemKey::new(4, 1).question_id());
        }
    }

    mod categories {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn admission_shows_only_its_panel() {
            let mut filter = CategoryFilter::new("general");
            filter.select("admission");
            let panels = ["general-faq", "admission-faq", "training-faq", "evaluation-faq"];
            let shown: Vec<_> = panels.iter().filter(|p| filter.shows_panel(p)).collect();
            assert_eq!(shown, vec![&"admission-faq"]);
        }

        #[test]
        fn selecting_moves_the_active_tab() {
            let mut filter = CategoryFilter::new("general");
            filter.select("training");
            assert!(filter.is_active("training"));
            assert!(!filter.is_active("general"));
            assert_eq!(filter.active(), "training");
        }

        #[test]
        fn panel_id_suffix() {
            assert_eq!(panel_id("admission"), "admission-faq");
        }
    }
}
