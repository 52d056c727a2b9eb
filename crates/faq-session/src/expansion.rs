//! Open/closed state of a single FAQ item.
//!
//! Inside a list the owner decides which item is open (accordion). A
//! standalone item manages its own state. [`Expansion`] captures both so the
//! same [`FaqItem`] works in either place.

use faq_core::entities::Faq;
use faq_core::responses::FaqCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expansion {
    /// Open state is owned by a parent; toggling is delegated to it.
    Controlled(bool),
    /// The item flips its own state.
    SelfManaged(bool),
}

impl Expansion {
    #[must_use]
    pub const fn is_open(self) -> bool {
        match self {
            Self::Controlled(open) | Self::SelfManaged(open) => open,
        }
    }
}

impl Default for Expansion {
    fn default() -> Self {
        Self::SelfManaged(false)
    }
}

/// Result of toggling an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Toggle {
    /// The item toggled itself and is now open (`true`) or closed.
    Local(bool),
    /// The owner must toggle the entry with this id.
    Delegated(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub faq: Faq,
    pub expansion: Expansion,
}

impl FaqItem {
    /// A standalone, initially closed item.
    #[must_use]
    pub fn standalone(faq: Faq) -> Self {
        Self {
            faq,
            expansion: Expansion::default(),
        }
    }

    #[must_use]
    pub const fn controlled(faq: Faq, open: bool) -> Self {
        Self {
            faq,
            expansion: Expansion::Controlled(open),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.expansion.is_open()
    }

    pub fn toggle(&mut self) -> Toggle {
        match self.expansion {
            Expansion::Controlled(_) => Toggle::Delegated(self.faq.id.clone()),
            Expansion::SelfManaged(open) => {
                self.expansion = Expansion::SelfManaged(!open);
                Toggle::Local(!open)
            }
        }
    }
}

impl From<FaqItem> for FaqCard {
    fn from(item: FaqItem) -> Self {
        let is_open = item.is_open();
        Self {
            faq: item.faq,
            is_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::faq;

    #[test]
    fn standalone_item_toggles_itself() {
        let mut item = FaqItem::standalone(faq("1", "Question?", &[], 0, 0));
        assert!(!item.is_open());
        assert_eq!(item.toggle(), Toggle::Local(true));
        assert!(item.is_open());
        assert_eq!(item.toggle(), Toggle::Local(false));
    }

    #[test]
    fn controlled_item_delegates_to_owner() {
        let mut item = FaqItem::controlled(faq("7", "Question?", &[], 0, 0), true);
        assert_eq!(item.toggle(), Toggle::Delegated("7".into()));
        assert!(item.is_open(), "controlled state only changes through the owner");
    }

    #[test]
    fn card_carries_open_state() {
        let card = FaqCard::from(FaqItem::controlled(faq("2", "Question?", &[], 0, 0), true));
        assert!(card.is_open);
        assert_eq!(card.faq.id, "2");
    }
}
