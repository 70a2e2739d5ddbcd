//! Dashboard menu — sidebar entries and the content state they drive.

use crate::card::{Card, FEATURED_CARDS};

/// Message shown in place of the cards for entries with no content yet.
pub const PLACEHOLDER_MESSAGE: &str = "Não há nada ainda!";

/// A clickable sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuEntry {
    Home,
    Notifications,
    Interest(Interest),
}

impl MenuEntry {
    /// Entries of the main navigation group, in display order.
    pub const NAVIGATION: [Self; 2] = [Self::Home, Self::Notifications];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Notifications => "Notificações",
            Self::Interest(interest) => interest.label(),
        }
    }
}

/// Entries of the "Meus Interesses" group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interest {
    Colleges,
    Rentals,
    Internships,
}

impl Interest {
    pub const ALL: [Self; 3] = [Self::Colleges, Self::Rentals, Self::Internships];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Colleges => "Faculdades",
            Self::Rentals => "Vagas de Aluguel",
            Self::Internships => "Vagas de Estágio",
        }
    }
}

/// What the dashboard's main panel shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    message: String,
    show_cards: bool,
}

/// Content to render for a given [`DashboardState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardContent<'a> {
    Cards(&'a [Card]),
    Message(&'a str),
    Empty,
}

impl DashboardState {
    /// Apply a menu click.
    ///
    /// `Home` reveals the cards and clears the message; every other entry
    /// hides the cards and shows [`PLACEHOLDER_MESSAGE`].
    pub fn select(&mut self, entry: MenuEntry) {
        if entry == MenuEntry::Home {
            self.show_cards = true;
            self.message.clear();
        } else {
            self.show_cards = false;
            PLACEHOLDER_MESSAGE.clone_into(&mut self.message);
        }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn show_cards(&self) -> bool {
        self.show_cards
    }

    #[must_use]
    pub fn content(&self) -> DashboardContent<'_> {
        if self.show_cards {
            DashboardContent::Cards(&FEATURED_CARDS)
        } else if self.message.is_empty() {
            DashboardContent::Empty
        } else {
            DashboardContent::Message(&self.message)
        }
    }
}
