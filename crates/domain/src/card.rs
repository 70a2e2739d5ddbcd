//! Card — a static content block on the dashboard.

/// Title and body of a dashboard card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

/// The fixed set of cards revealed by the `Home` menu entry.
pub const FEATURED_CARDS: [Card; 2] = [
    Card {
        title: "Avaliação Institucional",
        body: "Avaliação institucional já está disponível no sigaa.",
    },
    Card {
        title: "FAQ sobre Estágio",
        body: "Perguntas frequentes sobre estágio.",
    },
];
