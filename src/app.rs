use ratatui::widgets::ListState;

use socialfeed::{FeedRenderer, PostCard};

/// Terminal preview state: the loaded cards plus selection.
pub struct App {
    /// Cards in upstream order; empty until the load finishes.
    pub cards: Vec<PostCard>,
    /// List selection state for scrolling.
    pub list_state: ListState,
    /// Whether the user has requested to quit.
    pub quit: bool,
    /// Status bar message.
    pub status: String,
    /// Profile being previewed, shown in the list title.
    pub handle: String,
}

impl App {
    pub fn new(handle: impl Into<String>) -> Self {
        let handle = handle.into();
        Self {
            cards: Vec::new(),
            list_state: ListState::default(),
            quit: false,
            status: format!("Loading @{handle}…"),
            handle,
        }
    }

    pub fn selected_card(&self) -> Option<&PostCard> {
        self.list_state.selected().and_then(|i| self.cards.get(i))
    }

    // -- navigation ----------------------------------------------------------

    pub fn select_next(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1).min(self.cards.len() - 1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.cards.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_first(&mut self) {
        if !self.cards.is_empty() {
            self.list_state.select(Some(0));
        }
    }

    pub fn select_last(&mut self) {
        if !self.cards.is_empty() {
            self.list_state.select(Some(self.cards.len() - 1));
        }
    }
}

impl App {
    /// Put the selected post's link in the status bar so it can be copied.
    pub fn show_selected_link(&mut self) {
        let Some(card) = self.selected_card() else {
            return;
        };
        let link = card.permalink.as_deref().unwrap_or(&card.media_url);
        self.status = format!("Link: {link}");
    }
}

impl FeedRenderer for App {
    fn render(&mut self, cards: Vec<PostCard>) {
        let source = cards.first().map(|c| c.source_label).unwrap_or("nowhere");
        self.status = format!("Loaded {} posts from {source}", cards.len());
        self.cards = cards;
        self.list_state.select(None);
        self.select_first();
    }
}
