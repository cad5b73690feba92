//! Autocomplete dropdown state.
//!
//! The cursor is `None` when nothing is selected, which plays the role of
//! index `-1` in the clamping rules:
//!
//! | Key    | Effect                                             |
//! |--------|----------------------------------------------------|
//! | Down   | cursor = min(cursor + 1, len - 1)                  |
//! | Up     | cursor = max(cursor - 1, -1)                       |
//! | Enter  | cursor ≥ 0: term = candidate, dropdown closes      |
//! | Escape | dropdown closes, term unchanged                    |
//!
//! Keys are ignored while the dropdown is closed or has no candidates.

/// Keys the dropdown reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKey {
    Down,
    Up,
    Enter,
    Escape,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionQuery {
    term: String,
    candidates: Vec<String>,
    active_index: Option<usize>,
    open: bool,
}

impl SuggestionQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active_index
    }

    pub fn active_candidate(&self) -> Option<&str> {
        self.active_index
            .and_then(|i| self.candidates.get(i))
            .map(String::as_str)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open and non-empty.
    pub fn is_visible(&self) -> bool {
        self.open && !self.candidates.is_empty()
    }

    /// New input from the search box. The cursor resets; candidates stay
    /// until the next recomputation lands.
    pub fn set_term(&mut self, term: impl Into<String>) {
        self.term = term.into();
        self.active_index = None;
    }

    /// Install freshly computed candidates for the current term.
    pub fn apply_candidates(&mut self, candidates: Vec<String>) {
        self.open = !candidates.is_empty() && !self.term.is_empty();
        self.candidates = candidates;
        if self
            .active_index
            .is_some_and(|i| i >= self.candidates.len())
        {
            self.active_index = None;
        }
    }

    pub fn move_down(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        let last = self.candidates.len() - 1;
        self.active_index = Some(self.active_index.map_or(0, |i| (i + 1).min(last)));
        true
    }

    pub fn move_up(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.active_index = match self.active_index {
            None | Some(0) => None,
            Some(i) => Some(i - 1),
        };
        true
    }

    /// Commit the selected candidate as the term. Returns the new term.
    ///
    /// Without a cursor nothing happens and the dropdown stays open.
    pub fn commit(&mut self) -> Option<String> {
        if !self.is_visible() {
            return None;
        }
        let chosen = self.active_candidate()?.to_string();
        self.term = chosen.clone();
        self.open = false;
        self.active_index = None;
        Some(chosen)
    }

    /// Close the dropdown without touching the term.
    pub fn dismiss(&mut self) -> bool {
        if !self.is_visible() {
            return false;
        }
        self.open = false;
        self.active_index = None;
        true
    }

    /// Empty the search box and close the dropdown.
    pub fn clear(&mut self) {
        self.term.clear();
        self.candidates.clear();
        self.active_index = None;
        self.open = false;
    }

    /// Dispatch a key. Returns whether the dropdown consumed it.
    pub fn handle_key(&mut self, key: SuggestionKey) -> bool {
        match key {
            SuggestionKey::Down => self.move_down(),
            SuggestionKey::Up => self.move_up(),
            SuggestionKey::Enter => {
                if !self.is_visible() {
                    return false;
                }
                self.commit();
                true
            }
            SuggestionKey::Escape => self.dismiss(),
        }
    }
}
