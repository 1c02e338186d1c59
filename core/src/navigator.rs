use crate::store::ResultStore;

/// Keys the dropdown reacts to. Text editing keys map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

/// What a key press asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    None,
    /// Move the highlight; `None` clears it.
    Highlight(Option<usize>),
    /// Commit the candidate at this index.
    Commit(usize),
    /// Close the dropdown.
    Dismiss,
}

/// Maps key presses to dropdown actions. Stateless; never mutates the store.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyboardNavigator;

impl KeyboardNavigator {
    pub fn navigate(key: NavKey, store: &ResultStore, loading: bool) -> NavAction {
        if key == NavKey::Escape {
            return NavAction::Dismiss;
        }

        // Arrows and Enter only act on a visible, settled list.
        if loading || !store.is_open() || store.is_empty() {
            return NavAction::None;
        }

        let current = store.highlighted_index();
        let last = store.len() - 1;

        match key {
            NavKey::ArrowDown => {
                let next = current.map_or(0, |i| (i + 1).min(last));
                if current == Some(next) {
                    NavAction::None
                } else {
                    NavAction::Highlight(Some(next))
                }
            }
            NavKey::ArrowUp => match current {
                None => NavAction::None,
                Some(0) => NavAction::Highlight(None),
                Some(i) => NavAction::Highlight(Some(i - 1)),
            },
            NavKey::Enter => match current {
                Some(i) if i <= last => NavAction::Commit(i),
                _ => NavAction::None,
            },
            NavKey::Escape | NavKey::Other => NavAction::None,
        }
    }
}

#[cfg(test)]
mod tests;
