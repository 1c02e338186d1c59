use super::*;
use crate::types::{Candidate, CandidateId};

mod common {
    use super::*;

    pub(super) fn open_store(count: usize) -> ResultStore {
        let mut store = ResultStore::default();
        let results = (0..count)
            .map(|i| {
                let id = CandidateId::try_from(i.to_string().as_str()).unwrap();
                Candidate::new(id, format!("item {i}"), "")
            })
            .collect();
        store.replace(results);
        store
    }

    pub(super) fn highlighted(count: usize, index: usize) -> ResultStore {
        let mut store = open_store(count);
        assert!(store.set_highlight(Some(index)), "index within fixture");
        store
    }
}

mod arrow_down {
    use super::common::*;
    use super::*;

    #[test]
    fn test_arrow_down_from_none_highlights_first() {
        let store = open_store(3);
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::ArrowDown, &store, false),
            NavAction::Highlight(Some(0))
        );
    }

    #[test]
    fn test_arrow_down_advances() {
        let store = highlighted(3, 0);
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::ArrowDown, &store, false),
            NavAction::Highlight(Some(1))
        );
    }

    #[test]
    fn test_arrow_down_at_last_stays() {
        let store = highlighted(3, 2);
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::ArrowDown, &store, false),
            NavAction::None
        );
    }

    #[test]
    fn test_arrow_down_on_closed_dropdown_is_noop() {
        let mut store = open_store(3);
        store.close();
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::ArrowDown, &store, false),
            NavAction::None
        );
    }

    #[test]
    fn test_arrow_down_on_empty_results_is_noop() {
        let mut store = ResultStore::default();
        store.open();
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::ArrowDown, &store, false),
            NavAction::None
        );
    }

    #[test]
    fn test_arrow_down_while_loading_is_noop() {
        let store = open_store(3);
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::ArrowDown, &store, true),
            NavAction::None
        );
    }
}

mod arrow_up {
    use super::common::*;
    use super::*;

    #[test]
    fn test_arrow_up_from_none_stays_none() {
        let store = open_store(3);
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::ArrowUp, &store, false),
            NavAction::None
        );
    }

    #[test]
    fn test_arrow_up_from_first_clears_highlight() {
        let store = highlighted(3, 0);
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::ArrowUp, &store, false),
            NavAction::Highlight(None)
        );
    }

    #[test]
    fn test_arrow_up_moves_back() {
        let store = highlighted(3, 2);
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::ArrowUp, &store, false),
            NavAction::Highlight(Some(1))
        );
    }
}

mod enter {
    use super::common::*;
    use super::*;

    #[test]
    fn test_enter_commits_highlighted() {
        let store = highlighted(3, 1);
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::Enter, &store, false),
            NavAction::Commit(1)
        );
    }

    #[test]
    fn test_enter_without_highlight_is_noop() {
        let store = open_store(3);
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::Enter, &store, false),
            NavAction::None
        );
    }

    #[test]
    fn test_enter_while_loading_is_noop() {
        let store = highlighted(3, 1);
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::Enter, &store, true),
            NavAction::None
        );
    }
}

mod other_keys {
    use super::common::*;
    use super::*;

    #[test]
    fn test_escape_always_dismisses() {
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::Escape, &ResultStore::default(), true),
            NavAction::Dismiss
        );
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::Escape, &highlighted(2, 1), false),
            NavAction::Dismiss
        );
    }

    #[test]
    fn test_other_key_is_noop() {
        assert_eq!(
            KeyboardNavigator::navigate(NavKey::Other, &highlighted(2, 1), false),
            NavAction::None
        );
    }
}
