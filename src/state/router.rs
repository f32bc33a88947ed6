//! Pure navigation logic. Components ask for a transition and then apply the
//! returned effects; nothing in here touches the DOM.

use crate::state::page::Page;

/// Why a navigation was requested. Link clicks and the initial-load hash take
/// the same path (including the history push); back/forward must not push
/// again or the history would loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Request {
    Activate(Page),
    PopState(Page),
}

/// UI side effects the caller applies after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavEffect {
    ShowPage(Page),
    CloseMenu,
    ScrollToTop,
    PushHistory(Page),
}

/// Decides the next page and the side effects to apply. Activating the page
/// already on screen only closes the mobile menu.
pub fn navigate(current: Page, request: Request) -> (Page, Vec<NavEffect>) {
    match request {
        Request::Activate(target) if target == current => (current, vec![NavEffect::CloseMenu]),
        Request::Activate(target) => (
            target,
            vec![
                NavEffect::ShowPage(target),
                NavEffect::CloseMenu,
                NavEffect::ScrollToTop,
                NavEffect::PushHistory(target),
            ],
        ),
        Request::PopState(target) => (
            target,
            vec![NavEffect::ShowPage(target), NavEffect::CloseMenu],
        ),
    }
}

/// Resolves the hash seen on a popstate event. An empty hash means home;
/// anything unrecognized is ignored and the view stays put.
pub fn pop_target(hash: &str) -> Option<Page> {
    let slug = hash.strip_prefix('#').unwrap_or(hash);
    if slug.is_empty() {
        Some(Page::Home)
    } else {
        Page::from_slug(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activating_the_current_page_only_closes_the_menu() {
        let (next, effects) = navigate(Page::Home, Request::Activate(Page::Home));
        assert_eq!(next, Page::Home);
        assert_eq!(effects, vec![NavEffect::CloseMenu]);
    }

    #[test]
    fn activating_another_page_pushes_history_and_scrolls() {
        let (next, effects) = navigate(Page::Home, Request::Activate(Page::About));
        assert_eq!(next, Page::About);
        assert_eq!(
            effects,
            vec![
                NavEffect::ShowPage(Page::About),
                NavEffect::CloseMenu,
                NavEffect::ScrollToTop,
                NavEffect::PushHistory(Page::About),
            ]
        );
    }

    #[test]
    fn popstate_never_pushes_history() {
        let (next, effects) = navigate(Page::About, Request::PopState(Page::Contact));
        assert_eq!(next, Page::Contact);
        assert!(!effects
            .iter()
            .any(|e| matches!(e, NavEffect::PushHistory(_))));
        assert!(effects.contains(&NavEffect::ShowPage(Page::Contact)));
    }

    #[test]
    fn empty_popstate_hash_means_home() {
        assert_eq!(pop_target(""), Some(Page::Home));
        assert_eq!(pop_target("#"), Some(Page::Home));
    }

    #[test]
    fn unknown_popstate_hash_is_ignored() {
        assert_eq!(pop_target("#workshop"), None);
    }

    #[test]
    fn popstate_to_known_page_resolves() {
        assert_eq!(pop_target("#contact"), Some(Page::Contact));
    }
}
