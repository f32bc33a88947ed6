/// Mobile menu state. The ARIA attributes on the trigger button are derived
/// from the same flag as the `active` classes, so they cannot drift apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub const fn closed() -> Self {
        Self { open: false }
    }

    pub fn is_open(self) -> bool {
        self.open
    }

    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    /// Value for `aria-expanded` on the trigger button.
    pub fn aria_expanded(self) -> &'static str {
        if self.open {
            "true"
        } else {
            "false"
        }
    }

    /// The trigger label names the action the button performs next.
    pub fn aria_label(self) -> &'static str {
        if self.open {
            "Stäng meny"
        } else {
            "Öppna meny"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.aria_expanded(), "false");
        assert_eq!(menu.aria_label(), "Öppna meny");
    }

    #[test]
    fn toggle_flips_state_and_aria() {
        let menu = MenuState::default().toggled();
        assert!(menu.is_open());
        assert_eq!(menu.aria_expanded(), "true");
        assert_eq!(menu.aria_label(), "Stäng meny");
        assert!(!menu.toggled().is_open());
    }

    #[test]
    fn forced_close_is_the_default_state() {
        assert_eq!(MenuState::closed(), MenuState::default());
        assert!(!MenuState::closed().is_open());
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// For any sequence of toggle/close clicks, aria-expanded tracks the
        /// open flag exactly.
        #[test]
        fn aria_expanded_matches_open_state(ops in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut menu = MenuState::default();
            for toggle in ops {
                menu = if toggle { menu.toggled() } else { MenuState::closed() };
                prop_assert_eq!(menu.aria_expanded() == "true", menu.is_open());
                prop_assert_eq!(menu.aria_label() == "Stäng meny", menu.is_open());
            }
        }
    }
}
