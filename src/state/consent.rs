//! Cookie consent state. Persistence goes through [`crate::dom::cookies`];
//! this module only decides.

pub const CONSENT_COOKIE: &str = "cookie_consent";
pub const CONSENT_TTL_DAYS: u32 = 365;

/// Delay before the banner slides in on a first visit.
pub const BANNER_DELAY_MS: u32 = 1000;

/// Visitor analytics choice. Once accepted or declined it is never asked
/// again for the cookie's lifetime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Consent {
    #[default]
    Unset,
    Accepted,
    Declined,
}

impl Consent {
    pub fn from_cookie(value: Option<&str>) -> Self {
        match value {
            Some("accepted") => Consent::Accepted,
            Some("declined") => Consent::Declined,
            _ => Consent::Unset,
        }
    }

    pub fn cookie_value(self) -> Option<&'static str> {
        match self {
            Consent::Accepted => Some("accepted"),
            Consent::Declined => Some("declined"),
            Consent::Unset => None,
        }
    }
}

/// What the consent flow does at page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadAction {
    PromptAfterDelay,
    LoadAnalytics,
    Nothing,
}

pub fn on_load(consent: Consent) -> LoadAction {
    match consent {
        Consent::Unset => LoadAction::PromptAfterDelay,
        Consent::Accepted => LoadAction::LoadAnalytics,
        Consent::Declined => LoadAction::Nothing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_persisted_values() {
        assert_eq!(Consent::from_cookie(Some("accepted")), Consent::Accepted);
        assert_eq!(Consent::from_cookie(Some("declined")), Consent::Declined);
        assert_eq!(Consent::from_cookie(Some("yes")), Consent::Unset);
        assert_eq!(Consent::from_cookie(None), Consent::Unset);
    }

    #[test]
    fn load_actions_per_state() {
        assert_eq!(on_load(Consent::Unset), LoadAction::PromptAfterDelay);
        assert_eq!(on_load(Consent::Accepted), LoadAction::LoadAnalytics);
        assert_eq!(on_load(Consent::Declined), LoadAction::Nothing);
    }

    #[test]
    fn cookie_values_round_trip() {
        for consent in [Consent::Accepted, Consent::Declined] {
            assert_eq!(Consent::from_cookie(consent.cookie_value()), consent);
        }
        assert_eq!(Consent::Unset.cookie_value(), None);
    }
}
