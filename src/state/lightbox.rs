use std::rc::Rc;

use yew::Reducible;

/// Image shown in the lightbox overlay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightboxImage {
    pub src: String,
    pub alt: String,
}

/// Milliseconds the image stays mounted after close, matching the CSS fade.
pub const CLEAR_DELAY_MS: u32 = 300;

/// Lightbox overlay state. `Closing` keeps the image mounted while the CSS
/// transition runs; the clear fires [`CLEAR_DELAY_MS`] later unless a reopen
/// cancels it first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(LightboxImage),
    Closing(LightboxImage),
}

/// Transitions dispatched by the overlay callbacks. `FinishClose` is what the
/// clear timer sends when it fires.
pub enum LightboxAction {
    Open(LightboxImage),
    BeginClose,
    FinishClose,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open(_))
    }

    /// The image to render, present while open or still fading out.
    pub fn image(&self) -> Option<&LightboxImage> {
        match self {
            LightboxState::Open(image) | LightboxState::Closing(image) => Some(image),
            LightboxState::Closed => None,
        }
    }

    pub fn begin_close(&self) -> LightboxState {
        match self {
            LightboxState::Open(image) => LightboxState::Closing(image.clone()),
            other => other.clone(),
        }
    }

    /// Completes a close. A no-op unless still `Closing`, so a clear timer
    /// that outlived its cancellation can never blank an overlay that was
    /// reopened in the meantime.
    pub fn finish_close(&self) -> LightboxState {
        match self {
            LightboxState::Closing(_) => LightboxState::Closed,
            other => other.clone(),
        }
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: LightboxAction) -> Rc<Self> {
        match action {
            LightboxAction::Open(image) => Rc::new(LightboxState::Open(image)),
            LightboxAction::BeginClose => Rc::new(self.begin_close()),
            LightboxAction::FinishClose => Rc::new(self.finish_close()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> LightboxImage {
        LightboxImage {
            src: "x.jpg".into(),
            alt: "Foo".into(),
        }
    }

    fn dispatch(state: LightboxState, action: LightboxAction) -> LightboxState {
        Rc::new(state).reduce(action).as_ref().clone()
    }

    #[test]
    fn closing_keeps_the_image_until_finished() {
        let state = dispatch(LightboxState::Open(image()), LightboxAction::BeginClose);
        assert!(!state.is_open());
        assert_eq!(state.image(), Some(&image()));
        assert_eq!(
            dispatch(state, LightboxAction::FinishClose),
            LightboxState::Closed
        );
    }

    #[test]
    fn stale_clear_cannot_blank_a_reopened_overlay() {
        // Close, reopen within the fade window, then the old clear fires.
        let state = dispatch(LightboxState::Open(image()), LightboxAction::BeginClose);
        let state = dispatch(state, LightboxAction::Open(image()));
        let state = dispatch(state, LightboxAction::FinishClose);
        assert_eq!(state, LightboxState::Open(image()));
    }

    #[test]
    fn begin_close_on_a_closed_overlay_is_a_noop() {
        assert_eq!(
            dispatch(LightboxState::Closed, LightboxAction::BeginClose),
            LightboxState::Closed
        );
    }
}
