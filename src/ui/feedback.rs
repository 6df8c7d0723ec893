/// Transient button feedback that reverts after a delay.
///
/// Each slot records the control's resting label once, at setup, and
/// a generation counter. Showing feedback advances the generation; a revert
/// timer only applies if no newer feedback was shown in the meantime.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::Element;

use super::dom;

/// Monotonic token source shared by a slot and its pending timers
#[derive(Debug, Clone, Default)]
pub struct Generation(Rc<Cell<u64>>);

impl Generation {
    /// Start a new generation and return its token
    pub fn advance(&self) -> u64 {
        let next = self.0.get().wrapping_add(1);
        self.0.set(next);
        next
    }

    pub fn is_current(&self, token: u64) -> bool {
        self.0.get() == token
    }
}

#[derive(Clone)]
pub struct FeedbackSlot {
    element: Element,
    resting_text: String,
    generation: Generation,
}

impl FeedbackSlot {
    pub fn new(element: Element) -> Self {
        let resting_text = element.text_content().unwrap_or_default();
        FeedbackSlot {
            element,
            resting_text,
            generation: Generation::default(),
        }
    }

    /// Replace the text and add `classes` until the next call or revert.
    /// Returns the token a later `revert_after` must present.
    pub fn show(&self, text: &str, classes: &[String]) -> u64 {
        let token = self.generation.advance();
        self.element.set_text_content(Some(text));
        dom::add_classes(&self.element, classes);
        token
    }

    /// After `millis`, restore the resting text, drop `classes` and run
    /// `on_revert`, unless newer feedback has been shown since `token`.
    pub fn revert_after<F>(&self, token: u64, millis: u32, classes: Vec<String>, on_revert: F)
    where
        F: FnOnce() + 'static,
    {
        let slot = self.clone();
        Timeout::new(millis, move || {
            if !slot.generation.is_current(token) {
                log::debug!("Skipping stale feedback revert");
                return;
            }
            slot.element.set_text_content(Some(&slot.resting_text));
            dom::remove_classes(&slot.element, &classes);
            on_revert();
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_advances() {
        let generation = Generation::default();

        let first = generation.advance();
        let second = generation.advance();

        assert_ne!(first, second);
        assert!(generation.is_current(second));
        assert!(!generation.is_current(first));
    }

    #[test]
    fn test_generation_shared_between_clones() {
        let generation = Generation::default();
        let timer_view = generation.clone();

        let token = timer_view.advance();
        assert!(generation.is_current(token));

        generation.advance();
        assert!(!timer_view.is_current(token));
    }
}
