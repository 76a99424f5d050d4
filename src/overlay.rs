//! Overlay State
//!
//! Modal dialogs are either hidden or open with the data they display.

#[derive(Debug, Clone, PartialEq)]
pub enum Overlay<T> {
    Hidden,
    Open(T),
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Overlay::Hidden
    }
}

impl<T> Overlay<T> {
    /// Open with `value`, replacing whatever was shown
    pub fn open(&mut self, value: T) {
        *self = Overlay::Open(value);
    }

    /// Hide, handing back the payload if it was open
    pub fn close(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Overlay::Open(value) => Some(value),
            Overlay::Hidden => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Overlay::Open(_))
    }

    pub fn get(&self) -> Option<&T> {
        match self {
            Overlay::Open(value) => Some(value),
            Overlay::Hidden => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Overlay::Open(value) => Some(value),
            Overlay::Hidden => None,
        }
    }
}

/// A click closes the overlay only when it landed on the backdrop itself,
/// not on anything nested inside the dialog.
pub fn is_backdrop_hit<T: PartialEq>(target: Option<T>, backdrop: Option<T>) -> bool {
    match (target, backdrop) {
        (Some(target), Some(backdrop)) => target == backdrop,
        _ => false,
    }
}
