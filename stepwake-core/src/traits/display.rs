//! Text display trait

/// Errors that can occur while updating the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer failed
    Bus,
    /// Text does not fit on the screen
    TooLong,
}

/// A display that shows a single centred line of text
pub trait TextDisplay {
    /// Replace the displayed text
    fn set_text(&mut self, text: &str) -> Result<(), DisplayError>;
}

impl<T: TextDisplay + ?Sized> TextDisplay for &mut T {
    fn set_text(&mut self, text: &str) -> Result<(), DisplayError> {
        (**self).set_text(text)
    }
}
