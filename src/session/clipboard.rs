//! Clipboard access

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String>;
}

/// The desktop clipboard.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, String> {
        let inner = arboard::Clipboard::new().map_err(|e| e.to_string())?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), String> {
        self.inner.set_text(text).map_err(|e| e.to_string())
    }
}
