//! View adapter: the two elements an action updates.

/// Target of a dispatched action: the displayed image and the URL text panel.
pub trait ImageView {
    fn set_image_source(&mut self, url: &str);
    fn set_url_text(&mut self, text: &str);
}

/// In-memory view that keeps the last values written to it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordedView {
    pub image_source: Option<String>,
    pub url_text: Option<String>,
    /// Number of `set_image_source` calls so far.
    pub updates: usize,
}

impl RecordedView {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ImageView for RecordedView {
    fn set_image_source(&mut self, url: &str) {
        self.image_source = Some(url.to_string());
        self.updates += 1;
    }

    fn set_url_text(&mut self, text: &str) {
        self.url_text = Some(text.to_string());
    }
}
