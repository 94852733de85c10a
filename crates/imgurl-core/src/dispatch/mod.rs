//! Action dispatch.
//!
//! Resolves an action name through the [`TransformTable`], builds the delivery
//! URL and writes it to an [`ImageView`]. Settings are built once at startup
//! and passed in explicitly; dispatch itself holds no state, so every call is
//! independent of the ones before it.
//!
//! Unknown actions are a no-op: the view is left untouched and
//! [`Dispatch::Ignored`] is returned. There is no fallback to the
//! untransformed image.

mod view;

pub use view::{ImageView, RecordedView};

use crate::highlight::{highlight, Markup};
use crate::transforms::TransformTable;
use crate::url_builder::{
    build_url, delivery_base, DEFAULT_CLOUD_NAME, DEFAULT_HOST, DEFAULT_PUBLIC_ID,
};

/// Everything dispatch needs, fixed for the lifetime of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    /// Delivery base, e.g. `https://res.cloudinary.com/demo/image/upload`.
    pub base: String,
    /// Public id of the displayed image.
    pub identifier: String,
    pub table: TransformTable,
    /// Emphasis used for the URL text panel.
    pub markup: Markup,
}

impl DemoSettings {
    pub fn new(base: impl Into<String>, identifier: impl Into<String>, table: TransformTable) -> Self {
        Self {
            base: base.into(),
            identifier: identifier.into(),
            table,
            markup: Markup::default(),
        }
    }

    pub fn with_markup(mut self, markup: Markup) -> Self {
        self.markup = markup;
        self
    }

    /// URL with no transformation applied.
    pub fn initial_url(&self) -> String {
        build_url(&self.base, &self.identifier, None)
    }

    /// URL for `action`, or `None` if the action is not in the table.
    pub fn url_for(&self, action: &str) -> Option<String> {
        self.table
            .get(action)
            .map(|t| build_url(&self.base, &self.identifier, Some(t)))
    }
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self::new(
            delivery_base(DEFAULT_HOST, DEFAULT_CLOUD_NAME),
            DEFAULT_PUBLIC_ID,
            TransformTable::builtin(),
        )
    }
}

/// Outcome of a single dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The view now shows `url`.
    Applied { url: String, transformation: String },
    /// The action was not in the table; the view was not touched.
    Ignored,
}

impl Dispatch {
    pub fn is_applied(&self) -> bool {
        matches!(self, Dispatch::Applied { .. })
    }
}

/// Page-load step: show the untransformed image and its URL.
pub fn initialize<V: ImageView + ?Sized>(settings: &DemoSettings, view: &mut V) -> String {
    let url = settings.initial_url();
    view.set_image_source(&url);
    view.set_url_text(&url);
    tracing::debug!(%url, "view initialized");
    url
}

/// Applies `action` to `view`.
pub fn dispatch<V: ImageView + ?Sized>(settings: &DemoSettings, action: &str, view: &mut V) -> Dispatch {
    let Some(transformation) = settings.table.get(action) else {
        tracing::warn!(action, "unknown action; view left unchanged");
        return Dispatch::Ignored;
    };

    let url = build_url(&settings.base, &settings.identifier, Some(transformation));
    view.set_image_source(&url);
    view.set_url_text(&highlight(&url, &settings.base, transformation, settings.markup));
    tracing::debug!(action, %url, "action applied");

    Dispatch::Applied {
        url,
        transformation: transformation.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transforms::TransformEntry;

    #[test]
    fn cartoon_updates_image_and_text() {
        let settings = DemoSettings::default();
        let mut view = RecordedView::new();
        let out = dispatch(&settings, "cartoon", &mut view);

        let url = "https://res.cloudinary.com/demo/image/upload/e_cartoonify/sample.jpg";
        assert_eq!(
            out,
            Dispatch::Applied {
                url: url.to_string(),
                transformation: "e_cartoonify".to_string(),
            }
        );
        assert_eq!(view.image_source.as_deref(), Some(url));
        assert_eq!(
            view.url_text.as_deref(),
            Some("https://res.cloudinary.com/demo/image/upload/<b>e_cartoonify</b>/sample.jpg")
        );
    }

    #[test]
    fn square_url() {
        let settings = DemoSettings::default();
        assert_eq!(
            settings.url_for("square").as_deref(),
            Some("https://res.cloudinary.com/demo/image/upload/c_fill,g_auto,w_333,ar_1/sample.jpg")
        );
    }

    #[test]
    fn reset_shows_untransformed_url_without_markup() {
        let settings = DemoSettings::default();
        let mut view = RecordedView::new();
        dispatch(&settings, "cartoon", &mut view);
        let out = dispatch(&settings, "reset", &mut view);

        let url = "https://res.cloudinary.com/demo/image/upload/sample.jpg";
        assert!(out.is_applied());
        assert_eq!(view.image_source.as_deref(), Some(url));
        assert_eq!(view.url_text.as_deref(), Some(url));
    }

    #[test]
    fn unknown_action_leaves_view_untouched() {
        let settings = DemoSettings::default();
        let mut view = RecordedView::new();
        dispatch(&settings, "square", &mut view);
        let before = view.clone();

        let out = dispatch(&settings, "unknown_action", &mut view);
        assert_eq!(out, Dispatch::Ignored);
        assert_eq!(view, before);
    }

    #[test]
    fn unknown_action_on_fresh_view() {
        let settings = DemoSettings::default();
        let mut view = RecordedView::new();
        assert_eq!(dispatch(&settings, "nope", &mut view), Dispatch::Ignored);
        assert_eq!(view, RecordedView::new());
    }

    #[test]
    fn initialize_shows_untransformed_url() {
        let settings = DemoSettings::default();
        let mut view = RecordedView::new();
        let url = initialize(&settings, &mut view);
        assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/sample.jpg");
        assert_eq!(view.url_text.as_deref(), Some(url.as_str()));
        assert_eq!(view.updates, 1);
    }

    #[test]
    fn clicks_are_independent_of_order() {
        let settings = DemoSettings::default();
        let mut a = RecordedView::new();
        let mut b = RecordedView::new();
        for action in ["overlay", "square", "cartoon"] {
            dispatch(&settings, action, &mut a);
        }
        dispatch(&settings, "cartoon", &mut b);
        assert_eq!(a.image_source, b.image_source);
        assert_eq!(a.url_text, b.url_text);
    }

    #[test]
    fn custom_settings_and_markup() {
        let table = TransformTable::new(vec![TransformEntry::new("sepia", "e_sepia")]).unwrap();
        let settings = DemoSettings::new(
            "https://cdn.example.net/acme/image/upload",
            "cat.png",
            table,
        )
        .with_markup(Markup::Brackets);
        let mut view = RecordedView::new();
        dispatch(&settings, "sepia", &mut view);
        assert_eq!(
            view.url_text.as_deref(),
            Some("https://cdn.example.net/acme/image/upload/[e_sepia]/cat.png")
        );
        assert_eq!(dispatch(&settings, "cartoon", &mut view), Dispatch::Ignored);
    }

    #[test]
    fn emphasis_skips_matching_host() {
        let table = TransformTable::new(vec![TransformEntry::new("shop", "shop")]).unwrap();
        let settings = DemoSettings::new("https://shop.example/shop/image/upload", "shop.png", table)
            .with_markup(Markup::Brackets);
        let mut view = RecordedView::new();
        dispatch(&settings, "shop", &mut view);
        assert_eq!(
            view.url_text.as_deref(),
            Some("https://shop.example/shop/image/upload/[shop]/shop.png")
        );
    }
}
