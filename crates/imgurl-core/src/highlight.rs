//! Display text for a delivery URL with its transformation emphasized.

/// How the transformation substring is marked in display text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Markup {
    /// `<b>…</b>`, as rendered into the page's URL panel.
    #[default]
    Html,
    /// `[…]`, for terminals.
    Brackets,
    /// No emphasis.
    Plain,
}

/// Emphasizes the transformation segment of `url`, the one directly after
/// `base/`.
///
/// The position is fixed by the URL layout, so a host, cloud name or
/// identifier that happens to contain the same text is never marked. An
/// empty transformation, or a URL that does not carry `transformation` at
/// that position, is returned unchanged.
pub fn highlight(url: &str, base: &str, transformation: &str, markup: Markup) -> String {
    let (open, close) = match markup {
        Markup::Html => ("<b>", "</b>"),
        Markup::Brackets => ("[", "]"),
        Markup::Plain => return url.to_string(),
    };
    if transformation.is_empty() || !url.starts_with(base) {
        return url.to_string();
    }

    let start = base.len() + 1;
    let end = start + transformation.len();
    if url.get(base.len()..start) != Some("/") || url.get(start..end) != Some(transformation) {
        return url.to_string();
    }

    let mut out = String::with_capacity(url.len() + open.len() + close.len());
    out.push_str(&url[..start]);
    out.push_str(open);
    out.push_str(transformation);
    out.push_str(close);
    out.push_str(&url[end..]);
    out
}
