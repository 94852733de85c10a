//! Delivery URL composition.
//!
//! A delivery URL is `<base>[/<transformation>]/<identifier>`. Nothing here
//! escapes or validates its inputs; callers percent-encode transformation
//! parameters themselves (e.g. `Overlay%20Text`).

/// CDN host used when the config does not name one.
pub const DEFAULT_HOST: &str = "res.cloudinary.com";

/// Cloud name of the public demo account.
pub const DEFAULT_CLOUD_NAME: &str = "demo";

/// Sample asset available on the demo account.
pub const DEFAULT_PUBLIC_ID: &str = "sample.jpg";

/// Builds the image upload delivery base for a cloud:
/// `https://<host>/<cloud_name>/image/upload`.
pub fn delivery_base(host: &str, cloud_name: &str) -> String {
    format!("https://{host}/{cloud_name}/image/upload")
}

/// Composes a full delivery URL.
///
/// With a non-empty `transformation` the result is
/// `base/transformation/identifier`; an empty or absent one yields
/// `base/identifier`.
///
/// # Examples
///
/// - `build_url(base, "sample.jpg", Some("e_cartoonify"))` → `".../upload/e_cartoonify/sample.jpg"`
/// - `build_url(base, "sample.jpg", None)` → `".../upload/sample.jpg"`
pub fn build_url(base: &str, identifier: &str, transformation: Option<&str>) -> String {
    match transformation.filter(|t| !t.is_empty()) {
        Some(t) => format!("{base}/{t}/{identifier}"),
        None => format!("{base}/{identifier}"),
    }
}
