//! `imgurl build` – raw URL from an arbitrary transformation string.

use imgurl_core::{build_url, DemoSettings};

pub fn run_build(settings: &DemoSettings, transform: Option<&str>, id: Option<&str>) {
    let identifier = id.unwrap_or(&settings.identifier);
    println!("{}", build_url(&settings.base, identifier, transform));
}
