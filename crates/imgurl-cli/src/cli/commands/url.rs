//! `imgurl url <action>` – print the delivery URL for one action.

use anyhow::{bail, Result};
use imgurl_core::DemoSettings;

pub fn run_url(settings: &DemoSettings, action: &str) -> Result<()> {
    let Some(url) = settings.url_for(action) else {
        let known: Vec<&str> = settings.table.actions().collect();
        bail!("unknown action `{action}` (known: {})", known.join(", "));
    };
    println!("{url}");
    Ok(())
}
