pub mod config;
pub mod dispatch;
pub mod error;
pub mod highlight;
pub mod logging;
pub mod transforms;
pub mod url_builder;

pub use dispatch::{dispatch, initialize, DemoSettings, Dispatch, ImageView, RecordedView};
pub use error::ConfigError;
pub use highlight::{highlight, Markup};
pub use transforms::{TransformEntry, TransformTable};
pub use url_builder::{build_url, delivery_base};
