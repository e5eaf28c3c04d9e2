pub mod config;
pub mod driver;
pub mod error;
#[cfg(feature = "render")]
pub mod font;
pub mod icon;
pub mod logger;
pub mod models;

pub use error::{Error, Result};
pub use icon::IconLayout;
pub use models::{IconSpec, Palette, Rgb};

#[cfg(feature = "render")]
pub use icon::{generate, render_icon};
