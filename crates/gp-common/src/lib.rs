//! Common types and utilities shared by the GP results viewer services.
//!
//! Nothing in this crate knows about HTTP. It covers:
//! - option discovery over the results tree (`catalog`)
//! - coercion of raw query values into catalog members (`params`)
//! - mean / uncertainty image lookup per kernel (`images`)
//! - the guard applied before serving files from the results root (`assets`)
//! - small HTML building blocks shared by both pages (`html`)
//! - percent-encoded image URLs (`urls`)

pub mod assets;
pub mod catalog;
pub mod error;
pub mod html;
pub mod images;
pub mod params;
pub mod urls;

pub use assets::resolve_asset;
pub use catalog::{discover, CatalogSource, FsCatalog, IgnoreSet, ResultsLayout, NS_KERNEL};
pub use error::{GpError, GpResult};
pub use images::{resolve_images, ImagePair, ImageRefMap, ImageSlot};
pub use params::{parse_flag, pick_or_first, ClosedChoice, QueryArgs};
pub use urls::url_path;
