//! Extraction stages over parsed trees.

pub mod declarations;
pub(crate) mod helpers;
pub mod html;
pub mod imports;
pub mod templates;
