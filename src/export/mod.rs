//! Distributable exports of generated packs.

pub mod zip;

pub use self::zip::export_zip;
