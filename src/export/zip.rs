//! ZIP bundling of generated packs.
//!
//! Resource packs ship as flat archives with `pack.mcmeta` at the root, so
//! every file below the pack's `resources` directory lands at its
//! `/`-separated relative name. Trees without an on-disk `pack.mcmeta` get
//! one synthesized from the pack's metadata.

use crate::error::{PackError, Result};
use crate::pack::directory::visit_files;
use crate::pack::DirectoryPack;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Write `pack` as a deflate-compressed archive at `output`. Returns the
/// number of entries written.
pub fn export_zip(pack: &DirectoryPack, output: &Path) -> Result<u64> {
    if !pack.base().is_dir() {
        return Err(PackError::InvalidPack(format!(
            "{} is not a directory",
            pack.base().display()
        )));
    }
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut files = Vec::new();
    visit_files(pack.base(), &mut |path| files.push(path.to_path_buf()))?;
    files.sort();

    let mut archive = ZipWriter::new(File::create(output)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut entries = 0u64;
    let mut has_meta = false;
    for path in &files {
        let Ok(relative) = path.strip_prefix(pack.base()) else {
            continue;
        };
        let name = relative
            .components()
            .map(|component| component.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        has_meta = has_meta || name == "pack.mcmeta";

        archive.start_file(name.as_str(), options)?;
        io::copy(&mut File::open(path)?, &mut archive)?;
        entries += 1;
    }

    if !has_meta {
        archive.start_file("pack.mcmeta", options)?;
        archive.write_all(pack.meta().to_json()?.as_bytes())?;
        entries += 1;
    }

    archive.finish()?;
    Ok(entries)
}
