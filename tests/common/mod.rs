//! Shared test utilities for the integration suite.
//!
//! Builds repository-cache-shaped artifact layouts and real zip/tar.gz
//! fixtures on disk, so the tests exercise the same byte paths production
//! does.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Place `file_name` under a repository-cache-shaped coordinate layout:
/// `<root>/<group>/<artifact>/<version>/<hash>/<file_name>`.
///
/// Returns the full artifact path. Parent directories are created; the file
/// itself is not.
pub fn repo_artifact_path(
    root: &Path,
    group: &str,
    artifact: &str,
    version: &str,
    file_name: &str,
) -> PathBuf {
    let dir = root.join(group).join(artifact).join(version).join("9f8a7b6c");
    fs::create_dir_all(&dir).unwrap();
    dir.join(file_name)
}

/// Write a zip archive with the given `(entry_name, content)` pairs.
///
/// Entry names ending in `/` become directories.
pub fn build_zip(archive_path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(archive_path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default();

    for (name, content) in entries {
        if name.ends_with('/') {
            writer.add_directory(*name, options).unwrap();
        } else {
            writer.start_file(*name, options).unwrap();
            writer.write_all(content).unwrap();
        }
    }

    writer.finish().unwrap();
}

/// Write a gzip-compressed tarball with the given `(entry_name, content)` pairs.
pub fn build_tar_gz(archive_path: &Path, entries: &[(&str, &[u8])]) {
    let file = File::create(archive_path).unwrap();
    let encoder = flate2::write::GzEncoder::new(file, flate2::Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for (name, content) in entries {
        let mut header = tar::Header::new_gnu();
        header.set_path(name).unwrap();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder.append(&header, *content).unwrap();
    }

    builder.into_inner().unwrap().finish().unwrap();
}

/// List all regular files under `root`, as paths relative to it, sorted.
pub fn relative_files(root: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(root)
        .into_iter()
        .map(Result::unwrap)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.path().strip_prefix(root).unwrap().to_path_buf())
        .collect();
    files.sort();
    files
}
