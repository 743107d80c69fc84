// SPDX-License-Identifier: MPL-2.0
//! Builds a deck from the images found in a directory.

use super::{Slide, SlideDeck};
use crate::app::config::SortOrder;
use crate::error::Result;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// Image extensions turned into slides (compared case-insensitively).
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Returns true if the file extension is a supported image format.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

struct ScannedFile {
    path: PathBuf,
    modified: SystemTime,
    created: SystemTime,
}

/// Scans `directory` (not recursively) and returns one image slide per
/// supported file. Captions are the file stems.
pub(super) async fn scan_directory(directory: &Path, sort_order: SortOrder) -> Result<SlideDeck> {
    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(directory).await?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if !is_supported_image(&path) {
            continue;
        }
        let Ok(metadata) = entry.metadata().await else {
            tracing::debug!(path = %path.display(), "skipping unreadable entry");
            continue;
        };
        if !metadata.is_file() {
            continue;
        }
        files.push(ScannedFile {
            path,
            modified: metadata.modified().unwrap_or(SystemTime::UNIX_EPOCH),
            created: metadata.created().unwrap_or(SystemTime::UNIX_EPOCH),
        });
    }

    sort_files(&mut files, sort_order);

    let slides = files
        .into_iter()
        .map(|file| {
            let caption = file
                .path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned());
            Slide::Image {
                path: file.path,
                caption,
            }
        })
        .collect();

    Ok(SlideDeck::new(slides))
}

fn sort_files(files: &mut [ScannedFile], sort_order: SortOrder) {
    match sort_order {
        SortOrder::Alphabetical => {
            files.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        }
        SortOrder::ModifiedDate => files.sort_by_key(|file| file.modified),
        SortOrder::CreatedDate => files.sort_by_key(|file| file.created),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    fn create_test_image(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = fs::File::create(&path).expect("failed to create test file");
        file.write_all(b"fake image data")
            .expect("failed to write test data");
        path
    }

    fn captions(deck: &SlideDeck) -> Vec<String> {
        deck.iter()
            .filter_map(|slide| match slide {
                Slide::Image { caption, .. } => caption.clone(),
                Slide::Testimonial { .. } => None,
            })
            .collect()
    }

    #[test]
    fn supported_extensions_are_case_insensitive() {
        assert!(is_supported_image(Path::new("a.PNG")));
        assert!(is_supported_image(Path::new("a.jpeg")));
        assert!(!is_supported_image(Path::new("a.txt")));
        assert!(!is_supported_image(Path::new("noextension")));
    }

    #[tokio::test]
    async fn scan_filters_and_sorts_alphabetically() {
        let dir = tempdir().expect("failed to create temp dir");
        create_test_image(dir.path(), "c.png");
        create_test_image(dir.path(), "a.jpg");
        create_test_image(dir.path(), "b.webp");
        create_test_image(dir.path(), "readme.txt");
        fs::create_dir(dir.path().join("nested.png")).expect("failed to create dir");

        let deck = scan_directory(dir.path(), SortOrder::Alphabetical)
            .await
            .expect("scan should succeed");

        assert_eq!(captions(&deck), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn scan_empty_directory_yields_empty_deck() {
        let dir = tempdir().expect("failed to create temp dir");
        let deck = scan_directory(dir.path(), SortOrder::default())
            .await
            .expect("scan should succeed");
        assert!(deck.is_empty());
    }

    #[tokio::test]
    async fn scan_sorts_by_modified_date() {
        let dir = tempdir().expect("failed to create temp dir");
        let older = create_test_image(dir.path(), "z.png");
        let newer = create_test_image(dir.path(), "a.png");

        let now = SystemTime::now();
        fs::File::options()
            .write(true)
            .open(&older)
            .and_then(|f| f.set_modified(now - std::time::Duration::from_secs(3600)))
            .expect("failed to set mtime");
        fs::File::options()
            .write(true)
            .open(&newer)
            .and_then(|f| f.set_modified(now))
            .expect("failed to set mtime");

        let deck = scan_directory(dir.path(), SortOrder::ModifiedDate)
            .await
            .expect("scan should succeed");

        assert_eq!(captions(&deck), vec!["z", "a"]);
    }
}
