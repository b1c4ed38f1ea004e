//! Folder sorter behind `sort files`.
//!
//! Every regular file below the target folder is moved into a category folder
//! at its top level, chosen by extension. Files already inside a category
//! folder are left alone, so running the sorter twice is harmless.
//!
//! ```text
//! <folder>/
//! ├── images/      jpeg jpg png svg gif
//! ├── video/       avi mp4 mov mkv
//! ├── documents/   doc docx txt pdf xlsx pptx
//! ├── audio/       mp3 ogg wav amr
//! ├── archives/    zip gz tar tgz rar
//! │   └── <stem>/  contents of each tar, tar.gz and tgz
//! └── other/       everything else
//! ```
//!
//! Afterwards empty directories are removed. The returned [`SortReport`] lists
//! the extensions seen, split into known and unknown.

use crate::error::Result;
use flate2::read::GzDecoder;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("images", &["jpeg", "jpg", "png", "svg", "gif"]),
    ("video", &["avi", "mp4", "mov", "mkv"]),
    ("documents", &["doc", "docx", "txt", "pdf", "xlsx", "pptx"]),
    ("audio", &["mp3", "ogg", "wav", "amr"]),
    ("archives", &["zip", "gz", "tar", "tgz", "rar"]),
];

pub const OTHER: &str = "other";

const ARCHIVES: &str = "archives";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortReport {
    pub moved: usize,
    pub unpacked: usize,
    pub removed_dirs: usize,
    pub known: BTreeSet<String>,
    pub unknown: BTreeSet<String>,
    /// Archives that were moved but could not be unpacked.
    pub broken: Vec<String>,
}

impl SortReport {
    pub fn summary(&self) -> String {
        format!(
            "Sorted {} file(s), unpacked {} archive(s), removed {} empty folder(s).\n\
             Known extensions: {}\nUnknown extensions: {}",
            self.moved,
            self.unpacked,
            self.removed_dirs,
            join_or_none(&self.known),
            join_or_none(&self.unknown),
        )
    }
}

fn join_or_none(set: &BTreeSet<String>) -> String {
    if set.is_empty() {
        "none".to_string()
    } else {
        set.iter().cloned().collect::<Vec<_>>().join(", ")
    }
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
}

/// The category folder a file belongs in.
pub fn category_for(path: &Path) -> &'static str {
    extension_of(path)
        .and_then(|ext| {
            CATEGORIES
                .iter()
                .find(|(_, exts)| exts.contains(&ext.as_str()))
                .map(|(name, _)| *name)
        })
        .unwrap_or(OTHER)
}

fn is_category_dir(root: &Path, dir: &Path) -> bool {
    dir.parent() == Some(root)
        && dir
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n == OTHER || CATEGORIES.iter().any(|(c, _)| *c == n))
}

/// Regular files below `dir`, skipping category folders at the top level.
fn collect_files(root: &Path, dir: &Path, out: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let kind = entry.file_type()?;
        if kind.is_dir() {
            if !is_category_dir(root, &path) {
                collect_files(root, &path, out)?;
            }
        } else if kind.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

/// `dir/name`, or `dir/stem_N.ext` for the first free N when that is taken.
fn free_target(dir: &Path, file: &Path) -> PathBuf {
    let name = file.file_name().map(PathBuf::from).unwrap_or_default();
    let candidate = dir.join(&name);
    if !candidate.exists() {
        return candidate;
    }
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let ext = file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();
    (1..)
        .map(|n| dir.join(format!("{}_{}{}", stem, n, ext)))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

/// Folder name for an unpacked archive: the file name without its archive suffixes.
fn archive_stem(file: &Path) -> Option<String> {
    let name = file.file_name()?.to_str()?;
    [".tar.gz", ".tgz", ".tar"].iter().find_map(|suffix| {
        let split = name.len().checked_sub(suffix.len())?;
        let tail = name.get(split..)?;
        tail.eq_ignore_ascii_case(suffix)
            .then(|| name[..split].to_string())
    })
}

fn unpack(archive: &Path, dest: &Path) -> Result<()> {
    let file = File::open(archive)?;
    let reader: Box<dyn Read> = if archive
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("tar"))
    {
        Box::new(file)
    } else {
        Box::new(GzDecoder::new(file))
    };
    fs::create_dir_all(dest)?;
    tar::Archive::new(reader).unpack(dest)?;
    Ok(())
}

/// Removes empty directories below `dir`. `dir` itself is kept.
fn remove_empty_dirs(dir: &Path) -> Result<usize> {
    let mut removed = 0;
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let path = entry.path();
        removed += remove_empty_dirs(&path)?;
        if fs::read_dir(&path)?.next().is_none() {
            fs::remove_dir(&path)?;
            log::debug!("removed empty folder {}", path.display());
            removed += 1;
        }
    }
    Ok(removed)
}

pub fn sort_folder(root: &Path) -> Result<SortReport> {
    let mut files = Vec::new();
    collect_files(root, root, &mut files)?;

    let mut report = SortReport::default();
    for file in files {
        let category = category_for(&file);
        match extension_of(&file) {
            Some(ext) if category == OTHER => {
                report.unknown.insert(ext);
            }
            Some(ext) => {
                report.known.insert(ext);
            }
            None => {}
        }

        let target_dir = root.join(category);
        fs::create_dir_all(&target_dir)?;
        let target = free_target(&target_dir, &file);
        fs::rename(&file, &target)?;
        log::debug!("moved {} -> {}", file.display(), target.display());
        report.moved += 1;

        if category != ARCHIVES {
            continue;
        }
        if let Some(stem) = archive_stem(&target) {
            let dest = root.join(ARCHIVES).join(stem);
            match unpack(&target, &dest) {
                Ok(()) => report.unpacked += 1,
                Err(e) => {
                    log::warn!("could not unpack {}: {}", target.display(), e);
                    report.broken.push(target.display().to_string());
                }
            }
        }
    }

    report.removed_dirs = remove_empty_dirs(root)?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn write_tar_gz(path: &Path, entry: &str, content: &str) {
        let file = File::create(path).unwrap();
        let mut builder = tar::Builder::new(GzEncoder::new(file, Compression::default()));
        let mut header = tar::Header::new_gnu();
        header.set_size(content.len() as u64);
        header.set_mode(0o644);
        header.set_cksum();
        builder
            .append_data(&mut header, entry, content.as_bytes())
            .unwrap();
        builder.into_inner().unwrap().finish().unwrap();
    }

    #[test]
    fn categories_by_extension() {
        assert_eq!(category_for(Path::new("a.PNG")), "images");
        assert_eq!(category_for(Path::new("song.mp3")), "audio");
        assert_eq!(category_for(Path::new("report.docx")), "documents");
        assert_eq!(category_for(Path::new("clip.mp4")), "video");
        assert_eq!(category_for(Path::new("bundle.tar.gz")), "archives");
        assert_eq!(category_for(Path::new("data.xyz")), OTHER);
        assert_eq!(category_for(Path::new("Makefile")), OTHER);
    }

    #[test]
    fn archive_stems() {
        assert_eq!(archive_stem(Path::new("photos.tar.gz")).as_deref(), Some("photos"));
        assert_eq!(archive_stem(Path::new("photos.TGZ")).as_deref(), Some("photos"));
        assert_eq!(archive_stem(Path::new("src.tar")).as_deref(), Some("src"));
        assert_eq!(archive_stem(Path::new("old.zip")), None);
    }

    #[test]
    fn sorts_nested_files_and_removes_empty_dirs() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "a.png", "img");
        touch(root, "nested/deeper/b.mp3", "audio");
        touch(root, "nested/c.docx", "doc");
        touch(root, "d.xyz", "?");

        let report = sort_folder(root).unwrap();

        assert!(root.join("images/a.png").is_file());
        assert!(root.join("audio/b.mp3").is_file());
        assert!(root.join("documents/c.docx").is_file());
        assert!(root.join("other/d.xyz").is_file());
        assert!(!root.join("nested").exists());

        assert_eq!(report.moved, 4);
        assert_eq!(report.removed_dirs, 2);
        assert_eq!(
            report.known.iter().cloned().collect::<Vec<_>>(),
            vec!["docx", "mp3", "png"]
        );
        assert_eq!(report.unknown.iter().cloned().collect::<Vec<_>>(), vec!["xyz"]);
    }

    #[test]
    fn unpacks_tar_gz_into_named_folder() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        write_tar_gz(&root.join("bundle.tar.gz"), "inside.txt", "hello");

        let report = sort_folder(root).unwrap();

        assert_eq!(report.unpacked, 1);
        assert!(root.join("archives/bundle.tar.gz").is_file());
        let unpacked = fs::read_to_string(root.join("archives/bundle/inside.txt")).unwrap();
        assert_eq!(unpacked, "hello");
    }

    #[test]
    fn broken_archive_is_moved_but_not_unpacked() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "broken.tgz", "not gzip at all");

        let report = sort_folder(root).unwrap();

        assert_eq!(report.unpacked, 0);
        assert_eq!(report.broken.len(), 1);
        assert!(report.broken[0].ends_with("broken.tgz"));
        assert!(root.join("archives/broken.tgz").is_file());
    }

    #[test]
    fn second_run_leaves_sorted_files_alone() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "a.png", "1");
        sort_folder(root).unwrap();

        touch(root, "sub/a.png", "2");
        let report = sort_folder(root).unwrap();

        assert_eq!(report.moved, 1);
        assert_eq!(fs::read_to_string(root.join("images/a.png")).unwrap(), "1");
        assert_eq!(fs::read_to_string(root.join("images/a_1.png")).unwrap(), "2");
    }

    #[test]
    fn summary_lists_extensions() {
        let mut report = SortReport {
            moved: 2,
            ..Default::default()
        };
        report.known.insert("png".into());
        let text = report.summary();
        assert!(text.starts_with("Sorted 2 file(s)"));
        assert!(text.contains("Known extensions: png"));
        assert!(text.contains("Unknown extensions: none"));
    }
}
