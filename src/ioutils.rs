use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Resolves `path` against `base` unless it is already absolute.
pub fn resolve_against<B: AsRef<Path>, P: AsRef<Path>>(base: B, path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.as_ref().join(path)
    }
}

/// Ensures the destination either doesn't exist or is an empty directory.
pub fn ensure_vacant<P: AsRef<Path>>(destination: P) -> Result<()> {
    let destination = destination.as_ref();
    if !destination.exists() {
        return Ok(());
    }
    let is_empty_dir =
        destination.is_dir() && std::fs::read_dir(destination)?.next().is_none();
    if !is_empty_dir {
        return Err(Error::DestinationExists {
            destination: destination.display().to_string(),
        });
    }
    Ok(())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(Error::IoError)
}

pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path, dest_path).map(|_| ()).map_err(Error::IoError)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn relative_paths_are_joined_to_base() {
        let base = Path::new("/work");
        assert_eq!(resolve_against(base, "myproj"), PathBuf::from("/work/myproj"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let dir = TempDir::new().unwrap();
        let absolute = dir.path().join("myproj");
        assert_eq!(resolve_against("/elsewhere", &absolute), absolute);
    }

    #[test]
    fn vacant_destinations() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_vacant(dir.path().join("missing")).is_ok());
        fs::create_dir(dir.path().join("empty")).unwrap();
        assert!(ensure_vacant(dir.path().join("empty")).is_ok());
    }

    #[test]
    fn occupied_destinations() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("full")).unwrap();
        fs::write(dir.path().join("full/file.txt"), "x").unwrap();
        fs::write(dir.path().join("plain"), "x").unwrap();
        assert!(matches!(
            ensure_vacant(dir.path().join("full")),
            Err(Error::DestinationExists { .. })
        ));
        assert!(matches!(
            ensure_vacant(dir.path().join("plain")),
            Err(Error::DestinationExists { .. })
        ));
    }

    #[test]
    fn copy_file_creates_parents() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "content").unwrap();
        let target = dir.path().join("x/y/a.txt");
        copy_file(&source, &target).unwrap();
        assert_eq!(fs::read_to_string(target).unwrap(), "content");
    }
}
