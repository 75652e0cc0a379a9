#![allow(dead_code)]

use sprout::fetcher::TemplateFetcher;
use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::process::{Command, Stdio};
use walkdir::WalkDir;

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files = |dir: &Path| -> std::collections::HashSet<std::path::PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let files1 = files(dir1);
    let files2 = files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&content1));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts that two directory trees are identical, printing the differences otherwise.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    if dir_diff::is_different(actual, expected).unwrap() {
        print_dir_diff(actual, expected);
        panic!("Directories differ. See above for details.");
    }
}

/// Writes `files` (relative path, content) under `root`, creating folders as needed.
pub fn write_tree(root: &Path, files: &[(&str, &str)]) {
    for (relative, content) in files {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
}

/// Turns `dir` into a git repository with everything committed, the way
/// templates are published for the default git fetcher.
pub fn commit_all(dir: &Path) {
    let steps: [&[&str]; 3] = [&["init", "-q"], &["add", "-A"], &["commit", "-q", "-m", "template"]];
    for args in steps {
        let status = Command::new("git")
            .args(["-c", "user.name=sprout", "-c", "user.email=sprout@localhost"])
            .args(["-c", "commit.gpgsign=false"])
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .unwrap();
        assert!(status.success(), "git {args:?} failed in {dir:?}");
    }
}

/// What the fake fetcher does when asked to fetch.
pub enum FakeBehaviour {
    /// Copy the template tree with plain filesystem calls.
    Copy,
    /// Report a failed clone with the given output, creating nothing.
    Fail(&'static str),
    /// Copy the template, then drop a non UTF-8 file into the destination.
    CopyWithBinary,
}

/// Fetcher standing in for `git clone` in tests.
pub struct FakeFetcher {
    behaviour: FakeBehaviour,
    calls: Cell<usize>,
}

impl FakeFetcher {
    pub fn new(behaviour: FakeBehaviour) -> Self {
        Self { behaviour, calls: Cell::new(0) }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn copy(source: &Path, destination: &Path) {
        for entry in WalkDir::new(source).into_iter().filter_map(Result::ok) {
            let target = destination.join(entry.path().strip_prefix(source).unwrap());
            if entry.file_type().is_dir() {
                fs::create_dir_all(&target).unwrap();
            } else {
                fs::copy(entry.path(), &target).unwrap();
            }
        }
    }
}

impl TemplateFetcher for FakeFetcher {
    fn fetch(&self, source: &Path, destination: &Path) -> sprout::error::Result<()> {
        self.calls.set(self.calls.get() + 1);
        match self.behaviour {
            FakeBehaviour::Copy => Self::copy(source, destination),
            FakeBehaviour::Fail(output) => {
                return Err(sprout::error::Error::FetchFailed {
                    command: format!("git clone {} {}", source.display(), destination.display()),
                    output: output.to_string(),
                })
            }
            FakeBehaviour::CopyWithBinary => {
                Self::copy(source, destination);
                fs::write(destination.join("blob.bin"), [0xffu8, 0xfe, 0x00, 0x80]).unwrap();
            }
        }
        Ok(())
    }
}
