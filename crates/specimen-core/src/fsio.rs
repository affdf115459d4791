//! Unchecked file reader: the path-traversal sample.

use std::fs::File;
use std::io::{self, Read};

/// Open exactly the path given and return its contents as text. No
/// normalization, no containment check, no symlink resolution. The handle is
/// dropped on every exit path; I/O errors propagate untouched.
pub fn read_file(filename: &str) -> io::Result<String> {
    let mut f = File::open(filename)?;
    let mut contents = String::new();
    f.read_to_string(&mut contents)?;
    Ok(contents)
}
