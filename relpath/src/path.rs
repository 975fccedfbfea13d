use std::fmt;

use crate::error::Error;
use crate::relativizer::Relativizer;

const SEPARATOR: char = '/';
pub(crate) const PARENT_SEGMENT: &str = "..";
const CURRENT_SEGMENT: &str = ".";

/// A slash-delimited location in a virtual hierarchy.
///
/// Nothing here touches the real filesystem. A path ending in `/` is
/// directory-like; anything else names a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualPath<'a> {
    path: &'a str,
}

// C `isspace` set, including `\v`.
fn is_blank(fragment: &str) -> bool {
    fragment
        .bytes()
        .all(|b| matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r'))
}

impl<'a> VirtualPath<'a> {
    pub fn new(path: &'a str) -> Self {
        Self { path }
    }

    pub fn as_str(&self) -> &'a str {
        self.path
    }

    /// Returns the non-empty components of the path, in order.
    ///
    /// Empty and whitespace-only fragments are dropped, so `a//b` splits the
    /// same as `a/b` and leading or trailing slashes add nothing. Segments
    /// are taken literally: `.` and `..` are ordinary names here.
    pub fn segments(&self) -> Vec<&'a str> {
        let segments: Vec<&'a str> = self
            .path
            .split(SEPARATOR)
            .filter(|fragment| !is_blank(fragment))
            .collect();
        log::trace!("segments({:?}) = {:?}", self.path, segments);
        segments
    }

    pub fn is_directory(&self) -> bool {
        self.path.ends_with(SEPARATOR)
    }

    /// Segments of the directory that relative references are anchored at.
    /// For a file-like path this drops the file name.
    pub fn directory_segments(&self) -> Vec<&'a str> {
        let mut segments = self.segments();
        if !self.is_directory() {
            segments.pop();
        }
        segments
    }

    /// Relative reference from this path's directory to `dest`.
    ///
    /// Panics if `dest` is directory-like.
    pub fn relative(&self, dest: &VirtualPath<'_>) -> String {
        Relativizer::new().relative(self, dest)
    }

    pub fn try_relative(&self, dest: &VirtualPath<'_>) -> Result<String, Error> {
        Relativizer::new().try_relative(self, dest)
    }

    /// Resolves a relative `reference` against this path's directory.
    ///
    /// Each `..` pops one segment (never above the root) and `.` is skipped.
    /// The result keeps a trailing `/` when `reference` is directory-like.
    pub fn resolve(&self, reference: &str) -> String {
        let reference = VirtualPath::new(reference);
        let mut stack: Vec<&str> = self.directory_segments();

        for segment in reference.segments() {
            match segment {
                PARENT_SEGMENT => {
                    stack.pop();
                }
                CURRENT_SEGMENT => {}
                _ => stack.push(segment),
            }
        }

        let mut resolved = stack.join("/");
        if reference.is_directory() && !resolved.is_empty() {
            resolved.push(SEPARATOR);
        }
        log::debug!("resolve({}, {}) = {:?}", self, reference, resolved);
        resolved
    }
}

impl<'a> From<&'a str> for VirtualPath<'a> {
    fn from(path: &'a str) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for VirtualPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path)
    }
}
