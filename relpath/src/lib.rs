pub mod error;
pub mod path;
pub mod relativizer;

pub use error::Error;
pub use path::VirtualPath;
pub use relativizer::Relativizer;

/// Relative path from the directory of `base` to the file `dest`.
///
/// Panics if `dest` ends with `/`.
pub fn relative_path(base: &str, dest: &str) -> String {
    VirtualPath::new(base).relative(&VirtualPath::new(dest))
}
