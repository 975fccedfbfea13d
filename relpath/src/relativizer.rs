use std::iter;

use crate::error::Error;
use crate::path::{PARENT_SEGMENT, VirtualPath};

/// Computes relative references between virtual paths.
///
/// By default the destination must be file-like. Passing a directory-like
/// destination is a caller bug: `relative` panics, `try_relative` returns
/// [`Error::InvalidDestinationKind`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Relativizer {
    allow_directory_destination: bool,
}

impl Relativizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept directory-like destinations. The result then ends with `/`
    /// unless it is empty.
    pub fn allow_directory_destination(mut self, allow: bool) -> Self {
        self.allow_directory_destination = allow;
        self
    }

    pub fn relative(&self, base: &VirtualPath<'_>, dest: &VirtualPath<'_>) -> String {
        if let Err(err) = self.check_destination(dest) {
            log::error!("{}", err);
            panic!("{}", err);
        }
        self.build(base, dest)
    }

    pub fn try_relative(
        &self,
        base: &VirtualPath<'_>,
        dest: &VirtualPath<'_>,
    ) -> Result<String, Error> {
        self.check_destination(dest)?;
        Ok(self.build(base, dest))
    }

    fn check_destination(&self, dest: &VirtualPath<'_>) -> Result<(), Error> {
        if dest.is_directory() && !self.allow_directory_destination {
            return Err(Error::InvalidDestinationKind {
                path: dest.as_str().to_string(),
            });
        }
        Ok(())
    }

    fn build(&self, base: &VirtualPath<'_>, dest: &VirtualPath<'_>) -> String {
        let base_segments = base.directory_segments();
        let dest_segments = dest.segments();

        // Lowest common ancestor
        let common_len = base_segments
            .iter()
            .zip(&dest_segments)
            .take_while(|(b, d)| b == d)
            .count();

        let ups = base_segments.len() - common_len;
        let mut result: Vec<&str> = Vec::with_capacity(ups + dest_segments.len() + 1);
        result.extend(iter::repeat_n(PARENT_SEGMENT, ups));
        result.extend(&dest_segments[common_len..]);
        if dest.is_directory() {
            // Empty trailing segment makes the join end with '/'.
            result.push("");
        }

        let relative = result.join("/");
        log::debug!("relative({}, {}) = {:?}", base, dest, relative);
        relative
    }
}
