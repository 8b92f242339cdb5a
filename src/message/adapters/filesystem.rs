//! Filesystem locator scoped to a single base directory.
//!
//! Locations are resolved relative to a capability-scoped [`Dir`], so a
//! configured location can never reach files outside that directory.

use crate::message::ports::{Locator, LocatorError, LocatorResult, Resource};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io::{self, Read};
use std::sync::Arc;

/// Scheme for resources bundled alongside the application.
const CLASSPATH_SCHEME: &str = "classpath";

/// Scheme for plain file paths.
const FILE_SCHEME: &str = "file";

/// Resolves locations to files under a base directory.
///
/// Accepted forms are `classpath:<path>`, `file:<path>`, and a bare relative
/// path. Leading slashes after `classpath:` are ignored. Resolution does not
/// touch the filesystem: a missing file, or a path that escapes the base
/// directory, is reported when the stream is opened.
#[derive(Debug, Clone)]
pub struct FilesystemLocator {
    root: Arc<Dir>,
}

impl FilesystemLocator {
    /// Opens `path` as the base directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error when the directory cannot be opened.
    pub fn open(path: impl AsRef<Utf8Path>) -> io::Result<Self> {
        let root = Dir::open_ambient_dir(path.as_ref(), ambient_authority())?;
        Ok(Self::from_dir(root))
    }

    /// Uses an already opened directory as the base.
    #[must_use]
    pub fn from_dir(root: Dir) -> Self {
        Self {
            root: Arc::new(root),
        }
    }
}

impl Locator for FilesystemLocator {
    fn resource(&self, location: &str) -> LocatorResult<Box<dyn Resource>> {
        let path = relative_path(location)?;
        Ok(Box::new(FileResource {
            root: Arc::clone(&self.root),
            path,
        }))
    }
}

/// A file under the locator's base directory.
#[derive(Debug)]
struct FileResource {
    root: Arc<Dir>,
    path: Utf8PathBuf,
}

impl Resource for FileResource {
    fn open_stream(&self) -> io::Result<Box<dyn Read + Send>> {
        let file = self.root.open(&self.path)?;
        Ok(Box::new(file))
    }
}

/// Strips a supported scheme prefix from `location`.
fn relative_path(location: &str) -> LocatorResult<Utf8PathBuf> {
    let path = match location.split_once(':') {
        Some((CLASSPATH_SCHEME, rest)) => rest.trim_start_matches('/'),
        Some((FILE_SCHEME, rest)) => rest,
        Some((scheme, _)) if is_scheme(scheme) => {
            return Err(LocatorError::unsupported_scheme(scheme, location));
        }
        _ => location,
    };

    if path.trim().is_empty() {
        return Err(LocatorError::EmptyLocation);
    }
    Ok(Utf8PathBuf::from(path))
}

/// Reports whether `candidate` looks like a URI scheme.
///
/// Single letters are excluded so that drive prefixes such as `C:` are not
/// mistaken for schemes.
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    let starts_alphabetic = chars.next().is_some_and(|ch| ch.is_ascii_alphabetic());
    starts_alphabetic
        && candidate.len() > 1
        && chars.all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::{is_scheme, relative_path};
    use crate::message::ports::LocatorError;
    use rstest::rstest;

    #[rstest]
    #[case("classpath:demoMessages.json", "demoMessages.json")]
    #[case("classpath:/demoMessages.json", "demoMessages.json")]
    #[case("file:data/messages.json", "data/messages.json")]
    #[case("messages.json", "messages.json")]
    #[case("nested/dir/messages.json", "nested/dir/messages.json")]
    fn supported_locations_resolve_to_relative_paths(#[case] location: &str, #[case] expected: &str) {
        let path = relative_path(location).expect("location should resolve");
        assert_eq!(path.as_str(), expected);
    }

    #[rstest]
    #[case("http://example.com/messages.json", "http")]
    #[case("s3:bucket/messages.json", "s3")]
    fn foreign_schemes_are_rejected(#[case] location: &str, #[case] scheme: &str) {
        let result = relative_path(location);
        assert!(
            matches!(result, Err(LocatorError::UnsupportedScheme { scheme: ref s, .. }) if s == scheme),
            "unexpected result: {result:?}"
        );
    }

    #[rstest]
    #[case("")]
    #[case("classpath:")]
    #[case("file:   ")]
    fn empty_locations_are_rejected(#[case] location: &str) {
        assert!(matches!(
            relative_path(location),
            Err(LocatorError::EmptyLocation)
        ));
    }

    #[rstest]
    #[case("C", false)]
    #[case("classpath", true)]
    #[case("svn+ssh", true)]
    #[case("1abc", false)]
    #[case("has space", false)]
    fn scheme_detection(#[case] candidate: &str, #[case] expected: bool) {
        assert_eq!(is_scheme(candidate), expected);
    }
}
