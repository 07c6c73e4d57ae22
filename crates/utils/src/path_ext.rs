use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Extends paths with the sibling file naming convention used by TOPAS
pub trait PathExt {
    /// Append a literal suffix to the full path
    ///
    /// Unlike `with_extension` nothing is replaced, so this gives the binary
    /// scorer header naming convention.
    ///
    /// ```rust
    /// # use topas_utils::PathExt;
    /// # use std::path::{Path, PathBuf};
    /// let path = Path::new("results/Dose.bin");
    /// assert_eq!(path.with_suffix("header"), PathBuf::from("results/Dose.binheader"));
    /// ```
    fn with_suffix(&self, suffix: &str) -> PathBuf;
}

impl<T: AsRef<Path>> PathExt for T {
    fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut path = OsString::from(self.as_ref().as_os_str());
        path.push(suffix);
        PathBuf::from(path)
    }
}
