/// Extends string types with useful functions for header text
pub trait StringExt {
    /// Removes an optional leading `#` comment marker and surrounding whitespace
    ///
    /// ASCII scorer files prefix every header line with `#`, while the binary
    /// header files do not. Stripping the marker lets one grammar serve both.
    ///
    /// ```rust
    /// # use topas_utils::StringExt;
    /// assert_eq!("# Z in 300 bins of 0.1 cm ".uncomment(), "Z in 300 bins of 0.1 cm");
    /// assert_eq!("Z in 300 bins of 0.1 cm".uncomment(), "Z in 300 bins of 0.1 cm");
    /// ```
    fn uncomment(&self) -> &str;

    /// Checks if the line is a `#` comment
    ///
    /// ```rust
    /// # use topas_utils::StringExt;
    /// assert!("# Results for scorer Dose".is_comment());
    /// assert!(!"0, 0, 1, 2.5".is_comment());
    /// ```
    fn is_comment(&self) -> bool;
}

impl<T: AsRef<str>> StringExt for T {
    fn uncomment(&self) -> &str {
        let s = self.as_ref().trim();
        s.strip_prefix('#').unwrap_or(s).trim()
    }

    fn is_comment(&self) -> bool {
        self.as_ref().starts_with('#')
    }
}
