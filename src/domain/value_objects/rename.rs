//! Rename value object
//!
//! A rule may rename the files it copies, either to a fixed file name or to
//! a name computed from the source file.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Signature of a computed rename: `(file_name, extension, full_source_path)`.
///
/// `file_name` includes the extension; `extension` has no leading dot and is
/// empty when the file has none.
pub type RenameFn = dyn Fn(&str, &str, &Path) -> String + Send + Sync;

/// How a rule names its destination files.
#[derive(Clone)]
pub enum Rename {
    /// Every matched file is written under this one name
    Fixed(String),
    /// Name computed per source file
    Computed(Arc<RenameFn>),
}

impl Rename {
    pub fn fixed(name: impl Into<String>) -> Self {
        Rename::Fixed(name.into())
    }

    pub fn computed<F>(f: F) -> Self
    where
        F: Fn(&str, &str, &Path) -> String + Send + Sync + 'static,
    {
        Rename::Computed(Arc::new(f))
    }

    /// Build a computed rename from a template.
    ///
    /// Placeholders: `{base}` (file name), `{stem}` (file name without
    /// extension), `{ext}` (extension without dot).
    pub fn template(template: impl Into<String>) -> Self {
        let template = template.into();
        Rename::computed(move |base, ext, source| {
            let stem = source
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| base.to_string());
            template
                .replace("{base}", base)
                .replace("{stem}", &stem)
                .replace("{ext}", ext)
        })
    }

    /// Compute the destination file name for `source`.
    pub fn apply(&self, source: &Path) -> String {
        match self {
            Rename::Fixed(name) => name.clone(),
            Rename::Computed(f) => {
                let base = source
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let ext = source
                    .extension()
                    .map(|e| e.to_string_lossy().into_owned())
                    .unwrap_or_default();
                f(&base, &ext, source)
            }
        }
    }
}

impl fmt::Debug for Rename {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rename::Fixed(name) => f.debug_tuple("Fixed").field(name).finish(),
            Rename::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_ignores_source() {
        let rename = Rename::fixed("robots.txt");
        assert_eq!(rename.apply(Path::new("/src/robots.prod.txt")), "robots.txt");
    }

    #[test]
    fn computed_receives_base_ext_and_path() {
        let rename = Rename::computed(|base, ext, path| {
            format!("{base}|{ext}|{}", path.display())
        });
        assert_eq!(
            rename.apply(Path::new("/src/icons/icon-arrow.svg")),
            "icon-arrow.svg|svg|/src/icons/icon-arrow.svg"
        );
    }

    #[test]
    fn computed_without_extension() {
        let rename = Rename::computed(|base, ext, _| format!("{base}.{ext}"));
        assert_eq!(rename.apply(Path::new("/src/LICENSE")), "LICENSE.");
    }

    #[test]
    fn template_placeholders() {
        let rename = Rename::template("{base}.liquid");
        assert_eq!(
            rename.apply(Path::new("/src/icons/icon-arrow.svg")),
            "icon-arrow.svg.liquid"
        );

        let rename = Rename::template("{stem}-v2.{ext}");
        assert_eq!(rename.apply(Path::new("/src/a.tar.gz")), "a.tar-v2.gz");
    }
}
