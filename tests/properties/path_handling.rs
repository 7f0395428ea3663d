//! Property tests for path canonicalization.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use themesync::domain::value_objects::path::{absolutize, is_within, normalize_path, to_slash};

fn path_string() -> impl Strategy<Value = String> {
    let segment = prop_oneof![
        Just(".".to_string()),
        Just("..".to_string()),
        proptest::string::string_regex("[A-Za-z0-9._-]{1,8}").unwrap(),
    ];
    (any::<bool>(), proptest::collection::vec(segment, 0..8)).prop_map(|(absolute, segments)| {
        let joined = segments.join("/");
        if absolute {
            format!("/{joined}")
        } else {
            joined
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: normalization never panics on arbitrary input.
    #[test]
    fn property_normalize_never_panics(
        s in "(?s).{0,256}"
    ) {
        let _ = normalize_path(Path::new(&s));
        let _ = to_slash(Path::new(&s));
    }

    /// PROPERTY: normalization is idempotent and leaves no `.` components.
    #[test]
    fn property_normalize_is_idempotent(
        s in path_string()
    ) {
        let once = normalize_path(Path::new(&s));
        prop_assert_eq!(normalize_path(&once), once.clone());
        if once != Path::new(".") {
            prop_assert!(!once.components().any(|c| c == std::path::Component::CurDir));
        }
    }

    /// PROPERTY: absolute results never keep a `..` component.
    #[test]
    fn property_absolutize_resolves_parent_dirs(
        s in path_string()
    ) {
        let abs = absolutize(Path::new("/theme"), Path::new(&s));
        prop_assert!(abs.is_absolute());
        prop_assert!(!abs.components().any(|c| c == std::path::Component::ParentDir));
    }

    /// PROPERTY: `is_within` is strict: a path is never within itself.
    #[test]
    fn property_is_within_is_irreflexive(
        s in path_string()
    ) {
        let p = PathBuf::from(&s);
        prop_assert!(!is_within(&p, &p));
    }
}
