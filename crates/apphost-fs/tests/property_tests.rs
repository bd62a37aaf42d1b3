use apphost_fs::NormalizedPath;
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_normalized_path_has_no_backslashes(s in "\\PC*") {
        let path = NormalizedPath::new(&s);
        prop_assert!(!path.as_str().contains('\\'));
    }

    #[test]
    fn test_join_keeps_segment_as_suffix(root in "/[a-z]{1,8}(/[a-z]{1,8}){0,3}", name in "[a-z-]{1,12}\\.(json|yaml|lock)") {
        let joined = NormalizedPath::new(&root).join(&name);
        prop_assert!(joined.as_str().ends_with(&name));
        prop_assert_eq!(joined.file_name(), Some(name.as_str()));
    }
}
