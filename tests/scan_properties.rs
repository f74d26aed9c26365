mod fixtures;

use code_scan::discovery::filter::{has_code_suffix, should_exclude_dir};
use code_scan::scan;
use fixtures::Tree;
use proptest::prelude::*;

const DIR_NAMES: &[&str] = &["src", "lib", "build", "node_modules", ".hidden", "pkg", "tmp"];
const FILE_NAMES: &[&str] = &[
    "main.rs", "app.py", "index.JS", "notes.txt", "logo.png", "Makefile", "style.css", ".py",
];

fn entry() -> impl Strategy<Value = (Vec<&'static str>, &'static str)> {
    (
        prop::collection::vec(prop::sample::select(DIR_NAMES), 0..3),
        prop::sample::select(FILE_NAMES),
    )
}

fn build(entries: &[(Vec<&'static str>, &'static str)]) -> (Tree, Vec<String>) {
    let tree = Tree::new();
    let mut expected = Vec::new();
    for (dirs, name) in entries {
        let mut parts = dirs.clone();
        parts.push(*name);
        let relative = parts.join("/");
        tree.file(&relative, 4);
        if dirs.iter().all(|d| !should_exclude_dir(d)) && has_code_suffix(name) {
            expected.push(relative);
        }
    }
    expected.sort();
    expected.dedup();
    (tree, expected)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn result_matches_model(entries in prop::collection::vec(entry(), 0..12)) {
        let (tree, expected) = build(&entries);
        let files = scan(tree.root(), None).unwrap();
        prop_assert_eq!(files, expected);
    }

    #[test]
    fn bounded_result_is_sorted_prefix(
        entries in prop::collection::vec(entry(), 0..12),
        max_files in 0usize..6,
    ) {
        let (tree, expected) = build(&entries);
        let files = scan(tree.root(), Some(max_files)).unwrap();

        prop_assert_eq!(files.len(), max_files.min(expected.len()));
        prop_assert_eq!(&files[..], &expected[..files.len()]);
        prop_assert!(files.windows(2).all(|w| w[0] < w[1]));
    }
}
