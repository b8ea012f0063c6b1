// Enumeration through the public API with the default exclusions

use rerun_watch::{files, CommandLine, WatchConfig};
use std::path::Path;

mod common;

fn config_for(root: &Path) -> WatchConfig {
	WatchConfig::new(CommandLine::new(vec!["true".to_string()]).unwrap()).with_root(root)
}

#[test]
fn test_default_exclusions_leave_only_sources() {
	let temp_dir = common::setup_temp_dir();
	let root = temp_dir.path();
	for rel in ["a.txt", "obj/x", "bin/y", ".git/z", ".mypy_cache/w"] {
		common::create_test_file(&root.join(rel), rel).unwrap();
	}

	let config = config_for(root);
	config.validate().unwrap();
	let watched = files::enumerate(&config.root, &config.excluded_dirs).unwrap();

	assert_eq!(watched.paths(), &[root.join("a.txt")][..]);
}

#[test]
fn test_enumeration_order_is_stable() {
	let temp_dir = common::setup_temp_dir();
	let root = temp_dir.path();
	for rel in ["z.rs", "a/b.rs", "a/a.rs", "m.rs"] {
		common::create_test_file(&root.join(rel), "").unwrap();
	}

	let config = config_for(root);
	let first = files::enumerate(&config.root, &config.excluded_dirs).unwrap();
	let second = files::enumerate(&config.root, &config.excluded_dirs).unwrap();

	let expected: Vec<_> = ["a/a.rs", "a/b.rs", "m.rs", "z.rs"].iter().map(|r| root.join(r)).collect();
	assert_eq!(first.paths(), &expected[..]);
	assert_eq!(first.paths(), second.paths());
}

#[test]
fn test_files_created_later_are_not_added() {
	let temp_dir = common::setup_temp_dir();
	let root = temp_dir.path();
	common::create_test_file(&root.join("early.txt"), "").unwrap();

	let config = config_for(root);
	let watched = files::enumerate(&config.root, &config.excluded_dirs).unwrap();
	common::create_test_file(&root.join("late.txt"), "").unwrap();

	assert_eq!(watched.len(), 1);
	assert!(!watched.contains(&root.join("late.txt")));
}
