//! Keeps the unit test tree in step with `src/` and its module declarations

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC: &str = "src";
    const UNIT: &str = "tests/unit";

    // Crate roots and module lists carry no behavior of their own
    fn is_harness(path: &Path) -> bool {
        matches!(
            path.file_name().and_then(|name| name.to_str()),
            Some("main.rs" | "lib.rs" | "mod.rs")
        )
    }

    /// Every `.rs` file under `root`, relative to it
    fn rust_files(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path.strip_prefix(root).map_err(io::Error::other)?;
                    files.insert(relative.to_path_buf());
                }
            }
        }

        Ok(files)
    }

    fn behavior_files(root: &str) -> BTreeSet<PathBuf> {
        rust_files(Path::new(root))
            .unwrap_or_else(|error| unreachable!("cannot scan {root}: {error}"))
            .into_iter()
            .filter(|path| !is_harness(path))
            .collect()
    }

    fn subdirectories(root: &Path) -> BTreeSet<String> {
        fs::read_dir(root)
            .unwrap_or_else(|error| unreachable!("cannot list {}: {error}", root.display()))
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_dir())
            .map(|entry| entry.file_name().to_string_lossy().into_owned())
            .collect()
    }

    /// Names declared with `mod name;` or `pub mod name;`
    fn declared_modules(file: &Path) -> BTreeSet<String> {
        fs::read_to_string(file)
            .unwrap_or_else(|error| unreachable!("cannot read {}: {error}", file.display()))
            .lines()
            .map(str::trim)
            .filter_map(|line| line.strip_prefix("pub ").unwrap_or(line).strip_prefix("mod "))
            .filter_map(|rest| rest.strip_suffix(';'))
            .map(str::to_string)
            .collect()
    }

    fn listing<'a>(paths: impl IntoIterator<Item = &'a PathBuf>, prefix: &str) -> String {
        paths
            .into_iter()
            .map(|path| format!("  - {prefix}/{}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests each source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/io/svg.rs
    #[test]
    fn test_every_source_file_has_unit_tests() {
        let sources = behavior_files(SRC);
        let tests = behavior_files(UNIT);
        let missing: Vec<_> = sources.difference(&tests).collect();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            listing(missing, SRC)
        );
    }

    // Tests no unit test file outlives its source file
    // Verified by adding tests/unit/shape/stale.rs
    #[test]
    fn test_every_unit_test_has_a_source_file() {
        let sources = behavior_files(SRC);
        let tests = behavior_files(UNIT);
        let orphaned: Vec<_> = tests.difference(&sources).collect();

        assert!(
            orphaned.is_empty(),
            "Unit tests with no source file:\n{}",
            listing(orphaned, UNIT)
        );
    }

    // Tests each source area is a module of both the crate and the unit harness
    // Verified by dropping `mod random;` from tests/unit/main.rs
    #[test]
    fn test_every_area_is_declared() {
        let areas = subdirectories(Path::new(SRC));
        assert!(!areas.is_empty());

        for root in ["src/lib.rs", "tests/unit/main.rs"] {
            let declared = declared_modules(Path::new(root));
            let undeclared: Vec<_> = areas.difference(&declared).collect();
            assert!(undeclared.is_empty(), "{root} does not declare: {undeclared:?}");
        }
    }

    // Tests each unit test directory compiles every file it holds
    // Verified by removing `mod svg;` from tests/unit/io/mod.rs
    #[test]
    fn test_unit_module_lists_are_complete() {
        for area in subdirectories(Path::new(UNIT)) {
            let dir = Path::new(UNIT).join(&area);
            let declared = declared_modules(&dir.join("mod.rs"));

            let files: BTreeSet<String> = behavior_files(UNIT)
                .iter()
                .filter(|path| path.parent() == Some(Path::new(&area)))
                .filter_map(|path| path.file_stem())
                .map(|stem| stem.to_string_lossy().into_owned())
                .collect();

            let undeclared: Vec<_> = files.difference(&declared).collect();
            assert!(
                undeclared.is_empty(),
                "{}/mod.rs does not declare: {undeclared:?}",
                dir.display()
            );
        }
    }

    // Tests test files outside the harness roots define at least one test
    // Verified by stripping #[test] from tests/generation.rs
    #[test]
    fn test_every_test_file_has_tests() {
        let empty: Vec<PathBuf> = behavior_files("tests")
            .into_iter()
            .filter(|path| {
                let full = Path::new("tests").join(path);
                let content = fs::read_to_string(&full).unwrap_or_else(|error| {
                    unreachable!("cannot read {}: {error}", full.display());
                });
                !content.contains("#[test]")
            })
            .collect();

        assert!(
            empty.is_empty(),
            "Test files without #[test] functions:\n{}",
            listing(&empty, "tests")
        );
    }
}
