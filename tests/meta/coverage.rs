//! Checks that `tests/unit` mirrors `src` one file per module

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_ROOT: &str = "src";
    const UNIT_ROOT: &str = "tests/unit";
    const TESTS_ROOT: &str = "tests";

    // Directories and `.rs` files under `root`, relative to it
    fn mirrored_paths(root: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut found = BTreeSet::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(root)
                    .map_err(io::Error::other)?
                    .to_path_buf();
                if path.is_dir() {
                    pending.push(path);
                    found.insert(relative);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    found.insert(relative);
                }
            }
        }

        Ok(found)
    }

    fn is_wiring(path: &Path) -> bool {
        path.file_name()
            .is_some_and(|name| name == "mod.rs" || name == "lib.rs" || name == "main.rs")
    }

    fn report(header: &str, paths: &[String]) -> String {
        format!("{header}:\n{}", paths.join("\n"))
    }

    // Tests every source module has a unit test file at the same path
    // Verified by deleting tests/unit/layout/plan.rs
    #[test]
    fn test_sources_have_unit_tests() {
        let sources = mirrored_paths(Path::new(SRC_ROOT)).unwrap();
        let units = mirrored_paths(Path::new(UNIT_ROOT)).unwrap();

        let missing: Vec<String> = sources
            .iter()
            .filter(|path| !is_wiring(path) && !units.contains(*path))
            .map(|path| format!("  - src/{0} -> tests/unit/{0}", path.display()))
            .collect();

        assert!(
            missing.is_empty(),
            "{}",
            report("Source files without unit tests", &missing)
        );
    }

    // Tests every unit test file still has a source module
    // Verified by adding tests/unit/layout/stale.rs
    #[test]
    fn test_unit_tests_have_sources() {
        let sources = mirrored_paths(Path::new(SRC_ROOT)).unwrap();
        let units = mirrored_paths(Path::new(UNIT_ROOT)).unwrap();

        let orphaned: Vec<String> = units
            .iter()
            .filter(|path| !is_wiring(path) && !sources.contains(*path))
            .map(|path| format!("  - tests/unit/{0} (no src/{0})", path.display()))
            .collect();

        assert!(
            orphaned.is_empty(),
            "{}",
            report("Unit test files without a source module", &orphaned)
        );
    }

    // Tests no test file is left without a #[test] function
    // Verified by emptying tests/unit/io/progress.rs
    #[test]
    fn test_test_files_contain_tests() {
        let tests_root = Path::new(TESTS_ROOT);
        let mut empty = Vec::new();

        for relative in mirrored_paths(tests_root).unwrap() {
            let path = tests_root.join(&relative);
            let top_level_main = relative == Path::new("main.rs");
            let module_wiring = relative.file_name().is_some_and(|name| name == "mod.rs");
            if path.is_dir() || top_level_main || module_wiring {
                continue;
            }

            let content = fs::read_to_string(&path).unwrap();
            if !content.contains("#[test]") {
                empty.push(format!("  - {}", path.display()));
            }
        }

        assert!(
            empty.is_empty(),
            "{}",
            report("Test files without #[test] functions", &empty)
        );
    }

    // Tests unit test files keep their tests behind #[cfg(test)]
    // Verified by removing the attribute from one file
    #[test]
    fn test_unit_tests_are_cfg_gated() {
        let units_root = Path::new(UNIT_ROOT);
        let ungated: Vec<String> = mirrored_paths(units_root)
            .unwrap()
            .into_iter()
            .map(|relative| units_root.join(relative))
            .filter(|path| path.is_file() && !is_wiring(path))
            .filter(|path| {
                fs::read_to_string(path).is_ok_and(|content| !content.contains("#[cfg(test)]"))
            })
            .map(|path| format!("  - {}", path.display()))
            .collect();

        assert!(
            ungated.is_empty(),
            "{}",
            report("Unit test files without #[cfg(test)]", &ungated)
        );
    }
}
