//! Asserts the tests/unit tree mirrors the src tree in both directions

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files carry no testable surface
    fn is_exempt(path: &str) -> bool {
        path == "main.rs" || path == "lib.rs" || path.ends_with("mod.rs")
    }

    fn tree_paths(root: &str) -> HashSet<String> {
        fn walk(dir: &Path, base: &Path, paths: &mut HashSet<String>) -> Result<(), io::Error> {
            for entry in fs::read_dir(dir)? {
                let path = entry?.path();
                let relative = path
                    .strip_prefix(base)
                    .map_err(|_error| io::Error::other("path escaped the tree root"))?
                    .to_string_lossy()
                    .to_string();

                if path.is_dir() {
                    paths.insert(relative);
                    walk(&path, base, paths)?;
                } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                    paths.insert(relative);
                }
            }
            Ok(())
        }

        let base = Path::new(root);
        let mut paths = HashSet::new();
        if base.is_dir() {
            walk(base, base, &mut paths).unwrap_or_else(|error| {
                unreachable!("failed to walk {root}: {error}");
            });
        }
        paths
    }

    #[test]
    fn test_every_src_file_has_a_unit_test() {
        let src_paths = tree_paths(SRC_DIR);
        let test_paths = tree_paths(UNIT_DIR);

        let missing: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_exempt(path) && !test_paths.contains(*path))
            .collect();

        assert!(
            missing.is_empty(),
            "src files without unit test counterparts:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> tests/unit/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    #[test]
    fn test_every_unit_test_has_a_src_file() {
        let src_paths = tree_paths(SRC_DIR);
        let test_paths = tree_paths(UNIT_DIR);

        let orphaned: Vec<&String> = test_paths
            .iter()
            .filter(|path| !path.ends_with("mod.rs") && !src_paths.contains(*path))
            .collect();

        assert!(
            orphaned.is_empty(),
            "unit test files without src counterparts:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - tests/unit/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }
}
