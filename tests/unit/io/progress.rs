//! Tests for status and progress display

#[cfg(test)]
mod tests {
    use hexword::io::progress::ProgressManager;
    use std::path::Path;

    // Tests the full dictionary then scan lifecycle runs without panicking
    // Verified by unwrapping a missing bar
    #[test]
    fn test_progress_lifecycle() {
        let mut pm = ProgressManager::new();
        pm.start_dictionary(Path::new("words.txt"));
        pm.update_dictionary(1_000);
        pm.finish_dictionary(42);

        pm.start_scan(21);
        pm.complete_cells(1);
        pm.complete_cells(20);
        pm.finish();
    }

    // Tests the status line keeps the word list path while counting lines
    // Verified by dropping the path from update messages
    #[test]
    fn test_dictionary_status_format() {
        let mut pm = ProgressManager::new();
        assert_eq!(pm.status_message(), None);

        pm.start_dictionary(Path::new("words.txt"));
        assert_eq!(
            pm.status_message().as_deref(),
            Some("Reading word list words.txt...")
        );

        pm.update_dictionary(3_000);
        assert_eq!(
            pm.status_message().as_deref(),
            Some("Reading word list words.txt...3000")
        );

        pm.finish_dictionary(12);
        assert_eq!(pm.status_message(), None);
        pm.finish();
    }

    // Tests updates without started bars are ignored
    // Verified by creating bars lazily on update
    #[test]
    fn test_updates_without_bars() {
        let mut pm = ProgressManager::default();
        pm.update_dictionary(5);
        pm.complete_cells(3);
        pm.finish_dictionary(0);
        pm.finish();
        pm.finish();
    }
}
