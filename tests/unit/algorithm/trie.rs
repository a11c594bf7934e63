//! Tests for trie insertion, membership and token traversal

#[cfg(test)]
mod tests {
    use hexword::{Trie, TrieToken};

    fn sample_trie() -> Trie {
        let mut trie = Trie::new();
        trie.insert("dog");
        trie.insert("car");
        trie.insert("dogfood");
        trie.insert("doggerel");
        trie
    }

    fn advance_all<'a>(token: TrieToken<'a>, letters: &str) -> Option<TrieToken<'a>> {
        letters.chars().try_fold(token, TrieToken::advance)
    }

    // Tests inserted words are found and prefixes or extensions are not
    // Verified by marking every node on the path as a word
    #[test]
    fn test_insertion_and_contains() {
        let mut trie = sample_trie();

        for word in ["dog", "car", "dogfood", "doggerel"] {
            assert!(trie.contains(word), "{word} should be present");
        }
        for word in [
            "cat",
            "do",
            "dogg",
            "dogxx",
            "dof",
            "dogfoodxx",
            "doggerelxx",
            "",
        ] {
            assert!(!trie.contains(word), "{word} should be absent");
        }

        trie.insert("dogg");
        assert!(trie.contains("dogg"));
        assert!(trie.contains("doggerel"));
    }

    // Tests insertion and lookup are case-insensitive
    // Verified by removing lowercase folding on insert
    #[test]
    fn test_case_folding() {
        let mut trie = Trie::new();
        trie.insert("Hello");

        assert!(trie.contains("hello"));
        assert!(trie.contains("HELLO"));
        assert!(trie.start_search().advance('H').is_none());
        assert!(trie.start_search().advance('h').is_some());
    }

    // Tests repeated insertion is idempotent
    // Verified by counting every insert call
    #[test]
    fn test_insert_idempotent() {
        let mut trie = Trie::new();
        assert!(trie.is_empty());
        assert!(trie.insert("word"));
        assert!(!trie.insert("word"));
        assert!(!trie.insert("WORD"));
        assert_eq!(trie.len(), 1);
        assert!(trie.contains("word"));
    }

    // Tests token traversal in the middle, at the end of and past a word
    // Verified by returning the parent token on a missing child
    #[test]
    fn test_token_search() {
        let trie = sample_trie();
        let search = trie.start_search();

        assert!(search.advance('a').is_none());
        assert!(!search.is_word());

        let d = search.advance('d').unwrap();
        assert!(!d.is_word());
        let dog = advance_all(d, "og").unwrap();
        assert!(dog.is_word());

        assert!(dog.advance('x').is_none());

        let dogfoo = advance_all(dog, "foo").unwrap();
        assert!(!dogfoo.is_word());
        let dogfood = dogfoo.advance('d').unwrap();
        assert!(dogfood.is_word());
        assert!(dogfood.advance('f').is_none());
        assert_eq!(dogfood.node().child_count(), 0);
    }

    // Tests tokens derived from one trie do not interfere
    // Verified by sharing a mutable cursor between tokens
    #[test]
    fn test_tokens_are_independent() {
        let trie = sample_trie();
        let root = trie.start_search();

        let d = root.advance('d').unwrap();
        let c = root.advance('c').unwrap();
        let copy = d;

        assert!(advance_all(d, "og").unwrap().is_word());
        assert!(advance_all(c, "ar").unwrap().is_word());
        assert!(advance_all(copy, "og").unwrap().is_word());
        assert!(advance_all(root, "dog").unwrap().is_word());
    }

    // Tests building from an iterator
    // Verified by skipping the last word
    #[test]
    fn test_from_iterator_and_extend() {
        let mut trie: Trie = ["alpha", "beta"].into_iter().collect();
        trie.extend(vec![String::from("gamma")]);

        assert_eq!(trie.len(), 3);
        assert!(trie.contains("alpha"));
        assert!(trie.contains("beta"));
        assert!(trie.contains("gamma"));
    }

    // Tests tries can be shared across threads once built
    #[test]
    fn test_trie_shared_across_threads() {
        let trie = sample_trie();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| trie.contains("doggerel")))
                .collect();
            for handle in handles {
                assert!(handle.join().unwrap());
            }
        });
    }
}
