//! Tests for cell coordinates and cell contents

#[cfg(test)]
mod tests {
    use hexword::{Cell, CellIndex};
    use std::collections::HashSet;

    // Tests letters are case-folded and everything else is empty
    // Verified by accepting any alphabetic character
    #[test]
    fn test_cell_from_char() {
        assert_eq!(Cell::from_char('a'), Cell::Letter('a'));
        assert_eq!(Cell::from_char('Z'), Cell::Letter('z'));
        assert_eq!(Cell::from_char('.'), Cell::Empty);
        assert_eq!(Cell::from_char('7'), Cell::Empty);
        assert_eq!(Cell::from_char(' '), Cell::Empty);
        assert_eq!(Cell::from_char('é'), Cell::Empty);
        assert_eq!(Cell::from('Q'), Cell::Letter('q'));
    }

    // Tests letter extraction and emptiness
    // Verified by returning a placeholder for empty cells
    #[test]
    fn test_cell_letter() {
        assert_eq!(Cell::Letter('m').letter(), Some('m'));
        assert_eq!(Cell::Empty.letter(), None);
        assert!(Cell::Empty.is_empty());
        assert!(!Cell::Letter('m').is_empty());
        assert_eq!(Cell::default(), Cell::Empty);
    }

    // Tests coordinates hash and compare by value
    // Verified by hashing only the row
    #[test]
    fn test_cell_index_as_key() {
        let mut seen = HashSet::new();
        assert!(seen.insert(CellIndex::new(1, 2)));
        assert!(!seen.insert(CellIndex::new(1, 2)));
        assert!(seen.insert(CellIndex::new(2, 1)));
        assert!(CellIndex::new(0, 5) < CellIndex::new(1, 0));
    }

    // Tests signed offsets stop at zero
    // Verified by wrapping negative results
    #[test]
    fn test_cell_index_offset() {
        let index = CellIndex::new(1, 0);
        assert_eq!(index.offset((1, 1)), Some(CellIndex::new(2, 1)));
        assert_eq!(index.offset((-1, 0)), Some(CellIndex::ZERO));
        assert_eq!(index.offset((0, -1)), None);
        assert_eq!(CellIndex::ZERO.offset((-1, 0)), None);
    }

    // Tests ROW,COL parsing and rejection of malformed text
    // Verified by swapping row and column
    #[test]
    fn test_cell_index_from_str() {
        assert_eq!("2,3".parse::<CellIndex>().unwrap(), CellIndex::new(2, 3));
        assert_eq!(" 0 , 4 ".parse::<CellIndex>().unwrap(), CellIndex::new(0, 4));
        assert!("23".parse::<CellIndex>().is_err());
        assert!("-1,2".parse::<CellIndex>().is_err());
        assert!("a,b".parse::<CellIndex>().is_err());
    }

    // Tests display formatting
    #[test]
    fn test_cell_index_display() {
        assert_eq!(CellIndex::new(4, 7).to_string(), "(4, 7)");
    }
}
