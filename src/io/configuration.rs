//! Engine constants and runtime configuration defaults

// Safety limit so rows * cols stays small enough to allocate
/// Maximum allowed grid dimension on either axis
pub const MAX_GRID_DIMENSION: usize = 10_000;

/// Rows of the default board
pub const DEFAULT_ROWS: usize = 3;
/// Columns of the default board
pub const DEFAULT_COLS: usize = 7;

// Dictionary loading
/// Word list read when none is given
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";
/// Lines must be strictly longer than this to be inserted
pub const MIN_DICTIONARY_WORD_LENGTH: usize = 2;

// Progress display settings
/// Lines read between status message refreshes
pub const DICTIONARY_PROGRESS_INTERVAL: usize = 1_000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Default values for configurable parameters
/// Fixed seed for reproducible random boards
pub const DEFAULT_SEED: u64 = 42;

/// Placeholder accepted in board strings for an empty cell
pub const EMPTY_CELL_PLACEHOLDER: char = '.';
