#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Number of levels a player must finish before a certificate can be issued.
pub const REQUIRED_LEVELS: usize = 5;

/// Smallest star award accepted for a completed level.
pub const MIN_STARS: i32 = 1;

/// Largest star award accepted for a completed level.
pub const MAX_STARS: i32 = 3;

/// Titles of the game levels, indexed by `level - 1`.
pub const LEVEL_TITLES: [&str; REQUIRED_LEVELS] = [
    "Dunia Digital",
    "Negeri Pythonia",
    "Webtopia",
    "Applandia",
    "Robotron",
];
