/// Number of digits in a secret or a guess.
pub const NUMBER_LENGTH: usize = 4;

/// Smallest and largest numbers a secret can take.
pub const MIN_NUMBER: u16 = 1000;
pub const MAX_NUMBER: u16 = 9999;

/// Total count of well-formed guesses (leading digit 1-9).
pub const CANDIDATE_COUNT: usize = (MAX_NUMBER - MIN_NUMBER + 1) as usize;

/// Maximum number of times kept on the leaderboard.
pub const LEDGER_CAPACITY: usize = 10;

/// Width used when centring console text.
pub const CENTER_WIDTH: usize = 80;

/// Score file used when none is given on the command line.
pub const DEFAULT_SCORE_FILE: &str = "highscore.txt";
