//! Constants used throughout sheetplate

/// Configuration file names in order of preference
pub const CONFIG_FILENAMES: &[&str] =
    &["sheetplate.json", "sheetplate.yaml", "sheetplate.yml"];

/// Placeholder delimiters
pub const PLACEHOLDER_OPEN: &str = "<<";
pub const PLACEHOLDER_CLOSE: &str = ">>";

/// Separates a placeholder key from its fallback text
pub const FALLBACK_SEPARATOR: char = '|';

/// Characters that cannot appear in an exported file name
pub const RESERVED_FILENAME_CHARS: &[char] =
    &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Replacement for reserved file name characters
pub const FILENAME_REPLACEMENT: char = '_';

/// Default width of the zero-padded row index in exported file names
pub const DEFAULT_INDEX_WIDTH: usize = 3;

/// Default extension of exported files
pub const DEFAULT_EXTENSION: &str = ".txt";

/// Default fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// User agent sent with every fetch request
pub const USER_AGENT: &str = concat!("sheetplate/", env!("CARGO_PKG_VERSION"));

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Template written by `sheetplate init`
pub const DEFAULT_TEMPLATE: &str = "*<<title>>*
----
|Item|Value|
|Artist|<<artist>>|
|BPM|<<bpm>>|
|Difficulty|<<difficulty|->>|
----
<<comment|>>
";

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
