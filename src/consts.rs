/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of months in a year, and length of every month-name table
pub const MONTHS_PER_YEAR: usize = 12;

/// Years in a century, also the upper bound (exclusive) of a two-digit year
pub const YEARS_PER_CENTURY: u16 = 100;

/// Year/month separator of the canonical `YYYY-MM` value
pub const CANONICAL_SEPARATOR: char = '-';

/// Range separator used when displaying a `MonthRange`
pub const RANGE_SEPARATOR: char = '/';

/// Literal characters allowed between tokens in a format template
pub const TEMPLATE_SEPARATORS: [char; 4] = ['.', '/', '-', ' '];

/// Four-digit year token
pub const TOKEN_FULL_YEAR: &str = "YYYY";
/// Two-digit year token
pub const TOKEN_SHORT_YEAR: &str = "YY";
/// Full month name token
pub const TOKEN_LONG_MONTH: &str = "MMMM";
/// Abbreviated month name token
pub const TOKEN_SHORT_MONTH: &str = "MMM";
/// Zero-padded numeric month token
pub const TOKEN_PADDED_MONTH: &str = "MM";
/// Unpadded numeric month token
pub const TOKEN_MONTH: &str = "M";

/// Formats used when a locale configures none. The first one is the output format.
pub const FALLBACK_FORMATS: [&str; 2] = ["M/YYYY", "MM/YYYY"];

/// English month names, January first
pub const ENGLISH_MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Abbreviated English month names, January first
pub const ENGLISH_SHORT_MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
