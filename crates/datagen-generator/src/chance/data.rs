//! Word lists used by the named generators.

pub const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &str = "0123456789";
pub const SYMBOLS: &str = "!@#$%^&*()[]";
pub const HEX: &str = "0123456789abcdef";

pub const CONSONANTS: &str = "bcdfghjklmnprstvwz";
pub const VOWELS: &str = "aeiou";

pub const FIRST_NAMES_MALE: &[&str] = &[
    "James", "John", "Robert", "Michael", "William", "David", "Richard", "Joseph", "Charles",
    "Thomas", "Christopher", "Daniel", "Matthew", "Anthony", "Donald", "Mark", "Paul", "Steven",
    "Andrew", "Kenneth", "Joshua", "George", "Kevin", "Brian", "Edward",
];

pub const FIRST_NAMES_FEMALE: &[&str] = &[
    "Mary", "Patricia", "Jennifer", "Elizabeth", "Linda", "Barbara", "Susan", "Jessica", "Sarah",
    "Margaret", "Karen", "Nancy", "Lisa", "Betty", "Dorothy", "Sandra", "Ashley", "Kimberly",
    "Donna", "Emily", "Michelle", "Carol", "Amanda", "Melissa", "Deborah",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Jones", "Brown", "Davis", "Miller", "Wilson", "Moore",
    "Taylor", "Anderson", "Thomas", "Jackson", "White", "Harris", "Martin", "Thompson", "Garcia",
    "Martinez", "Robinson", "Clark", "Rodriguez", "Lewis", "Lee", "Walker", "Hall", "Allen",
    "Young", "Hernandez", "King",
];

pub const PREFIXES_MALE: &[&str] = &["Mr.", "Dr."];
pub const PREFIXES_FEMALE: &[&str] = &["Mrs.", "Miss", "Ms.", "Dr."];

pub const SUFFIXES: &[&str] = &["Jr.", "Sr.", "I", "II", "III", "IV", "V", "PhD", "MD"];

pub const COMPANIES: &[&str] = &[
    "3M", "Abbott Laboratories", "Adobe Systems", "Alcoa", "Amazon.com", "American Express",
    "Apple", "AT&T", "Boeing", "Caterpillar", "Chevron", "Cisco Systems", "Coca-Cola",
    "Colgate-Palmolive", "Dell", "Dow Chemical", "FedEx", "General Electric", "General Motors",
    "Honeywell", "Intel", "Johnson & Johnson", "Lockheed Martin", "Merck", "Microsoft", "Nike",
    "Oracle", "PepsiCo", "Pfizer", "Procter & Gamble", "Texas Instruments", "Walmart",
];

pub const TLDS: &[&str] = &[
    "com", "org", "edu", "gov", "co.uk", "net", "io", "info", "biz", "dev",
];
