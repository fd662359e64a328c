//! Regular expressions shared by record validation and console input.
//!
//! Patterns are matched against the whole value, so they carry no anchors.

/// RUT: 7 or 8 digits, a dash, and a check digit or `k`.
pub const RUT: &str = r"[0-9]{7,8}-[0-9kK]";

/// Phone stored on a client record: optional `+`, then 8 to 15 digits.
pub const CLIENT_PHONE: &str = r"\+?[0-9]{8,15}";

/// Phone typed at the console: 9 digits, no country prefix.
pub const LOCAL_PHONE: &str = r"[0-9]{9}";

/// Person name: letters (Spanish accents and ñ included) in words separated
/// by single spaces.
pub const PERSON_NAME: &str = r"[A-Za-zÁÉÍÓÚáéíóúÑñ]+(?: [A-Za-zÁÉÍÓÚáéíóúÑñ]+)*";

pub const EMAIL: &str = r"[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,6}";
