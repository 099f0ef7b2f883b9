//! The example element type for the demos: a plain contact-book record.

use core::fmt;

/// A contact-book entry. Three owned strings, no interesting semantics —
/// it exists to show the buffer holding a non-`Copy` struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub surname: String,
    pub name: String,
    pub phone: String,
}

impl Contact {
    pub fn new(surname: &str, name: &str, phone: &str) -> Self {
        Contact {
            surname: surname.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.surname, self.name, self.phone)
    }
}
