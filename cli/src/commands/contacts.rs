//! Bounded storage of a contact-book record type.

use cbuffer::CBuffer;

use super::maybe_observed;
use crate::contact::Contact;

pub fn run(observe: bool) {
    let mut book = maybe_observed(CBuffer::with_capacity(2), observe);
    book.insert(Contact::new("Rossi", "Luca", "5558372"));
    book.insert(Contact::new("Bianchi", "Paolo", "5558372"));
    println!("after two inserts:          {book}");

    book.remove();
    book.insert(Contact::new("Verdi", "Giovanni", "5558372"));
    println!("after remove + insert:      {book}");

    // Overwrite-on-full applies to records exactly as to integers.
    book.insert(Contact::new("Ferrari", "Anna", "5550117"));
    println!("after inserting while full: {book}");
}
