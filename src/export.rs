//! CSV flattening for entity lists
//!
//! Fixed headers, one row per entity. Commas inside text fields are
//! replaced with spaces; there is no further quoting or escaping.

use crate::models::{Book, Member};

fn field(value: &str) -> String {
    value.replace(',', " ")
}

pub fn books_to_csv(books: &[Book]) -> String {
    let mut out = String::from("bookId,title,author,genre,availableCopies\n");
    for book in books {
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            book.id,
            field(&book.title),
            field(&book.author),
            field(&book.genre),
            book.available_copies
        ));
    }
    out
}

pub fn members_to_csv(members: &[Member]) -> String {
    let mut out = String::from("memberId,name,email,phone\n");
    for member in members {
        out.push_str(&format!(
            "{},{},{},{}\n",
            member.id,
            field(&member.name),
            field(&member.email),
            field(&member.phone)
        ));
    }
    out
}
