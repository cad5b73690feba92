//! Local mirror rules for the publication collection.
//!
//! | Operation | Effect                                  |
//! |-----------|-----------------------------------------|
//! | add       | new record goes first                   |
//! | edit      | record with the same id is replaced     |
//! | delete    | every record with the id is removed     |

use shared_types::{Publication, PublicationId};

pub fn prepend(items: &mut Vec<Publication>, publication: Publication) {
    items.insert(0, publication);
}

/// Returns `false` when no record carries the id; the collection is then
/// left untouched.
pub fn replace_by_id(items: &mut [Publication], publication: Publication) -> bool {
    match items.iter_mut().find(|p| p.id == publication.id) {
        Some(slot) => {
            *slot = publication;
            true
        }
        None => false,
    }
}

/// Number of records removed.
pub fn remove_by_id(items: &mut Vec<Publication>, id: PublicationId) -> usize {
    let before = items.len();
    items.retain(|p| p.id != id);
    before - items.len()
}
