// src/collections.rs

//! Small collection helpers.

/// Copy of `items` without repeats, keeping the first occurrence of each
/// value in its original position.
///
/// Only needs `PartialEq`, so it is quadratic; fine for the short lists it
/// is meant for.
pub fn unique_list<T: PartialEq + Clone>(items: &[T]) -> Vec<T> {
    let mut unique: Vec<T> = Vec::with_capacity(items.len());
    for item in items {
        if !unique.contains(item) {
            unique.push(item.clone());
        }
    }
    unique
}

/// `true` for `None` or an empty slice.
pub fn is_empty<T>(items: Option<&[T]>) -> bool {
    items.is_none_or(<[T]>::is_empty)
}

pub fn is_not_empty<T>(items: Option<&[T]>) -> bool {
    !is_empty(items)
}
