//! Fresh id generation for parsed trees.
//!
//! Ids are never persisted in markup; the parser mints a new one for every node
//! and sub-record it builds.

use uuid::Uuid;

/// Source of process-local unique ids.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUIDs in upper-case hyphenated form, the format the editor uses.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().hyphenated().to_string().to_uppercase()
    }
}

/// Deterministic ids `"0"`, `"1"`, `"2"`, ... for exact-match assertions.
#[derive(Debug, Default, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        let id = self.next.to_string();
        self.next += 1;
        id
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}
