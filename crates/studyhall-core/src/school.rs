//! The top-level aggregate.
//!
//! Bundles the three owning components so seeding and the CLI can pass one
//! value around. The fields stay public: borrows of `catalog`, `directory`,
//! and `bank` are disjoint, which is what lets an exam session hold the
//! student mutably while reading the bank.

use crate::bank::ExamBank;
use crate::catalog::Catalog;
use crate::directory::Directory;

/// All in-memory state for one process run.
#[derive(Debug, Default)]
pub struct School {
    pub catalog: Catalog,
    pub directory: Directory,
    pub bank: ExamBank,
}

impl School {
    /// An empty school: no users, no courses, no exams.
    pub fn new() -> Self {
        Self::default()
    }
}
