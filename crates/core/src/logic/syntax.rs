//! Prefixes recognised in command arguments.

/// A literal marker that introduces a named argument, such as `a/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }

    pub fn len(self) -> usize {
        self.0.len()
    }

    pub fn is_empty(self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_ALLERGY: Prefix = Prefix::new("a/");
pub const PREFIX_CONDITION: Prefix = Prefix::new("c/");
pub const PREFIX_INSURANCE: Prefix = Prefix::new("i/");
pub const PREFIX_TAG_DELETE: Prefix = Prefix::new("td/");
pub const PREFIX_TAG_EDIT: Prefix = Prefix::new("te/");
