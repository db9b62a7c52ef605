//! Person record and its name key

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// The unique key of a [`Person`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PersonName(String);

impl PersonName {
    pub fn new(name: impl Into<String>) -> Self {
        PersonName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for PersonName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PersonName {
    fn from(name: &str) -> Self {
        PersonName::new(name)
    }
}

/// A person record
///
/// Equality and hashing look at the name only; `age` is a mutable attribute
/// and never takes part in set membership or map keys.
#[derive(Debug, Clone, Serialize)]
pub struct Person {
    name: PersonName,
    age: u32,
}

impl Person {
    pub(crate) fn new(name: PersonName, age: u32) -> Self {
        Person { name, age }
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub(crate) fn set_age(&mut self, age: u32) {
        self.age = age;
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Person {}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} years)", self.name, self.age)
    }
}
