//! Person registry with ordered, unique and indexed views

use std::collections::{HashMap, HashSet};

use tracing::{debug, info, warn};

use crate::{
    error::{RegistryError, Result},
    models::{Person, PersonName},
};

/// Registry owning every person record
///
/// `by_name` is the only owner of records. The ordered view is a list of
/// keys into it and the unique view is derived from it on demand, so every
/// view always resolves to the same record for a given name. The registry
/// does no locking of its own; share it behind a single mutex.
#[derive(Debug, Default)]
pub struct PersonRegistry {
    /// Map from name to record
    by_name: HashMap<PersonName, Person>,
    /// Names in insertion order
    order: Vec<PersonName>,
}

impl PersonRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new person
    ///
    /// A name that is already present is rejected with
    /// [`RegistryError::DuplicateKey`] and nothing changes.
    pub fn create(&mut self, name: &str, age: u32) -> Result<()> {
        if self.by_name.contains_key(name) {
            warn!(name = %name, "Rejected duplicate person");
            return Err(RegistryError::DuplicateKey(name.to_string()));
        }

        let key = PersonName::new(name);
        self.order.push(key.clone());
        self.by_name.insert(key.clone(), Person::new(key, age));
        info!(name = %name, age, "Created person");
        Ok(())
    }

    /// Change the age of an existing person in place
    pub fn update(&mut self, name: &str, age: u32) -> Result<()> {
        match self.by_name.get_mut(name) {
            Some(person) => {
                debug!(name = %name, old_age = person.age(), new_age = age, "Updating person");
                person.set_age(age);
                Ok(())
            }
            None => {
                warn!(name = %name, "Person not found for update");
                Err(RegistryError::NotFound(name.to_string()))
            }
        }
    }

    /// Remove a person from every view, returning the removed record
    pub fn delete(&mut self, name: &str) -> Result<Person> {
        match self.by_name.remove(name) {
            Some(person) => {
                self.order.retain(|key| key.as_str() != name);
                info!(name = %name, "Deleted person");
                Ok(person)
            }
            None => {
                warn!(name = %name, "Person not found for delete");
                Err(RegistryError::NotFound(name.to_string()))
            }
        }
    }

    /// Lookup a person by name
    pub fn lookup(&self, name: &str) -> Option<&Person> {
        self.by_name.get(name)
    }

    /// All persons in insertion order
    pub fn list_all(&self) -> Vec<&Person> {
        self.order
            .iter()
            .filter_map(|key| self.by_name.get(key))
            .collect()
    }

    /// All persons as a set keyed by name; iteration order is unspecified
    pub fn list_unique(&self) -> HashSet<&Person> {
        self.by_name.values().collect()
    }

    /// Check if a person with `name` exists
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Get number of persons
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    /// Remove every person
    pub fn clear(&mut self) {
        self.by_name.clear();
        self.order.clear();
    }

    /// Verify that the ordered, unique and indexed views hold the same records
    pub fn check_consistency(&self) -> Result<()> {
        if self.order.len() != self.by_name.len() {
            return Err(RegistryError::Inconsistent(format!(
                "ordered view has {} entries but index has {}",
                self.order.len(),
                self.by_name.len()
            )));
        }

        let mut seen = HashSet::with_capacity(self.order.len());
        for key in &self.order {
            if !seen.insert(key) {
                return Err(RegistryError::Inconsistent(format!(
                    "name {} appears twice in ordered view",
                    key
                )));
            }
            match self.by_name.get(key) {
                Some(person) if person.name() == key => {}
                Some(person) => {
                    return Err(RegistryError::Inconsistent(format!(
                        "index entry {} holds record named {}",
                        key,
                        person.name()
                    )));
                }
                None => {
                    return Err(RegistryError::Inconsistent(format!(
                        "name {} is ordered but not indexed",
                        key
                    )));
                }
            }
        }

        let unique = self.list_unique();
        if unique.len() != self.by_name.len() {
            return Err(RegistryError::Inconsistent(format!(
                "unique view has {} entries but index has {}",
                unique.len(),
                self.by_name.len()
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_share_records() {
        let mut registry = PersonRegistry::new();
        registry.create("Ann", 30).unwrap();
        registry.update("Ann", 31).unwrap();

        let indexed = registry.lookup("Ann").unwrap();
        let ordered = registry.list_all()[0];
        let unique = *registry.list_unique().iter().next().unwrap();
        assert!(std::ptr::eq(indexed, ordered));
        assert!(std::ptr::eq(indexed, unique));
        assert_eq!(ordered.age(), 31);
    }

    #[test]
    fn test_delete_keeps_order_of_others() {
        let mut registry = PersonRegistry::new();
        for (name, age) in [("Ann", 30), ("Bob", 40), ("Cid", 50)] {
            registry.create(name, age).unwrap();
        }
        registry.delete("Bob").unwrap();

        let names: Vec<&str> = registry
            .list_all()
            .into_iter()
            .map(|p| p.name().as_str())
            .collect();
        assert_eq!(names, vec!["Ann", "Cid"]);
        assert!(registry.check_consistency().is_ok());
    }

    #[test]
    fn test_clear() {
        let mut registry = PersonRegistry::new();
        registry.create("Ann", 30).unwrap();
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.list_all().is_empty());
        assert!(registry.check_consistency().is_ok());
    }
}
