// 📇 Contact Directory - in-memory name → phone mapping
//
// The directory is the only stateful piece of the contact book.
// It is owned by the session and handed to each operation explicitly.
//
// Invariants:
// - Every name maps to exactly one phone number
// - Entries appear only through add/edit and disappear only through delete

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

pub use crate::phone::PhoneNumber;

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Name is not found in the contact book: {0}")]
    NotFound(String),
    #[error("Contact name cannot be empty")]
    EmptyName,
}

// ============================================================================
// ENTRY
// ============================================================================

/// A single (name, phone number) pair held by the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub phone: PhoneNumber,
}

/// Result of listing the directory
///
/// An empty directory is reported as `Empty`, never as an empty row set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    Empty,
    Entries(Vec<Entry>),
}

// ============================================================================
// CONTACT DIRECTORY
// ============================================================================

#[derive(Debug, Default, Clone)]
pub struct ContactDirectory {
    entries: HashMap<String, PhoneNumber>,
}

impl ContactDirectory {
    /// Create an empty directory
    pub fn new() -> Self {
        ContactDirectory {
            entries: HashMap::new(),
        }
    }

    /// Insert or overwrite the entry for `name`
    ///
    /// Returns the number that was replaced, if any. Overwriting is not an error.
    pub fn add(
        &mut self,
        name: &str,
        phone: PhoneNumber,
    ) -> Result<Option<PhoneNumber>, DirectoryError> {
        let name = normalize_name(name)?;
        let previous = self.entries.insert(name.to_string(), phone.clone());

        match previous {
            Some(ref old) => debug!("Overwrote contact '{}' ({} → {})", name, old, phone),
            None => debug!("Added contact '{}'", name),
        }

        Ok(previous)
    }

    /// Look up the phone number stored for `name`
    pub fn search(&self, name: &str) -> Result<PhoneNumber, DirectoryError> {
        self.entries
            .get(name.trim())
            .cloned()
            .ok_or_else(|| DirectoryError::NotFound(name.trim().to_string()))
    }

    /// All entries, sorted by name
    pub fn list(&self) -> Listing {
        if self.entries.is_empty() {
            return Listing::Empty;
        }

        let mut entries: Vec<Entry> = self
            .entries
            .iter()
            .map(|(name, phone)| Entry {
                name: name.clone(),
                phone: phone.clone(),
            })
            .collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        Listing::Entries(entries)
    }

    /// Overwrite the phone number of an existing entry
    ///
    /// Returns the old number. Absent names leave the directory untouched.
    pub fn edit(
        &mut self,
        name: &str,
        new_phone: PhoneNumber,
    ) -> Result<PhoneNumber, DirectoryError> {
        let key = name.trim();
        let slot = self
            .entries
            .get_mut(key)
            .ok_or_else(|| DirectoryError::NotFound(key.to_string()))?;

        debug!("Edited contact '{}' ({} → {})", key, slot, new_phone);
        let old = std::mem::replace(slot, new_phone);
        Ok(old)
    }

    /// Remove an entry, returning the number it held
    pub fn delete(&mut self, name: &str) -> Result<PhoneNumber, DirectoryError> {
        let key = name.trim();
        let removed = self
            .entries
            .remove(key)
            .ok_or_else(|| DirectoryError::NotFound(key.to_string()))?;

        debug!("Deleted contact '{}'", key);
        Ok(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name.trim())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn normalize_name(name: &str) -> Result<&str, DirectoryError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DirectoryError::EmptyName);
    }
    Ok(trimmed)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn phone(n: i64) -> PhoneNumber {
        PhoneNumber::from(n)
    }

    #[test]
    fn test_new_directory_is_empty() {
        let directory = ContactDirectory::new();

        assert!(directory.is_empty());
        assert_eq!(directory.len(), 0);
        assert_eq!(directory.list(), Listing::Empty);
    }

    #[test]
    fn test_add_overwrites_without_growing() {
        let mut directory = ContactDirectory::new();

        assert_eq!(directory.add("Alice", phone(111)), Ok(None));
        assert_eq!(directory.add("Bob", phone(222)), Ok(None));
        assert_eq!(directory.add("Alice", phone(333)), Ok(Some(phone(111))));

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.search("Alice"), Ok(phone(333)));
    }

    #[test]
    fn test_add_rejects_empty_name() {
        let mut directory = ContactDirectory::new();

        assert_eq!(directory.add("   ", phone(1)), Err(DirectoryError::EmptyName));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_names_are_trimmed() {
        let mut directory = ContactDirectory::new();
        directory.add("  Carol ", phone(42)).unwrap();

        assert!(directory.contains("Carol"));
        assert_eq!(directory.search(" Carol"), Ok(phone(42)));
    }

    #[test]
    fn test_search_unknown_name() {
        let directory = ContactDirectory::new();

        assert_eq!(
            directory.search("Anyone"),
            Err(DirectoryError::NotFound("Anyone".to_string()))
        );
    }

    #[test]
    fn test_edit_only_touches_target() {
        let mut directory = ContactDirectory::new();
        directory.add("Alice", phone(12345)).unwrap();
        directory.add("Bob", phone(987)).unwrap();

        assert_eq!(directory.edit("Bob", phone(555)), Ok(phone(987)));
        assert_eq!(directory.search("Bob"), Ok(phone(555)));
        assert_eq!(directory.search("Alice"), Ok(phone(12345)));
        assert_eq!(directory.len(), 2);
    }

    #[test]
    fn test_edit_missing_leaves_directory_unchanged() {
        let mut directory = ContactDirectory::new();
        directory.add("Alice", phone(12345)).unwrap();
        let before = directory.list();

        assert_eq!(
            directory.edit("Zed", phone(1)),
            Err(DirectoryError::NotFound("Zed".to_string()))
        );
        assert_eq!(directory.list(), before);
    }

    #[test]
    fn test_delete_then_search_is_not_found() {
        let mut directory = ContactDirectory::new();
        directory.add("Alice", phone(12345)).unwrap();

        assert_eq!(directory.delete("Alice"), Ok(phone(12345)));
        assert!(matches!(
            directory.search("Alice"),
            Err(DirectoryError::NotFound(_))
        ));
        assert_eq!(directory.list(), Listing::Empty);
    }

    #[test]
    fn test_delete_missing_leaves_directory_unchanged() {
        let mut directory = ContactDirectory::new();
        directory.add("Bob", phone(987)).unwrap();

        assert!(directory.delete("Alice").is_err());
        assert_eq!(directory.len(), 1);
    }

    #[test]
    fn test_full_scenario() {
        let mut directory = ContactDirectory::new();
        directory.add("Alice", phone(12345)).unwrap();
        directory.add("Bob", phone(987)).unwrap();

        assert_eq!(
            directory.list(),
            Listing::Entries(vec![
                Entry { name: "Alice".to_string(), phone: phone(12345) },
                Entry { name: "Bob".to_string(), phone: phone(987) },
            ])
        );
        assert_eq!(directory.search("Alice"), Ok(phone(12345)));

        directory.edit("Bob", phone(555)).unwrap();
        assert_eq!(directory.search("Bob"), Ok(phone(555)));

        directory.delete("Alice").unwrap();
        assert!(directory.search("Alice").is_err());
        assert_eq!(
            directory.list(),
            Listing::Entries(vec![Entry { name: "Bob".to_string(), phone: phone(555) }])
        );
    }

    #[test]
    fn test_listing_is_sorted_by_name() {
        let mut directory = ContactDirectory::new();
        directory.add("zoe", phone(3)).unwrap();
        directory.add("Adam", phone(1)).unwrap();
        directory.add("mia", phone(2)).unwrap();

        let Listing::Entries(entries) = directory.list() else {
            panic!("expected entries");
        };
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Adam", "mia", "zoe"]);
    }

    #[test]
    fn test_entry_serializes_to_json() {
        let entry = Entry { name: "Alice".to_string(), phone: phone(12345) };
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json, serde_json::json!({"name": "Alice", "phone": "12345"}));
    }
}
