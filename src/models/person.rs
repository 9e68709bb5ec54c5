//! Person model and the bill roster.
//!
//! This module defines the [`Person`] struct and the [`Roster`], which
//! owns the list of participants and the symmetric pairing table used to
//! settle couples as a single unit.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A participant in the shared bill.
///
/// Ids are opaque, caller-supplied strings; the engine requires only
/// uniqueness and stable equality, not any particular generation scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Unique identifier for the person.
    pub id: String,
    /// Display name for the person.
    pub name: String,
}

impl Person {
    /// Creates a new person from an id and a display name.
    ///
    /// # Examples
    ///
    /// ```
    /// use bill_engine::models::Person;
    ///
    /// let person = Person::new("p_001", "Alice");
    /// assert_eq!(person.id, "p_001");
    /// assert_eq!(person.name, "Alice");
    /// ```
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The roster of bill participants and their couple pairings.
///
/// Couple linkage is kept in a symmetric pairing table: a set of unordered
/// id pairs stored in normalized (lexicographic) order. The symmetry of
/// the partner relation is therefore structural; there are no mutual
/// back-references to keep in sync. A person may appear in at most one
/// pair.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    people: Vec<Person>,
    pairs: BTreeSet<(String, String)>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a person to the roster.
    ///
    /// # Errors
    ///
    /// Returns `DuplicatePerson` if a person with the same id is already
    /// on the roster.
    ///
    /// # Examples
    ///
    /// ```
    /// use bill_engine::models::{Person, Roster};
    ///
    /// let mut roster = Roster::new();
    /// roster.add_person(Person::new("p_001", "Alice")).unwrap();
    /// assert!(roster.add_person(Person::new("p_001", "Alice again")).is_err());
    /// ```
    pub fn add_person(&mut self, person: Person) -> EngineResult<()> {
        if self.person(&person.id).is_some() {
            return Err(EngineError::DuplicatePerson { id: person.id });
        }
        self.people.push(person);
        Ok(())
    }

    /// Removes a person from the roster and dissolves any pair containing
    /// them, returning the removed person.
    ///
    /// Callers that own bill items must also strip the removed id from
    /// each item's sharing set (see `BillItem::remove_sharer`).
    ///
    /// # Errors
    ///
    /// Returns `PersonNotFound` if the id is not on the roster.
    pub fn remove_person(&mut self, id: &str) -> EngineResult<Person> {
        let index = self
            .people
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| EngineError::PersonNotFound { id: id.to_string() })?;
        self.pairs.retain(|(a, b)| a != id && b != id);
        Ok(self.people.remove(index))
    }

    /// Links two people as a couple.
    ///
    /// # Errors
    ///
    /// - `PersonNotFound` if either id is not on the roster.
    /// - `SelfPairing` if both ids are the same.
    /// - `AlreadyPaired` if either person already has a partner.
    pub fn link_partners(&mut self, a: &str, b: &str) -> EngineResult<()> {
        if a == b {
            return Err(EngineError::SelfPairing { id: a.to_string() });
        }
        for id in [a, b] {
            if self.person(id).is_none() {
                return Err(EngineError::PersonNotFound { id: id.to_string() });
            }
            if self.partner_of(id).is_some() {
                return Err(EngineError::AlreadyPaired { id: id.to_string() });
            }
        }
        self.pairs.insert(normalized_pair(a, b));
        Ok(())
    }

    /// Dissolves the pair containing the given id, if any.
    ///
    /// Returns `true` if a pair was dissolved. Unknown ids are simply not
    /// in any pair and return `false`.
    pub fn unlink_partner(&mut self, id: &str) -> bool {
        let before = self.pairs.len();
        self.pairs.retain(|(a, b)| a != id && b != id);
        self.pairs.len() != before
    }

    /// Returns the partner id of the given person, if they are paired.
    ///
    /// # Examples
    ///
    /// ```
    /// use bill_engine::models::{Person, Roster};
    ///
    /// let mut roster = Roster::new();
    /// roster.add_person(Person::new("p_001", "Alice")).unwrap();
    /// roster.add_person(Person::new("p_002", "Bob")).unwrap();
    /// roster.link_partners("p_001", "p_002").unwrap();
    ///
    /// assert_eq!(roster.partner_of("p_001"), Some("p_002"));
    /// assert_eq!(roster.partner_of("p_002"), Some("p_001"));
    /// ```
    pub fn partner_of(&self, id: &str) -> Option<&str> {
        self.pairs.iter().find_map(|(a, b)| {
            if a == id {
                Some(b.as_str())
            } else if b == id {
                Some(a.as_str())
            } else {
                None
            }
        })
    }

    /// Returns true if the given person has a partner.
    pub fn is_paired(&self, id: &str) -> bool {
        self.partner_of(id).is_some()
    }

    /// Looks up a person by id.
    pub fn person(&self, id: &str) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// Returns all people on the roster in insertion order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Returns the number of people on the roster.
    pub fn len(&self) -> usize {
        self.people.len()
    }

    /// Returns true if the roster has no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}

/// Normalizes a pair of ids into lexicographic order.
fn normalized_pair(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_of(names: &[(&str, &str)]) -> Roster {
        let mut roster = Roster::new();
        for (id, name) in names {
            roster.add_person(Person::new(*id, *name)).unwrap();
        }
        roster
    }

    #[test]
    fn test_add_person_preserves_insertion_order() {
        let roster = roster_of(&[("p_001", "Alice"), ("p_002", "Bob"), ("p_003", "Cara")]);

        let ids: Vec<&str> = roster.people().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p_001", "p_002", "p_003"]);
        assert_eq!(roster.len(), 3);
        assert!(!roster.is_empty());
    }

    #[test]
    fn test_add_duplicate_person_returns_error() {
        let mut roster = roster_of(&[("p_001", "Alice")]);

        let result = roster.add_person(Person::new("p_001", "Alice again"));
        match result {
            Err(EngineError::DuplicatePerson { id }) => assert_eq!(id, "p_001"),
            other => panic!("Expected DuplicatePerson, got {:?}", other),
        }
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_link_partners_is_symmetric() {
        let mut roster = roster_of(&[("p_001", "Alice"), ("p_002", "Bob")]);
        roster.link_partners("p_001", "p_002").unwrap();

        assert_eq!(roster.partner_of("p_001"), Some("p_002"));
        assert_eq!(roster.partner_of("p_002"), Some("p_001"));
        assert!(roster.is_paired("p_001"));
    }

    #[test]
    fn test_link_partners_is_order_independent() {
        let mut forward = roster_of(&[("p_001", "Alice"), ("p_002", "Bob")]);
        forward.link_partners("p_001", "p_002").unwrap();

        let mut reverse = roster_of(&[("p_001", "Alice"), ("p_002", "Bob")]);
        reverse.link_partners("p_002", "p_001").unwrap();

        assert_eq!(forward, reverse);
    }

    #[test]
    fn test_link_unknown_person_returns_error() {
        let mut roster = roster_of(&[("p_001", "Alice")]);

        match roster.link_partners("p_001", "p_404") {
            Err(EngineError::PersonNotFound { id }) => assert_eq!(id, "p_404"),
            other => panic!("Expected PersonNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_link_person_to_themselves_returns_error() {
        let mut roster = roster_of(&[("p_001", "Alice")]);

        match roster.link_partners("p_001", "p_001") {
            Err(EngineError::SelfPairing { id }) => assert_eq!(id, "p_001"),
            other => panic!("Expected SelfPairing, got {:?}", other),
        }
    }

    #[test]
    fn test_link_already_paired_person_returns_error() {
        let mut roster = roster_of(&[("p_001", "Alice"), ("p_002", "Bob"), ("p_003", "Cara")]);
        roster.link_partners("p_001", "p_002").unwrap();

        match roster.link_partners("p_002", "p_003") {
            Err(EngineError::AlreadyPaired { id }) => assert_eq!(id, "p_002"),
            other => panic!("Expected AlreadyPaired, got {:?}", other),
        }
        // The original pair is untouched.
        assert_eq!(roster.partner_of("p_001"), Some("p_002"));
        assert_eq!(roster.partner_of("p_003"), None);
    }

    #[test]
    fn test_unlink_partner_dissolves_both_sides() {
        let mut roster = roster_of(&[("p_001", "Alice"), ("p_002", "Bob")]);
        roster.link_partners("p_001", "p_002").unwrap();

        assert!(roster.unlink_partner("p_002"));
        assert_eq!(roster.partner_of("p_001"), None);
        assert_eq!(roster.partner_of("p_002"), None);
    }

    #[test]
    fn test_unlink_unpaired_person_returns_false() {
        let mut roster = roster_of(&[("p_001", "Alice")]);
        assert!(!roster.unlink_partner("p_001"));
        assert!(!roster.unlink_partner("p_404"));
    }

    #[test]
    fn test_remove_person_clears_pairing() {
        let mut roster = roster_of(&[("p_001", "Alice"), ("p_002", "Bob")]);
        roster.link_partners("p_001", "p_002").unwrap();

        let removed = roster.remove_person("p_001").unwrap();
        assert_eq!(removed.name, "Alice");
        assert_eq!(roster.len(), 1);
        // The former partner must not keep a dangling pairing.
        assert_eq!(roster.partner_of("p_002"), None);
    }

    #[test]
    fn test_remove_unknown_person_returns_error() {
        let mut roster = roster_of(&[("p_001", "Alice")]);

        match roster.remove_person("p_404") {
            Err(EngineError::PersonNotFound { id }) => assert_eq!(id, "p_404"),
            other => panic!("Expected PersonNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_relink_after_unlink_succeeds() {
        let mut roster = roster_of(&[("p_001", "Alice"), ("p_002", "Bob"), ("p_003", "Cara")]);
        roster.link_partners("p_001", "p_002").unwrap();
        roster.unlink_partner("p_001");

        roster.link_partners("p_002", "p_003").unwrap();
        assert_eq!(roster.partner_of("p_002"), Some("p_003"));
        assert_eq!(roster.partner_of("p_001"), None);
    }

    #[test]
    fn test_person_serde_round_trip() {
        let person = Person::new("p_001", "Alice");
        let json = serde_json::to_string(&person).unwrap();
        let deserialized: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(person, deserialized);
    }
}
