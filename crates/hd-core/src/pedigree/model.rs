//! Pedigree model types.
//!
//! A pedigree is an insertion-ordered collection of people with parent links
//! resolved to indices. Parents come in pairs: a person has either both a
//! mother and a father on record or neither, and the `ParentPair` type makes
//! the one-parent state unrepresentable. The structure is validated once at
//! construction and immutable afterwards.

use std::collections::HashMap;

use hd_common::{Error, Result};
use serde::{Deserialize, Serialize};

/// Raw person data as supplied by a loader, with parents still by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRecord {
    pub name: String,
    #[serde(default)]
    pub mother: Option<String>,
    #[serde(default)]
    pub father: Option<String>,
    /// Observed trait value, if any. `None` means unobserved.
    #[serde(rename = "trait", default)]
    pub observed_trait: Option<bool>,
}

impl PersonRecord {
    /// A person with no recorded parents.
    pub fn founder(name: &str, observed_trait: Option<bool>) -> Self {
        Self {
            name: name.to_string(),
            mother: None,
            father: None,
            observed_trait,
        }
    }

    /// A person with both parents on record.
    pub fn child(name: &str, mother: &str, father: &str, observed_trait: Option<bool>) -> Self {
        Self {
            name: name.to_string(),
            mother: Some(mother.to_string()),
            father: Some(father.to_string()),
            observed_trait,
        }
    }
}

/// Resolved parent links. Both parents or none, never one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParentPair {
    pub mother: usize,
    pub father: usize,
}

/// One member of a validated pedigree.
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    parents: Option<ParentPair>,
    observed_trait: Option<bool>,
}

impl Person {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parents(&self) -> Option<ParentPair> {
        self.parents
    }

    pub fn observed_trait(&self) -> Option<bool> {
        self.observed_trait
    }

    /// True when the person has no recorded parents.
    pub fn is_founder(&self) -> bool {
        self.parents.is_none()
    }
}

/// A validated, immutable population: people in insertion order plus a
/// name-to-index map.
#[derive(Debug, Clone)]
pub struct Pedigree {
    people: Vec<Person>,
    index: HashMap<String, usize>,
}

impl Pedigree {
    /// Build and validate a pedigree from raw records.
    ///
    /// Rejects duplicate names, single parents, references to people not in
    /// the record set, and parentage cycles.
    pub fn from_records(records: Vec<PersonRecord>) -> Result<Self> {
        let mut index = HashMap::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            if index.insert(record.name.clone(), i).is_some() {
                return Err(Error::DuplicatePerson {
                    name: record.name.clone(),
                });
            }
        }

        let mut people = Vec::with_capacity(records.len());
        for record in &records {
            let parents = match (&record.mother, &record.father) {
                (None, None) => None,
                (Some(mother), Some(father)) => Some(ParentPair {
                    mother: resolve_parent(&index, &record.name, mother)?,
                    father: resolve_parent(&index, &record.name, father)?,
                }),
                _ => {
                    return Err(Error::SingleParent {
                        name: record.name.clone(),
                    })
                }
            };
            people.push(Person {
                name: record.name.clone(),
                parents,
                observed_trait: record.observed_trait,
            });
        }

        detect_cycles(&people)?;

        Ok(Self { people, index })
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// People in insertion (file) order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, index: usize) -> &Person {
        &self.people[index]
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }
}

fn resolve_parent(index: &HashMap<String, usize>, child: &str, parent: &str) -> Result<usize> {
    index.get(parent).copied().ok_or_else(|| Error::UnknownParent {
        child: child.to_string(),
        parent: parent.to_string(),
    })
}

/// Reject parentage cycles so the parent relation is a forest.
///
/// Iterative three-color depth-first search along child-to-parent edges.
fn detect_cycles(people: &[Person]) -> Result<()> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        InProgress,
        Done,
    }

    let mut marks = vec![Mark::Unvisited; people.len()];
    for start in 0..people.len() {
        if marks[start] != Mark::Unvisited {
            continue;
        }
        marks[start] = Mark::InProgress;
        // (person, next parent edge to follow: 0 = mother, 1 = father)
        let mut stack = vec![(start, 0usize)];
        while let Some((node, edge)) = stack.pop() {
            let next = people[node].parents().and_then(|p| match edge {
                0 => Some(p.mother),
                1 => Some(p.father),
                _ => None,
            });
            match next {
                None => marks[node] = Mark::Done,
                Some(parent) => {
                    stack.push((node, edge + 1));
                    match marks[parent] {
                        Mark::InProgress => {
                            return Err(Error::ParentageCycle {
                                name: people[parent].name().to_string(),
                            })
                        }
                        Mark::Unvisited => {
                            marks[parent] = Mark::InProgress;
                            stack.push((parent, 0));
                        }
                        Mark::Done => {}
                    }
                }
            }
        }
    }
    Ok(())
}
