//! Name normalization and the create-or-restore planner shared by the
//! tag and ingredient catalogs.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use uuid::Uuid;

/// `"  hEaLthy   FOOD "` -> `"Healthy Food"`
pub fn to_title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(|c| c.to_lowercase()))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Input carrying a catalog name, already title-cased.
pub trait NamedInput {
    fn name(&self) -> &str;
}

/// A stored catalog row as seen by the planner.
pub trait CatalogRow {
    fn id(&self) -> Uuid;
    fn name(&self) -> &str;
    fn is_deleted(&self) -> bool;
}

/// Collapses inputs sharing a name. The last occurrence wins, at the
/// position of the first.
pub fn dedupe_by_name<I: NamedInput>(inputs: Vec<I>) -> Vec<I> {
    let mut position: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<I> = Vec::with_capacity(inputs.len());

    for input in inputs {
        match position.get(input.name()) {
            Some(&idx) => unique[idx] = input,
            None => {
                position.insert(input.name().to_string(), unique.len());
                unique.push(input);
            }
        }
    }

    unique
}

#[derive(Debug)]
pub struct BulkPlan<I, R> {
    pub to_create: Vec<I>,
    /// Soft-deleted row paired with the input that revives it.
    pub to_restore: Vec<(R, I)>,
    /// Live rows that block their input.
    pub blocked: Vec<R>,
}

impl<I, R: CatalogRow> BulkPlan<I, R> {
    pub fn blocked_names(&self) -> Vec<String> {
        self.blocked.iter().map(|r| r.name().to_string()).collect()
    }
}

/// Partitions deduplicated inputs against every stored row (deleted or not)
/// whose name matches one of them.
pub fn plan_bulk_upsert<I, R>(inputs: Vec<I>, existing: Vec<R>) -> BulkPlan<I, R>
where
    I: NamedInput,
    R: CatalogRow,
{
    let mut live: HashMap<String, R> = HashMap::new();
    let mut deleted: HashMap<String, R> = HashMap::new();

    for row in existing {
        let key = row.name().to_lowercase();
        if row.is_deleted() {
            deleted.entry(key).or_insert(row);
        } else {
            live.insert(key, row);
        }
    }

    let mut plan = BulkPlan {
        to_create: Vec::new(),
        to_restore: Vec::new(),
        blocked: Vec::new(),
    };

    for input in inputs {
        let key = input.name().to_lowercase();
        if let Some(row) = live.remove(&key) {
            plan.blocked.push(row);
        } else if let Some(row) = deleted.remove(&key) {
            plan.to_restore.push((row, input));
        } else {
            plan.to_create.push(input);
        }
    }

    plan
}

/// Rows written by one bulk create, split by how they got there.
#[derive(Debug, Clone, PartialEq)]
pub struct BulkSaved<R> {
    pub created: Vec<R>,
    pub restored: Vec<R>,
}

impl<R> BulkSaved<R> {
    pub fn is_empty(&self) -> bool {
        self.created.is_empty() && self.restored.is_empty()
    }

    /// Created rows first, then restored ones.
    pub fn into_rows(self) -> Vec<R> {
        let mut rows = self.created;
        rows.extend(self.restored);
        rows
    }
}

/// Pluralizable wording for one catalog, e.g. `("tag", "Tags")`.
#[derive(Debug, Clone, Copy)]
pub struct CatalogNoun {
    pub singular: &'static str,
    pub plural_title: &'static str,
}

pub const TAG_NOUN: CatalogNoun = CatalogNoun {
    singular: "tag",
    plural_title: "Tags",
};

pub const INGREDIENT_NOUN: CatalogNoun = CatalogNoun {
    singular: "ingredient",
    plural_title: "Ingredients",
};

impl CatalogNoun {
    pub fn nothing_created(&self, blocked: &[String]) -> String {
        format!(
            "No new {}s to create. {} with names '{}' already exist",
            self.singular,
            self.plural_title,
            blocked.join(", ")
        )
    }

    pub fn created_summary(&self, created: usize, restored: usize, blocked: &[String]) -> String {
        let noun = self.singular;
        let mut message = match (created, restored) {
            (c, r) if c > 0 && r > 0 => {
                format!("Created {c} new {noun}(s) and restored {r} deleted {noun}(s)")
            }
            (c, _) if c > 0 => format!("Created {c} new {noun}(s)"),
            (_, r) => format!("Restored {r} deleted {noun}(s)"),
        };

        if !blocked.is_empty() {
            message.push_str(&format!(
                ". {} with names '{}' already exist",
                self.plural_title,
                blocked.join(", ")
            ));
        }

        message
    }

    pub fn no_ids(&self) -> String {
        format!("No {} Ids provided", self.singular)
    }

    pub fn none_found(&self, ids: &[Uuid]) -> String {
        format!(
            "No {}s found with the provided Ids: {}",
            self.singular,
            join_ids(ids)
        )
    }

    pub fn removed_summary(&self, removed: usize, missing: &[Uuid]) -> String {
        let mut message = format!("Successfully soft-deleted {removed} {}(s)", self.singular);
        if !missing.is_empty() {
            message.push_str(&format!(
                ". Could not find {}s with IDs: {}",
                self.singular,
                join_ids(missing)
            ));
        }
        message
    }
}

/// Body of the bulk soft-delete routes: a JSON array of UUID strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdList(Vec<Uuid>);

impl IdList {
    pub fn new(ids: Vec<Uuid>) -> Self {
        Self(ids)
    }

    pub fn as_slice(&self) -> &[Uuid] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Requested ids absent from `found`, in request order.
    pub fn missing_from(&self, found: &[Uuid]) -> Vec<Uuid> {
        self.0
            .iter()
            .filter(|id| !found.contains(id))
            .copied()
            .collect()
    }
}

impl<'de> Deserialize<'de> for IdList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        raw.iter()
            .map(|id| Uuid::parse_str(id.trim()))
            .collect::<Result<Vec<_>, _>>()
            .map(IdList)
            .map_err(|_| serde::de::Error::custom("Invalid UUID format"))
    }
}

pub fn join_ids(ids: &[Uuid]) -> String {
    ids.iter()
        .map(Uuid::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
