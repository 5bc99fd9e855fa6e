use super::tokens::Atom;

use serde::{Deserialize, Serialize};

/// Facet selection behind the simplified search UI. Field order inside each
/// list matches left-to-right appearance in the source query.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct BasicFilter {
    /// Free-text tokens that are not facet predicates.
    pub terms: Vec<String>,
    /// `None` is the personal vault, `Some` an organization vault.
    pub vaults: Vec<Option<String>>,
    pub folders: Vec<String>,
    pub collections: Vec<String>,
    pub types: Vec<String>,
    pub fields: Vec<String>,
}

impl BasicFilter {
    pub fn new() -> BasicFilter {
        BasicFilter::default()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && Category::ALL.iter().all(|c| self.atoms(*c).is_empty())
    }

    /// Facet values of one category rendered as atoms, in stored order.
    pub fn atoms(&self, category: Category) -> Vec<Atom> {
        match category {
            Category::Vault => self
                .vaults
                .iter()
                .map(|vault| match vault {
                    None => Atom::MyVault,
                    Some(org) => Atom::OrgVault(org.clone()),
                })
                .collect(),
            Category::Folder => self.folders.iter().cloned().map(Atom::Folder).collect(),
            Category::Collection => self
                .collections
                .iter()
                .cloned()
                .map(Atom::Collection)
                .collect(),
            Category::Type => self.types.iter().cloned().map(Atom::Type).collect(),
            Category::Field => self.fields.iter().cloned().map(Atom::Field).collect(),
        }
    }
}

/// Facet dimension of the query grammar. Each category owns exactly one
/// group in a raw filter, joined by its canonical operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Category {
    Vault,
    Folder,
    Collection,
    Type,
    Field,
}

impl Category {
    /// Serialization order of groups in a canonical query.
    pub const ALL: [Category; 5] = [
        Category::Vault,
        Category::Folder,
        Category::Collection,
        Category::Type,
        Category::Field,
    ];

    pub fn operator(self) -> Operator {
        match self {
            Category::Vault | Category::Folder | Category::Type => Operator::Or,
            Category::Collection | Category::Field => Operator::And,
        }
    }

    /// Keyword prefix of this category's quoted atom form.
    pub fn keyword(self) -> &'static str {
        match self {
            Category::Vault => "in:org:",
            Category::Folder => "in:folder:",
            Category::Collection => "in:collection:",
            Category::Type => "type:",
            Category::Field => "has:field:",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Operator {
    And,
    Or,
}

impl Operator {
    pub fn separator(self) -> &'static str {
        match self {
            Operator::And => " AND ",
            Operator::Or => " OR ",
        }
    }
}

/// Builds the canonical raw query for a basic filter.
///
/// Groups appear in `Category::ALL` order, each joined by its category's
/// canonical operator and wrapped in exactly one paren pair even for a
/// single atom, so the output always re-parses under the strict grammar.
/// Empty categories contribute nothing. `terms` are not re-emitted.
pub fn to_filter(filter: &BasicFilter) -> String {
    let mut groups = vec![];

    for category in Category::ALL.iter() {
        let atoms = filter.atoms(*category);
        if atoms.is_empty() {
            continue;
        }

        let joined = atoms
            .iter()
            .map(|atom| atom.render())
            .collect::<Vec<_>>()
            .join(category.operator().separator());

        groups.push(format!("({})", joined));
    }

    groups.join(Operator::And.separator())
}

#[cfg(test)]
mod tests;
