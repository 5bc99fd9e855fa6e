use super::filter::Category;

use serde::{Deserialize, Serialize};

/// Literal form of the personal vault predicate.
pub const MY_VAULT: &str = "in:my_vault";

/// Keyword prefixes reserved by the grammar. A token starting with one of
/// these but matching no exact atom form is a hard parse error rather than
/// a free-text term.
const RESERVED_PREFIXES: [&str; 3] = ["in:", "type:", "has:"];

/// One facet predicate of a raw query.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Atom {
    MyVault,
    OrgVault(String),
    Folder(String),
    Collection(String),
    Type(String),
    Field(String),
}

impl Atom {
    fn quoted(category: Category, value: String) -> Atom {
        match category {
            Category::Vault => Atom::OrgVault(value),
            Category::Folder => Atom::Folder(value),
            Category::Collection => Atom::Collection(value),
            Category::Type => Atom::Type(value),
            Category::Field => Atom::Field(value),
        }
    }

    pub fn category(&self) -> Category {
        match self {
            Atom::MyVault | Atom::OrgVault(_) => Category::Vault,
            Atom::Folder(_) => Category::Folder,
            Atom::Collection(_) => Category::Collection,
            Atom::Type(_) => Category::Type,
            Atom::Field(_) => Category::Field,
        }
    }

    /// Canonical text of the atom, the exact form `recognize` accepts.
    pub fn render(&self) -> String {
        match self {
            Atom::MyVault => MY_VAULT.to_string(),
            Atom::OrgVault(value)
            | Atom::Folder(value)
            | Atom::Collection(value)
            | Atom::Type(value)
            | Atom::Field(value) => format!("{}\"{}\"", self.category().keyword(), value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Facet(Atom),
    Term(String),
}

/// Classifies one predicate token.
///
/// Returns `None` when the token uses a reserved keyword prefix without
/// matching any exact atom form; the caller must fail the whole parse.
/// Tokens outside the reserved prefixes are free-text terms.
pub fn recognize(token: &str) -> Option<TokenKind> {
    if token == MY_VAULT {
        return Some(TokenKind::Facet(Atom::MyVault));
    }

    for category in Category::ALL.iter() {
        if let Some(rest) = token.strip_prefix(category.keyword()) {
            let value = quoted_value(rest)?;
            return Some(TokenKind::Facet(Atom::quoted(*category, value.to_string())));
        }
    }

    if RESERVED_PREFIXES.iter().any(|prefix| token.starts_with(prefix)) {
        return None;
    }

    Some(TokenKind::Term(token.to_string()))
}

/// Strips the surrounding quotes of an atom value. The grammar has no
/// escape sequences, so an inner quote is malformed.
fn quoted_value(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('"')?.strip_suffix('"')?;
    if inner.contains('"') {
        return None;
    }

    Some(inner)
}
