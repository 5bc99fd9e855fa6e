use super::filter::{BasicFilter, Category, Operator};
use super::lexer;
use super::tokens::{self, Atom, TokenKind};

/// Tries to reduce a raw query to a basic facet filter.
///
/// The outcome is binary: `Some` with the whole filter, or `None` with no
/// payload. Any grammar violation fails the entire parse; partial results
/// are never returned. An empty (or all-whitespace) query is the empty
/// filter.
pub fn try_parse(raw: &str) -> Option<BasicFilter> {
    let mut filter = BasicFilter::new();

    if raw.trim().is_empty() {
        return Some(filter);
    }

    // Categories already claimed by a top-level segment. A category may
    // own at most one group, so two `type` groups reject the query.
    let mut seen: Vec<Category> = vec![];

    for segment in lexer::split_level(raw, Operator::And.separator())? {
        let token = segment.trim();
        if token.is_empty() {
            return None;
        }

        if token.starts_with('(') {
            let body = lexer::enclosed(token)?;
            let (category, atoms) = parse_group(body)?;
            claim(&mut seen, category)?;
            push_atoms(&mut filter, atoms);
        } else {
            match tokens::recognize(token)? {
                TokenKind::Facet(atom) => {
                    // A bare atom is a one-element group of its category.
                    claim(&mut seen, atom.category())?;
                    push_atoms(&mut filter, vec![atom]);
                }
                TokenKind::Term(term) => filter.terms.push(term),
            }
        }
    }

    Some(filter)
}

/// Validates one parenthesized group body: a single operator joining atoms
/// of a single category, with the operator matching that category's
/// canonical one.
fn parse_group(body: &str) -> Option<(Category, Vec<Atom>)> {
    let (operator, parts) = split_single_operator(body)?;

    let mut atoms = vec![];
    for part in parts.iter() {
        match tokens::recognize(part.trim())? {
            TokenKind::Facet(atom) => atoms.push(atom),
            // Free text never appears inside a group.
            TokenKind::Term(_) => return None,
        }
    }

    let category = atoms.first()?.category();
    if atoms.iter().any(|atom| atom.category() != category) {
        return None;
    }

    // A one-atom group uses no operator, so the check is vacuous there.
    if let Some(operator) = operator {
        if operator != category.operator() {
            return None;
        }
    }

    Some((category, atoms))
}

/// Splits a group body on the one operator actually present. Mixed
/// AND/OR in a single group is a parse failure.
fn split_single_operator(body: &str) -> Option<(Option<Operator>, Vec<String>)> {
    let by_or = lexer::split_level(body, Operator::Or.separator())?;
    let by_and = lexer::split_level(body, Operator::And.separator())?;

    match (by_or.len() > 1, by_and.len() > 1) {
        (true, true) => None,
        (true, false) => Some((Some(Operator::Or), by_or)),
        (false, true) => Some((Some(Operator::And), by_and)),
        (false, false) => Some((None, by_or)),
    }
}

fn claim(seen: &mut Vec<Category>, category: Category) -> Option<()> {
    if seen.contains(&category) {
        return None;
    }

    seen.push(category);
    Some(())
}

fn push_atoms(filter: &mut BasicFilter, atoms: Vec<Atom>) {
    for atom in atoms {
        match atom {
            Atom::MyVault => filter.vaults.push(None),
            Atom::OrgVault(org) => filter.vaults.push(Some(org)),
            Atom::Folder(folder) => filter.folders.push(folder),
            Atom::Collection(collection) => filter.collections.push(collection),
            Atom::Type(kind) => filter.types.push(kind),
            Atom::Field(field) => filter.fields.push(field),
        }
    }
}
