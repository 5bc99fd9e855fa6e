use super::*;

fn strings(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

#[test]
fn empty_filter_is_empty_query() {
    assert_eq!("", to_filter(&BasicFilter::new()));
}

#[test]
fn full_selection_in_category_order() {
    let filter = BasicFilter {
        terms: vec![],
        vaults: vec![None, Some("org_vault".to_string())],
        folders: strings(vec!["folder_one", "folder_two"]),
        collections: strings(vec!["collection_one", "collection_two"]),
        types: strings(vec!["Login", "Card"]),
        fields: strings(vec!["field_one", "field_two"]),
    };

    assert_eq!(
        "(in:my_vault OR in:org:\"org_vault\") \
         AND (in:folder:\"folder_one\" OR in:folder:\"folder_two\") \
         AND (in:collection:\"collection_one\" AND in:collection:\"collection_two\") \
         AND (type:\"Login\" OR type:\"Card\") \
         AND (has:field:\"field_one\" AND has:field:\"field_two\")",
        to_filter(&filter),
    );
}

#[test]
fn collections_join_with_and() {
    let filter = BasicFilter {
        collections: strings(vec!["collection_one", "Collection two"]),
        ..BasicFilter::new()
    };

    assert_eq!(
        "(in:collection:\"collection_one\" AND in:collection:\"Collection two\")",
        to_filter(&filter),
    );
}

#[test]
fn single_atom_is_still_parenthesized() {
    let filter = BasicFilter {
        vaults: vec![None],
        ..BasicFilter::new()
    };

    assert_eq!("(in:my_vault)", to_filter(&filter));
}

#[test]
fn empty_categories_produce_no_groups() {
    let filter = BasicFilter {
        vaults: vec![None],
        fields: strings(vec!["field_one"]),
        ..BasicFilter::new()
    };

    assert_eq!(
        "(in:my_vault) AND (has:field:\"field_one\")",
        to_filter(&filter),
    );
}

#[test]
fn terms_are_not_emitted() {
    let filter = BasicFilter {
        terms: strings(vec!["hello"]),
        types: strings(vec!["Login"]),
        ..BasicFilter::new()
    };

    assert_eq!("(type:\"Login\")", to_filter(&filter));
}
