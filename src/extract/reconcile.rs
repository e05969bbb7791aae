//! Range-based reconciliation of page-indexed declarations.

/// Assign the declaration in scope for a page.
///
/// Declarations are `(page, value)` pairs ordered ascending by page; a
/// declaration's scope runs from its page (exclusive) to the next
/// declaration's page (exclusive), with the last declaration covering
/// everything after it. A page at or before the first declaration's page
/// has no declaration in scope and yields `None`.
pub fn assign_by_range<T: Clone>(page: u32, declarations: &[(u32, T)]) -> Option<T> {
    for (j, (decl_page, value)) in declarations.iter().enumerate() {
        if *decl_page >= page {
            continue;
        }
        let is_last = j == declarations.len() - 1;
        if is_last || page < declarations[j + 1].0 {
            return Some(value.clone());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assign_by_range() {
        let decls = vec![(3, "Name1"), (10, "Name2")];

        // Inside the first scope.
        assert_eq!(assign_by_range(5, &decls), Some("Name1"));
        // The last declaration covers everything after it.
        assert_eq!(assign_by_range(12, &decls), Some("Name2"));
        // Before the first declaration: nothing in scope.
        assert_eq!(assign_by_range(2, &decls), None);
        // Scope boundaries are exclusive on both ends, so a page sitting
        // exactly on a declaration page has nothing in scope.
        assert_eq!(assign_by_range(3, &decls), None);
        assert_eq!(assign_by_range(10, &decls), None);
        assert_eq!(assign_by_range(4, &decls), Some("Name1"));
        assert_eq!(assign_by_range(9, &decls), Some("Name1"));
        assert_eq!(assign_by_range(11, &decls), Some("Name2"));
    }

    #[test]
    fn test_assign_empty_declarations() {
        let decls: Vec<(u32, u32)> = Vec::new();
        assert_eq!(assign_by_range(5, &decls), None);
    }

    #[test]
    fn test_assign_single_declaration() {
        let decls = vec![(4, 38u32)];
        assert_eq!(assign_by_range(4, &decls), None);
        assert_eq!(assign_by_range(5, &decls), Some(38));
        assert_eq!(assign_by_range(100, &decls), Some(38));
    }
}
