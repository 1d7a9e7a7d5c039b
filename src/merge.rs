/// Three-way merge for one metadata field.
///
/// The metadata bag keeps its current value whenever either the override
/// bag or the bag itself already has one; the computed value only fills a
/// gap. The override bag wins silently, there is no conflict reporting.
pub fn merge_field<T, O: ?Sized>(
    overriding: Option<&O>,
    existing: Option<T>,
    computed: Option<T>,
) -> Option<T> {
    if overriding.is_some() || existing.is_some() {
        existing
    } else {
        computed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computed_fills_an_empty_field() {
        assert_eq!(merge_field::<i32, i32>(None, None, Some(1)), Some(1));
    }

    #[test]
    fn existing_value_is_kept() {
        assert_eq!(merge_field::<i32, i32>(None, Some(2), Some(1)), Some(2));
    }

    #[test]
    fn override_blocks_the_computed_value() {
        assert_eq!(merge_field(Some(&3), None, Some(1)), None);
        assert_eq!(merge_field(Some(&3), Some(2), Some(1)), Some(2));
    }

    #[test]
    fn nothing_computed_changes_nothing() {
        assert_eq!(merge_field::<i32, i32>(None, None, None), None);
    }
}
