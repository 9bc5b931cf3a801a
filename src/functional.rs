use crate::error::{Error, Result};
use crate::types::List;

/// Apply `f` to every item, collecting the results in order.
pub fn map_list<T, R, I, F>(f: F, items: I) -> List<R>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T) -> R,
{
    items.into_iter().map(f).collect()
}

/// Keep the items for which `pred` holds, preserving their relative order.
pub fn filter_list<T, I, F>(mut pred: F, items: I) -> List<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(&T) -> bool,
{
    items.into_iter().filter(|item| pred(item)).collect()
}

/// Left fold of `f` over `items`.
///
/// Without an `initial` seed the first item seeds the fold, and an empty
/// input is a usage error.
pub fn reduce_list<T, I, F>(f: F, items: I, initial: Option<T>) -> Result<T>
where
    I: IntoIterator<Item = T>,
    F: FnMut(T, T) -> T,
{
    let mut iter = items.into_iter();
    let seed = match initial {
        Some(seed) => seed,
        None => iter.next().ok_or_else(|| {
            Error::Usage("reduce of empty sequence with no initial value".to_string())
        })?,
    };
    Ok(iter.fold(seed, f))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_preserves_order() {
        assert_eq!(map_list(|x: i32| x * 10, vec![3, 1, 2]), vec![30, 10, 20]);
        assert_eq!(map_list(str::len, ["a", "bcd"]), vec![1, 3]);
    }

    #[test]
    fn filter_keeps_order_and_predicate() {
        let xs = vec![5, 2, 8, 1, 6, 3];
        let evens = filter_list(|x| x % 2 == 0, xs.clone());
        assert_eq!(evens, vec![2, 8, 6]);
        assert!(evens.iter().all(|x| x % 2 == 0));

        let positions: Vec<usize> = evens
            .iter()
            .map(|e| xs.iter().position(|x| x == e).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn reduce_with_seed() -> Result<()> {
        assert_eq!(reduce_list(|a, b| a + b, vec![1, 2, 3], Some(0))?, 6);
        assert_eq!(reduce_list(|a, b| a + b, Vec::<i32>::new(), Some(0))?, 0);
        Ok(())
    }

    #[test]
    fn reduce_without_seed_uses_first_item() -> Result<()> {
        assert_eq!(reduce_list(|a, b| a - b, vec![10, 3, 2], None)?, 5);
        assert_eq!(reduce_list(|a, b| a * b, vec![7], None)?, 7);
        Ok(())
    }

    #[test]
    fn reduce_folds_left_to_right() -> Result<()> {
        let joined = reduce_list(
            |a: String, b: String| format!("({a}{b})"),
            ["a", "b", "c"].map(String::from),
            None,
        )?;
        assert_eq!(joined, "((ab)c)");
        Ok(())
    }

    #[test]
    fn reduce_empty_without_seed_is_usage_error() {
        let result = reduce_list(|a, b| a + b, Vec::<i32>::new(), None);
        assert!(matches!(result, Err(Error::Usage(_))));
    }
}
