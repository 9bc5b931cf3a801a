//! Short aliases for the common collection and scalar types.

use std::collections::{HashMap, HashSet};

pub type List<T> = Vec<T>;
pub type Dict<K, V> = HashMap<K, V>;
pub type Set<T> = HashSet<T>;

pub type Int = i64;
pub type Float = f64;
pub type Str = String;
pub type Bool = bool;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::functional::map_list;

    #[test]
    fn aliases_are_the_std_types() {
        let words: List<Str> = map_list(String::from, ["b", "a", "b"]);
        let unique: Set<&Str> = words.iter().collect();
        let mut counts: Dict<&str, Int> = Dict::new();
        for word in &words {
            *counts.entry(word.as_str()).or_default() += 1;
        }
        let half: Float = 0.5;
        let flag: Bool = unique.len() == 2;

        assert!(flag);
        assert_eq!(counts["b"], 2);
        assert_eq!(half * 2.0, 1.0);
    }
}
