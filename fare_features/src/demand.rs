use std::collections::HashMap;

/// For each airline in `airlines`, how many rows share that airline.
///
/// `["A", "A", "B"]` gives `[2, 2, 1]`.
pub fn airline_demand<S: AsRef<str>>(airlines: &[S]) -> Vec<u32> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    for airline in airlines {
        *counts.entry(airline.as_ref()).or_insert(0) += 1;
    }

    airlines
        .iter()
        .map(|airline| counts.get(airline.as_ref()).copied().unwrap_or(0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_count_is_broadcast() {
        assert_eq!(airline_demand(&["A", "A", "B"]), vec![2, 2, 1]);
    }

    #[test]
    fn test_names_are_compared_exactly() {
        let airlines = vec![
            "IndiGo".to_string(),
            "Indigo".to_string(),
            "IndiGo".to_string(),
        ];
        assert_eq!(airline_demand(&airlines), vec![2, 1, 2]);
    }

    #[test]
    fn test_empty_column() {
        let airlines: [&str; 0] = [];
        assert!(airline_demand(&airlines).is_empty());
    }
}
