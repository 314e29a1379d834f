//! Item catalog and instance parsing.

use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// One knapsack item.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub name: String,
    pub weight: f64,
    pub value: f64,
    /// How many copies of this item exist.
    pub available: u32,
}

impl Item {
    /// Largest quantity worth encoding: the available amount, capped by
    /// how many copies fit in an empty knapsack.
    pub fn max_quantity(&self, capacity: f64) -> u32 {
        if self.weight <= 0.0 {
            return self.available;
        }
        self.available.min((capacity / self.weight) as u32)
    }
}

/// Ordered, immutable collection of items. Owned by the problem for the
/// duration of a search run.
///
/// Item order is the solution encoding order; a name index sits alongside
/// so that scoring a solution stays O(n log n) rather than scanning the
/// catalog per pick.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<Item>,
    index: BTreeMap<String, usize>,
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Self {
        let mut index = BTreeMap::new();
        for (i, item) in items.iter().enumerate() {
            // First occurrence wins on duplicate names.
            index.entry(item.name.clone()).or_insert(i);
        }
        Self { items, index }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A parsed knapsack instance: weight capacity plus the item catalog.
#[derive(Debug, Clone)]
pub struct KnapsackInstance {
    pub capacity: f64,
    pub catalog: Catalog,
}

/// Parses the knapsack text format.
///
/// Line 1 is the capacity, line 2 a header that is ignored, and every
/// further line reads `name,weight,value,available`. Malformed item lines
/// are logged and skipped; an unreadable capacity or an empty catalog is
/// an error.
pub fn parse_instance(text: &str) -> Result<KnapsackInstance> {
    let mut lines = text.lines();

    let capacity_line = lines
        .next()
        .ok_or_else(|| Error::invalid_input("empty knapsack file"))?;
    let capacity: f64 = capacity_line
        .trim()
        .parse()
        .map_err(|_| Error::invalid_input(format!("invalid capacity line: {capacity_line:?}")))?;

    // Header line.
    lines.next();

    let mut items = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        match parse_item_line(line) {
            Some(item) => items.push(item),
            None => log::warn!("ignoring improperly formatted item line: {line:?}"),
        }
    }

    if items.is_empty() {
        return Err(Error::invalid_input("knapsack file contains no items"));
    }

    Ok(KnapsackInstance {
        capacity,
        catalog: Catalog::new(items),
    })
}

fn parse_item_line(line: &str) -> Option<Item> {
    let mut fields = line.split(',').map(str::trim);
    let name = fields.next()?.to_string();
    let weight: f64 = fields.next()?.parse().ok()?;
    let value: f64 = fields.next()?.parse().ok()?;
    let available: u32 = fields.next()?.parse().ok()?;
    if name.is_empty() || fields.next().is_some() {
        return None;
    }
    Some(Item {
        name,
        weight,
        value,
        available,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "10\n\
                          item,weight,price,amount\n\
                          A,5,10,2\n\
                          B,3,7,3\n";

    #[test]
    fn test_parse_sample() {
        let instance = parse_instance(SAMPLE).unwrap();
        assert_eq!(instance.capacity, 10.0);
        assert_eq!(instance.catalog.len(), 2);

        let a = instance.catalog.get("A").unwrap();
        assert_eq!(a.weight, 5.0);
        assert_eq!(a.value, 10.0);
        assert_eq!(a.available, 2);
    }

    #[test]
    fn test_malformed_lines_skipped() {
        let text = "10\nheader\nA,5,10,2\nnot a line\nB,3,oops,3\nC,1,1,1\n";
        let instance = parse_instance(text).unwrap();
        assert_eq!(instance.catalog.len(), 2);
        assert!(instance.catalog.get("A").is_some());
        assert!(instance.catalog.get("B").is_none());
        assert!(instance.catalog.get("C").is_some());
    }

    #[test]
    fn test_bad_capacity_is_fatal() {
        assert!(parse_instance("not a number\nheader\nA,1,1,1\n").is_err());
        assert!(parse_instance("").is_err());
    }

    #[test]
    fn test_no_items_is_fatal() {
        assert!(parse_instance("10\nheader\n").is_err());
        assert!(parse_instance("10\nheader\njunk line\n").is_err());
    }

    #[test]
    fn test_get_finds_every_item() {
        let items: Vec<Item> = (0..50)
            .map(|i| Item {
                name: format!("item{i}"),
                weight: 1.0,
                value: f64::from(i),
                available: 1,
            })
            .collect();
        let catalog = Catalog::new(items);
        for i in 0..50 {
            let item = catalog.get(&format!("item{i}")).unwrap();
            assert_eq!(item.value, f64::from(i));
        }
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_get_duplicate_names_first_wins() {
        let catalog = Catalog::new(vec![
            Item {
                name: "A".into(),
                weight: 1.0,
                value: 1.0,
                available: 1,
            },
            Item {
                name: "A".into(),
                weight: 2.0,
                value: 2.0,
                available: 2,
            },
        ]);
        assert_eq!(catalog.get("A").unwrap().value, 1.0);
    }

    #[test]
    fn test_max_quantity() {
        let item = Item {
            name: "A".into(),
            weight: 3.0,
            value: 7.0,
            available: 5,
        };
        // floor(10 / 3) = 3 copies fit.
        assert_eq!(item.max_quantity(10.0), 3);
        // Availability is the binding cap with a large capacity.
        assert_eq!(item.max_quantity(1000.0), 5);
    }

    #[test]
    fn test_max_quantity_weightless_item() {
        let item = Item {
            name: "A".into(),
            weight: 0.0,
            value: 1.0,
            available: 4,
        };
        assert_eq!(item.max_quantity(10.0), 4);
    }
}
