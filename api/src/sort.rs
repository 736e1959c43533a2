//! Sort choices offered above the order list.

/// A `<select>` option: the value kept in state and the caption shown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_SORT_KEY: &str = "recent";

pub const SORT_OPTIONS: [SortOption; 4] = [
    SortOption {
        value: "recent",
        label: "Được tạo gần đây",
    },
    SortOption {
        value: "oldest",
        label: "Cũ nhất",
    },
    SortOption {
        value: "price-high",
        label: "Giá cao nhất",
    },
    SortOption {
        value: "price-low",
        label: "Giá thấp nhất",
    },
];

/// Caption for `sort_key`. Unknown keys are shown as-is.
pub fn sort_label(sort_key: &str) -> &str {
    SORT_OPTIONS
        .iter()
        .find(|option| option.value == sort_key)
        .map(|option| option.label)
        .unwrap_or(sort_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_key_is_an_option() {
        assert_eq!(sort_label(DEFAULT_SORT_KEY), "Được tạo gần đây");
    }

    #[test]
    fn unknown_key_is_echoed() {
        assert_eq!(sort_label("by-colour"), "by-colour");
        assert_eq!(sort_label(""), "");
    }
}
