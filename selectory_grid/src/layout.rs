// Copyright 2025 the Selectory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Designer-facing layout formats.
//!
//! Two ways to author a grid live here:
//!
//! - A comma-separated key string, column by column. Every key is followed by
//!   `,` and an empty entry marks a cell with no option, so a 2x3 grid with a
//!   hole reads `"1,,3,4,5,6,"`.
//! - An [`OptionTable`], a column-major table of option records that yields
//!   both the [`OptionColumn`]s and the unique option list for
//!   [`SelectOptionLogic::initialize`](crate::SelectOptionLogic::initialize).
//!
//! Whitespace is not part of a key; spaces are stripped before splitting.

use alloc::string::String;
use alloc::vec::Vec;

use crate::types::{OptionColumn, OptionReadModel};

/// Separator between keys in an encoded layout.
pub const SPLIT_TAG: char = ',';

/// Whether `text` holds anything besides whitespace.
pub fn has_value(text: &str) -> bool {
    !text.trim().is_empty()
}

/// `text` with every space removed.
pub fn without_space(text: &str) -> String {
    text.replace(' ', "")
}

/// Split an encoded key list.
///
/// Empty entries are dropped when `ignore_empty` is set. Otherwise they are
/// kept as `""`, except for the final entry, which is the terminator of the
/// trailing separator.
pub fn split_keys(text: &str, ignore_empty: bool) -> Vec<String> {
    if !has_value(text) {
        return Vec::new();
    }
    let text = without_space(text);
    let entries: Vec<&str> = text.split(SPLIT_TAG).collect();
    let last = entries.len() - 1;
    entries
        .iter()
        .enumerate()
        .filter_map(|(i, entry)| {
            if has_value(entry) {
                Some(String::from(*entry))
            } else if !ignore_empty && i != last {
                Some(String::new())
            } else {
                None
            }
        })
        .collect()
}

/// Like [`split_keys`], then pad with `""` up to `count` entries.
///
/// Longer lists are returned as is.
pub fn split_keys_padded(text: &str, count: usize, ignore_empty: bool) -> Vec<String> {
    let mut keys = split_keys(text, ignore_empty);
    if keys.len() < count {
        keys.resize(count, String::new());
    }
    keys
}

/// Encode columns as a comma-separated key list, column by column.
pub fn encode_option_keys(columns: &[OptionColumn]) -> String {
    let mut text = String::new();
    for key in columns.iter().flat_map(|c| &c.keys) {
        text.push_str(key);
        text.push(SPLIT_TAG);
    }
    text
}

/// Decode `column_count` columns of `row_count` keys from an encoded key list.
///
/// Missing trailing keys become empty cells; surplus keys are ignored.
pub fn decode_option_columns(
    text: &str,
    column_count: usize,
    row_count: usize,
    ignore_empty: bool,
) -> Vec<OptionColumn> {
    let cell_count = column_count.saturating_mul(row_count);
    let mut keys = split_keys_padded(text, cell_count, ignore_empty).into_iter();
    (0..column_count)
        .map(|_| OptionColumn {
            keys: keys.by_ref().take(row_count).collect(),
        })
        .collect()
}

/// A column-major table of authored option records.
///
/// `None` marks a hole. The first column fixes the row count: shorter columns
/// are padded with holes and longer ones are cut.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionTable<O> {
    /// Option records from the leftmost column, each top to bottom.
    pub columns: Vec<Vec<Option<O>>>,
}

impl<O> Default for OptionTable<O> {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
        }
    }
}

impl<O: OptionReadModel> OptionTable<O> {
    /// Wrap authored columns.
    pub fn new(columns: Vec<Vec<Option<O>>>) -> Self {
        Self { columns }
    }

    /// Number of rows, taken from the first column.
    pub fn row_len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Key columns for the grid, each exactly [`Self::row_len`] long.
    pub fn option_columns(&self) -> Vec<OptionColumn> {
        let rows = self.row_len();
        self.columns
            .iter()
            .map(|column| OptionColumn {
                keys: (0..rows)
                    .map(|y| {
                        column
                            .get(y)
                            .and_then(Option::as_ref)
                            .map_or_else(String::new, |o| String::from(o.key()))
                    })
                    .collect(),
            })
            .collect()
    }

    /// Every record, first occurrence per key, column by column.
    pub fn options(&self) -> Vec<&O> {
        let mut options: Vec<&O> = Vec::new();
        for option in self.columns.iter().flatten().flatten() {
            if !options.iter().any(|o| o.key() == option.key()) {
                options.push(option);
            }
        }
        options
    }

    /// Every record including holes, column by column.
    pub fn options_including_holes(&self) -> impl Iterator<Item = Option<&O>> + '_ {
        self.columns.iter().flatten().map(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SelectOption;
    use alloc::vec;

    const KEY_1: &str = "jkdd";
    const KEY_2: &str = "ldojs";

    #[test]
    fn has_value_rejects_blank() {
        assert!(has_value("hasValue"));
        assert!(!has_value(""));
        assert!(!has_value(" "));
        assert!(!has_value("\t"));
    }

    #[test]
    fn without_space_strips_spaces() {
        assert_eq!(without_space("hello !"), "hello!");
    }

    #[test]
    fn split_keys_cases() {
        assert!(split_keys("", true).is_empty());
        assert_eq!(split_keys("jkdd,", true), vec![KEY_1]);
        assert_eq!(split_keys("jkdd, ldojs,", true), vec![KEY_1, KEY_2]);
        assert_eq!(split_keys("jkdd,,ldojs,", true), vec![KEY_1, KEY_2]);
        assert_eq!(split_keys("jkdd,,ldojs,", false), vec![KEY_1, "", KEY_2]);
        assert_eq!(split_keys("single", false), vec!["single"]);
    }

    #[test]
    fn split_keys_padded_cases() {
        assert_eq!(split_keys_padded("", 3, true), vec!["", "", ""]);
        assert_eq!(split_keys_padded("jkdd,", 3, true), vec![KEY_1, "", ""]);
        assert_eq!(split_keys_padded("jkdd, ldojs,", 3, true), vec![KEY_1, KEY_2, ""]);
        assert_eq!(split_keys_padded("jkdd,,ldojs,", 3, true), vec![KEY_1, KEY_2, ""]);
        assert_eq!(split_keys_padded("jkdd,,ldojs,", 3, false), vec![KEY_1, "", KEY_2]);
        assert_eq!(split_keys_padded("solo", 2, false), vec!["solo", ""]);
        assert_eq!(split_keys_padded("a,b,c,", 2, false), vec!["a", "b", "c"]);
    }

    #[test]
    fn encode_writes_a_trailing_separator_per_key() {
        let columns = vec![
            OptionColumn::new(["1", "", "3"]),
            OptionColumn::new(["4", "5", "6"]),
        ];
        assert_eq!(encode_option_keys(&columns), "1,,3,4,5,6,");
        assert_eq!(encode_option_keys(&[]), "");
    }

    #[test]
    fn decode_restores_encoded_columns() {
        let columns = vec![
            OptionColumn::new(["1", "", "3"]),
            OptionColumn::new(["4", "5", "6"]),
        ];
        let decoded = decode_option_columns(&encode_option_keys(&columns), 2, 3, false);
        assert_eq!(decoded, columns);
    }

    #[test]
    fn decode_pads_and_truncates() {
        let decoded = decode_option_columns("a,b,c,", 2, 2, false);
        assert_eq!(
            decoded,
            vec![OptionColumn::new(["a", "b"]), OptionColumn::new(["c", ""])]
        );

        let decoded = decode_option_columns("a,b,c,d,e,", 1, 2, false);
        assert_eq!(decoded, vec![OptionColumn::new(["a", "b"])]);

        let decoded = decode_option_columns("a,,b,", 1, 3, true);
        assert_eq!(decoded, vec![OptionColumn::new(["a", "b", ""])]);
    }

    #[test]
    fn decode_with_out_of_range_shape() {
        assert!(decode_option_columns("a,b,", 0, usize::MAX, false).is_empty());
    }

    #[test]
    fn option_table_pads_to_first_column() {
        let table = OptionTable::new(vec![
            vec![None, Some(SelectOption::new("a", true)), None],
            vec![Some(SelectOption::new("b", true))],
            vec![
                Some(SelectOption::new("a", false)),
                Some(SelectOption::new("c", true)),
                None,
                Some(SelectOption::new("cut", true)),
            ],
        ]);
        assert_eq!(table.row_len(), 3);
        assert_eq!(
            table.option_columns(),
            vec![
                OptionColumn::new(["", "a", ""]),
                OptionColumn::new(["b", "", ""]),
                OptionColumn::new(["a", "c", ""]),
            ]
        );

        let keys: Vec<(&str, bool)> = table
            .options()
            .into_iter()
            .map(|o| (o.key.as_str(), o.is_enable))
            .collect();
        assert_eq!(keys, vec![("a", true), ("b", true), ("c", true), ("cut", true)]);
        assert_eq!(table.options_including_holes().count(), 8);
    }

    #[test]
    fn empty_table() {
        let table: OptionTable<SelectOption> = OptionTable::default();
        assert_eq!(table.row_len(), 0);
        assert!(table.option_columns().is_empty());
        assert!(table.options().is_empty());
    }
}
