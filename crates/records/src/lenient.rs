//! Numeric fields that also accept their decimal text form.
//!
//! Dashboard forms submit every input as a string, so `"12"` and `12` must
//! both land in a numeric field. Anything that does not parse is rejected.

use core::fmt::Display;
use core::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + FromStr,
    T::Err: Display,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText<T> {
        Number(T),
        Text(String),
    }

    match NumberOrText::<T>::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse()
            .map_err(|e| D::Error::custom(format!("invalid number {s:?}: {e}"))),
    }
}


#[cfg(test)]
mod proptest_tests {
    use proptest::prelude::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Holder {
        #[serde(deserialize_with = "super::number")]
        n: u32,
    }

    proptest! {
        /// Property: a number and its decimal text form read the same.
        #[test]
        fn text_and_number_forms_agree(n in any::<u32>()) {
            let from_number: Holder = serde_json::from_value(serde_json::json!({ "n": n })).unwrap();
            let from_text: Holder = serde_json::from_value(serde_json::json!({ "n": n.to_string() })).unwrap();
            prop_assert_eq!(from_number.n, n);
            prop_assert_eq!(from_text.n, n);
        }
    }
}
