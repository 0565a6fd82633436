use std::fmt;

use serde::{Deserialize, Serialize};

/// A classified marker: its raw code and the category it resolved to.
///
/// `C` is [`crate::Tier`] inside trees and [`crate::ClauseRole`] inside
/// clauses. Unclassified codes never become markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marker<C> {
    pub code: String,
    pub category: C,
}

impl<C> Marker<C> {
    pub fn new(code: impl Into<String>, category: C) -> Self {
        Marker {
            code: code.into(),
            category,
        }
    }
}

impl<C> fmt::Display for Marker<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Tier;

    #[test]
    fn test_marker_displays_its_code() {
        let marker = Marker::new(" 65".trim(), Tier::Primary);
        assert_eq!(marker.code, "65");
        assert_eq!(marker.to_string(), marker.code);
        assert_eq!(marker.category, Tier::Primary);
    }
}
