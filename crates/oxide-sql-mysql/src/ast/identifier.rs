//! Names and qualified name chains.

/// A possibly qualified name such as `col`, `t.col` or `db.t.col`.
///
/// Qualification is stored as a parent chain: in `db.t.col` the node for
/// `col` has parent `t`, whose parent is `db`. The root of a chain has no
/// parent. The unquoted text `*` is the wildcard, and nothing may be
/// qualified by a wildcard.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// Qualifier, if any.
    pub parent: Option<Box<Identifier>>,
    /// The name as written (case preserved, quotes removed).
    pub text: String,
    /// Whether the name was backtick-quoted.
    pub quoted: bool,
}

impl Identifier {
    /// Creates an unqualified, unquoted identifier.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            parent: None,
            text: text.into(),
            quoted: false,
        }
    }

    /// Creates an unqualified, backtick-quoted identifier.
    #[must_use]
    pub fn quoted(text: impl Into<String>) -> Self {
        Self {
            parent: None,
            text: text.into(),
            quoted: true,
        }
    }

    /// Creates `*` or `qualifier.*`.
    #[must_use]
    pub fn wildcard(parent: Option<Self>) -> Self {
        Self {
            parent: parent.map(Box::new),
            text: String::from("*"),
            quoted: false,
        }
    }

    /// Qualifies `child` by `self`, returning the child.
    #[must_use]
    pub fn child(self, mut child: Self) -> Self {
        child.parent = Some(Box::new(self));
        child
    }

    /// Returns true for `*` and `qualifier.*`.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        !self.quoted && self.text == "*"
    }

    /// Upper-cased text, used for case-insensitive comparison.
    #[must_use]
    pub fn upper(&self) -> String {
        self.text.to_uppercase()
    }

    /// Compares two chains name by name, ignoring case and quoting.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        if self.upper() != other.upper() {
            return false;
        }
        match (&self.parent, &other.parent) {
            (None, None) => true,
            (Some(a), Some(b)) => a.eq_ignore_case(b),
            _ => false,
        }
    }

    /// The chain from root to this node.
    #[must_use]
    pub fn parts(&self) -> Vec<&Self> {
        let mut parts = match &self.parent {
            Some(parent) => parent.parts(),
            None => Vec::new(),
        };
        parts.push(self);
        parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain() {
        let id = Identifier::new("db")
            .child(Identifier::new("t"))
            .child(Identifier::quoted("Col"));
        let parts: Vec<&str> = id.parts().iter().map(|p| p.text.as_str()).collect();
        assert_eq!(parts, vec!["db", "t", "Col"]);
        assert_eq!(id.upper(), "COL");
        assert!(id.parts()[0].parent.is_none());
    }

    #[test]
    fn test_wildcard() {
        let star = Identifier::wildcard(Some(Identifier::new("t")));
        assert!(star.is_wildcard());
        assert!(!Identifier::quoted("*").is_wildcard());
    }

    #[test]
    fn test_eq_ignore_case() {
        let a = Identifier::new("T").child(Identifier::new("id"));
        let b = Identifier::quoted("t").child(Identifier::new("ID"));
        assert!(a.eq_ignore_case(&b));
        assert!(!a.eq_ignore_case(&Identifier::new("id")));
    }
}
