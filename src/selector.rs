use std::fmt;

use super::*;

/// The six fragment kinds a compound selector is assembled from, in the
/// order CSS requires them to appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Fragment {
    Element,
    Id,
    Class,
    Attribute,
    PseudoClass,
    PseudoElement,
}

impl Fragment {
    pub(crate) const ALL: [Fragment; 6] = [
        Fragment::Element,
        Fragment::Id,
        Fragment::Class,
        Fragment::Attribute,
        Fragment::PseudoClass,
        Fragment::PseudoElement,
    ];

    pub(crate) fn rank(self) -> usize {
        self as usize
    }

    // element, id and pseudo-element may appear at most once per selector.
    pub(crate) fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An immutable, incrementally built selector string.
///
/// Every append operation checks the CSS part-ordering rules and returns a
/// brand-new `Selector`; the receiver is never mutated, so chains can be
/// branched from any intermediate value.
///
/// ```
/// use selector_builder::Selector;
///
/// let selector = Selector::new()
///     .element("a")?
///     .attr("href$=\".png\"")?
///     .pseudo_class("focus")?;
/// assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
/// # Ok::<(), selector_builder::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    text: String,
    counts: [u8; 6],
}

impl Selector {
    /// The empty zero-state every chain starts from.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an element name as-is, e.g. `div`.
    pub fn element(&self, name: &str) -> Result<Self> {
        self.append(Fragment::Element, name)
    }

    /// Appends `#name`.
    pub fn id(&self, name: &str) -> Result<Self> {
        self.append(Fragment::Id, name)
    }

    /// Appends `.name`. Repeatable.
    pub fn class(&self, name: &str) -> Result<Self> {
        self.append(Fragment::Class, name)
    }

    /// Appends `[spec]`; the caller supplies the full bracket contents,
    /// e.g. `href$=".png"`. Repeatable.
    pub fn attr(&self, spec: &str) -> Result<Self> {
        self.append(Fragment::Attribute, spec)
    }

    /// Appends `:name`. Repeatable.
    pub fn pseudo_class(&self, name: &str) -> Result<Self> {
        self.append(Fragment::PseudoClass, name)
    }

    /// Appends `::name`.
    pub fn pseudo_element(&self, name: &str) -> Result<Self> {
        self.append(Fragment::PseudoElement, name)
    }

    /// Joins two finished selectors with a combinator token, surrounded by
    /// single spaces. The usual combinators are `" "`, `"+"`, `"~"` and
    /// `">"`, but the token is passed through unvalidated.
    ///
    /// The result is terminal: it carries no fragment state of its own, so
    /// it is meant for `stringify` or further `combine` calls only. Fragment
    /// appends on it start from a clean slate and extend the combined text
    /// as a whole, e.g. `combine(a, "+", b).class("x")` renders `a + b.x`.
    pub fn combine(left: &Selector, combinator: &str, right: &Selector) -> Selector {
        Selector {
            text: format!("{} {} {}", left.text, combinator, right.text),
            counts: [0; 6],
        }
    }

    /// Returns the accumulated text unchanged. No further validation runs.
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    fn append(&self, kind: Fragment, value: &str) -> Result<Self> {
        // The order check runs before the duplicate check.
        for later in Fragment::ALL[kind.rank() + 1..].iter().copied() {
            if self.counts[later.rank()] > 0 {
                return Err(Error::OrderViolation {
                    appended: kind,
                    present: later,
                });
            }
        }
        if kind.is_singleton() && self.counts[kind.rank()] > 0 {
            return Err(Error::DuplicateSingleton { fragment: kind });
        }

        let mut next = self.clone();
        // Only zero/non-zero is ever consulted; saturate so long repeatable
        // chains cannot wrap a count back to zero.
        next.counts[kind.rank()] = next.counts[kind.rank()].saturating_add(1);
        match kind {
            Fragment::Element => next.text.push_str(value),
            Fragment::Id => {
                next.text.push('#');
                next.text.push_str(value);
            }
            Fragment::Class => {
                next.text.push('.');
                next.text.push_str(value);
            }
            Fragment::Attribute => {
                next.text.push('[');
                next.text.push_str(value);
                next.text.push(']');
            }
            Fragment::PseudoClass => {
                next.text.push(':');
                next.text.push_str(value);
            }
            Fragment::PseudoElement => {
                next.text.push_str("::");
                next.text.push_str(value);
            }
        }
        Ok(next)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
