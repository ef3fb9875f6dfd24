//! Removal disciplines a container can commit to.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// The order in which a container hands elements back from `remove`.
///
/// A container reports exactly one of these for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemovalOrder {
    /// Most recently added first.
    Lifo,
    /// Least recently added first.
    Fifo,
    /// Largest value first; equal values leave in insertion order.
    MaxFirst,
}

impl RemovalOrder {
    /// Short human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            RemovalOrder::Lifo => "LIFO",
            RemovalOrder::Fifo => "FIFO",
            RemovalOrder::MaxFirst => "max-first",
        }
    }

    /// Reference model of the discipline.
    ///
    /// Given values in the order they were added, returns the sequence that
    /// successive `remove` calls must yield.
    ///
    /// # Examples
    ///
    /// ```
    /// use container_contract::RemovalOrder;
    ///
    /// let added = [5, 1, 3];
    /// assert_eq!(RemovalOrder::Lifo.arrange(&added), vec![3, 1, 5]);
    /// assert_eq!(RemovalOrder::Fifo.arrange(&added), vec![5, 1, 3]);
    /// assert_eq!(RemovalOrder::MaxFirst.arrange(&added), vec![5, 3, 1]);
    /// ```
    pub fn arrange<T: Ord + Clone>(self, added: &[T]) -> Vec<T> {
        let mut out = added.to_vec();
        match self {
            RemovalOrder::Lifo => out.reverse(),
            RemovalOrder::Fifo => {}
            // stable: ties keep insertion order
            RemovalOrder::MaxFirst => out.sort_by(|a, b| b.cmp(a)),
        }
        out
    }
}

impl core::fmt::Display for RemovalOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
    struct Tagged(u8, &'static str);

    #[test]
    fn max_first_keeps_insertion_order_among_ties() {
        // Ord only looks at the priority so ties are visible through the tag.
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct P(u8, char);
        impl PartialOrd for P {
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for P {
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }

        let added = [P(2, 'a'), P(7, 'b'), P(2, 'c'), P(7, 'd')];
        let tags: Vec<char> = RemovalOrder::MaxFirst
            .arrange(&added)
            .into_iter()
            .map(|p| p.1)
            .collect();
        assert_eq!(tags, vec!['b', 'd', 'a', 'c']);
    }

    #[test]
    fn lifo_and_fifo_are_mirror_images() {
        let added = [Tagged(1, "x"), Tagged(2, "y"), Tagged(3, "z")];
        let mut lifo = RemovalOrder::Lifo.arrange(&added);
        lifo.reverse();
        assert_eq!(lifo, RemovalOrder::Fifo.arrange(&added));
    }

    #[test]
    fn arrange_empty() {
        let added: [u32; 0] = [];
        assert!(RemovalOrder::MaxFirst.arrange(&added).is_empty());
    }

    #[test]
    fn labels() {
        assert_eq!(RemovalOrder::Lifo.label(), "LIFO");
        assert_eq!(RemovalOrder::Fifo.label(), "FIFO");
        assert_eq!(RemovalOrder::MaxFirst.label(), "max-first");
    }
}
