// ── Configuration tree <-> wire entity conversions ──
//
// Expand (tree -> entity) is the `Expand` trait and may fail on invalid
// caller input. Flatten (entity -> tree) is a plain `From<&Wire>` impl on
// the tree type and never fails. The helpers below carry the presence
// rules shared by all six resources:
//
// - an unset optional stays unset (`None` is never sent);
// - an empty list is omitted from the wire body;
// - a nested block is sent only when present, and a block that comes back
//   with every field unset flattens to "no block";
// - sequenced lists keep `sequence` equal to the 1-based list position.

mod escalation_policy;
mod group;
mod inbound_integration;
mod schedule;
mod user;
mod workflow;

pub use user::ContactMethodName;
pub use workflow::WorkflowType;

use crate::error::CoreError;

/// Conversion from a configuration tree into its API request entity.
pub trait Expand {
    type Output;

    fn expand(&self) -> Result<Self::Output, CoreError>;
}

/// List elements whose `sequence` mirrors their position.
pub trait Sequenced {
    fn sequence(&self) -> Option<i64>;

    fn set_sequence(&mut self, sequence: i64);
}

// ── Expand helpers ───────────────────────────────────────────────────

/// Expand a nested block only when it is present.
#[allow(clippy::ref_option)]
pub fn expand_block<C: Expand>(
    block: &Option<C>,
    field: &str,
) -> Result<Option<C::Output>, CoreError> {
    block
        .as_ref()
        .map(|b| b.expand().map_err(|e| e.within(field)))
        .transpose()
}

/// Expand every element of a list that the wire always carries.
pub fn expand_each<C: Expand>(list: &[C], field: &str) -> Result<Vec<C::Output>, CoreError> {
    list.iter()
        .enumerate()
        .map(|(index, item)| {
            item.expand()
                .map_err(|e| e.within(&format!("{field}[{index}]")))
        })
        .collect()
}

/// Expand an optional list; an empty list is omitted.
pub fn expand_list<C: Expand>(
    list: &[C],
    field: &str,
) -> Result<Option<Vec<C::Output>>, CoreError> {
    if list.is_empty() {
        return Ok(None);
    }
    expand_each(list, field).map(Some)
}

/// Expand a sequenced list, deriving each unset `sequence` from the
/// element's 1-based position and rejecting one that disagrees with it.
pub fn expand_sequenced<C, W, F>(
    list: &[C],
    field: &str,
    build: F,
) -> Result<Option<Vec<W>>, CoreError>
where
    C: Sequenced,
    F: Fn(&C, i64) -> Result<W, CoreError>,
{
    if list.is_empty() {
        return Ok(None);
    }

    let mut out = Vec::with_capacity(list.len());
    for (index, (item, position)) in list.iter().zip(1_i64..).enumerate() {
        let path = format!("{field}[{index}]");
        if let Some(sequence) = item.sequence().filter(|s| *s != position) {
            return Err(CoreError::validation(
                format!("{path}.sequence"),
                format!("sequence {sequence} does not match list position {position}"),
            ));
        }
        out.push(build(item, position).map_err(|e| e.within(&path))?);
    }
    Ok(Some(out))
}

/// Clone a plain value list, omitting it when empty.
pub fn non_empty<T: Clone>(list: &[T]) -> Option<Vec<T>> {
    (!list.is_empty()).then(|| list.to_vec())
}

// ── Flatten helpers ──────────────────────────────────────────────────

/// Flatten a nested block whose schema has required fields; present
/// blocks are always kept, since their zero values are meaningful.
#[allow(clippy::ref_option)]
pub fn flatten_block<W, C>(block: &Option<W>) -> Option<C>
where
    C: for<'a> From<&'a W>,
{
    block.as_ref().map(C::from)
}

/// Flatten an all-optional block, dropping it when every field is unset.
#[allow(clippy::ref_option)]
pub fn flatten_sparse_block<W, C>(block: &Option<W>) -> Option<C>
where
    W: Default + PartialEq,
    C: for<'a> From<&'a W>,
{
    block
        .as_ref()
        .filter(|inner| **inner != W::default())
        .map(C::from)
}

/// Flatten an optional wire list; absent and empty both become `[]`.
#[allow(clippy::ref_option)]
pub fn flatten_list<W, C>(list: &Option<Vec<W>>) -> Vec<C>
where
    C: for<'a> From<&'a W>,
{
    list.iter().flatten().map(C::from).collect()
}

/// Flatten a sequenced list. Wire order is authoritative: each element's
/// `sequence` is renumbered to its position.
#[allow(clippy::ref_option)]
pub fn flatten_sequenced<W, C>(list: &Option<Vec<W>>) -> Vec<C>
where
    C: for<'a> From<&'a W> + Sequenced,
{
    let mut out: Vec<C> = flatten_list(list);
    for (item, position) in out.iter_mut().zip(1_i64..) {
        item.set_sequence(position);
    }
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Item {
        name: String,
        sequence: Option<i64>,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    struct WireItem {
        name: String,
        sequence: i64,
    }

    impl Sequenced for Item {
        fn sequence(&self) -> Option<i64> {
            self.sequence
        }

        fn set_sequence(&mut self, sequence: i64) {
            self.sequence = Some(sequence);
        }
    }

    impl From<&WireItem> for Item {
        fn from(w: &WireItem) -> Self {
            Self {
                name: w.name.clone(),
                sequence: Some(w.sequence),
            }
        }
    }

    fn build(item: &Item, position: i64) -> Result<WireItem, CoreError> {
        Ok(WireItem {
            name: item.name.clone(),
            sequence: position,
        })
    }

    fn item(name: &str, sequence: Option<i64>) -> Item {
        Item {
            name: name.into(),
            sequence,
        }
    }

    #[test]
    fn unset_sequences_follow_positions() {
        let list = [item("a", None), item("b", Some(2)), item("c", None)];
        let wire = expand_sequenced(&list, "members", build).unwrap().unwrap();
        let sequences: Vec<i64> = wire.iter().map(|w| w.sequence).collect();
        assert_eq!(sequences, vec![1, 2, 3]);
    }

    #[test]
    fn mismatched_sequence_is_rejected_with_path() {
        let list = [item("a", None), item("b", Some(5))];
        let err = expand_sequenced(&list, "members", build).unwrap_err();
        match err {
            CoreError::ValidationFailed { field, message } => {
                assert_eq!(field, "members[1].sequence");
                assert!(message.contains("position 2"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_sequenced_list_is_omitted() {
        let list: [Item; 0] = [];
        assert!(expand_sequenced(&list, "members", build).unwrap().is_none());
    }

    #[test]
    fn flatten_renumbers_in_wire_order() {
        let wire = Some(vec![
            WireItem {
                name: "x".into(),
                sequence: 0,
            },
            WireItem {
                name: "y".into(),
                sequence: 0,
            },
        ]);
        let flat: Vec<Item> = flatten_sequenced(&wire);
        assert_eq!(flat, vec![item("x", Some(1)), item("y", Some(2))]);
    }

    #[test]
    fn sparse_block_drops_all_unset_fields() {
        #[derive(Debug, Default, PartialEq)]
        struct Wire {
            flag: Option<bool>,
        }
        #[derive(Debug, PartialEq)]
        struct Flat {
            flag: Option<bool>,
        }
        impl From<&Wire> for Flat {
            fn from(w: &Wire) -> Self {
                Self { flag: w.flag }
            }
        }

        assert_eq!(flatten_sparse_block::<Wire, Flat>(&Some(Wire::default())), None);
        assert_eq!(
            flatten_sparse_block::<Wire, Flat>(&Some(Wire { flag: Some(false) })),
            Some(Flat { flag: Some(false) })
        );
    }

    #[test]
    fn non_empty_omits_empty_lists() {
        assert_eq!(non_empty::<String>(&[]), None);
        assert_eq!(non_empty(&["a".to_owned()]), Some(vec!["a".to_owned()]));
    }
}
