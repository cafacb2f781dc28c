use pretty_assertions::assert_eq;
use unicode_collation_builder::{BuildError, Builder, CollationElementValue, Table};
use unicode_collation_builder_tests::{builder, SAMPLE};

fn primary(table: &Table, starter: char, suffix: &[char]) -> Option<(u32, usize)>
{
    let (element, matched) = table.contraction(starter, suffix)?;

    match element.value() {
        CollationElementValue::SingleWeights { primary, .. } => Some((primary, matched)),
        _ => None,
    }
}

#[test]
fn shared_suffix_trie()
{
    let table = builder(SAMPLE).build("").unwrap();

    let locator = |c: char| match table.element(c).value() {
        CollationElementValue::Contraction(locator) => Some(locator),
        _ => None,
    };

    let c = locator('c').unwrap();
    let d = locator('d').unwrap();

    assert_eq!(c.handle, d.handle);
    assert_eq!(c.offset, 0);
    assert_eq!(d.offset, 2);
    assert_eq!(table.contraction_tries().len(), 1);
}

#[test]
fn longest_match()
{
    let mut builder = Builder::new();
    builder.add(&['l'], &[&[10]]);
    builder.add(&['l', 'l'], &[&[11]]);
    builder.add(&['l', 'l', 'x'], &[&[12]]);
    builder.add(&['l', 'y'], &[&[13]]);

    let table = builder.build("").unwrap();

    assert_eq!(table.max_contraction_len(), 3);
    assert_eq!(primary(&table, 'l', &[]), Some((10, 0)));
    assert_eq!(primary(&table, 'l', &['a']), Some((10, 0)));
    assert_eq!(primary(&table, 'l', &['l']), Some((11, 1)));
    assert_eq!(primary(&table, 'l', &['l', 'x', 'x']), Some((12, 2)));
    assert_eq!(primary(&table, 'l', &['l', 'y']), Some((11, 1)));
    assert_eq!(primary(&table, 'l', &['y']), Some((13, 1)));
    assert_eq!(table.contraction('m', &['l']), None);
}

#[test]
fn missing_base_entry()
{
    let mut builder = Builder::new();
    builder.add(&['x', 'a'], &[&[20]]);
    builder.add(&['x', 'b'], &[&[21]]);
    builder.add(&['y'], &[&[30]]);
    builder.add(&['y', 'a'], &[&[31]]);

    let error = builder.build("").unwrap_err();

    assert_eq!(error, BuildError::ContractionMissingBaseEntry { starter: 'x' });
    assert!(!error.is_fatal());
}
