use pretty_assertions::assert_eq;
use rstest::rstest;
use unicode_collation_builder::implicit::{implicit_primary, ILLEGAL_OFFSET};
use unicode_collation_builder::{BuildError, Builder, DoubleWeightFault};
use unicode_collation_builder_tests::{builder, single_weights, SAMPLE};

#[rstest]
#[case(0xFB40, 0x8000 | 0x4E00, 0x4E00)]
#[case(0xFB41, 0x8000 | 0x0100, 0x8100)]
#[case(0xFB84, 0x8000, 0x20000)]
#[case(0xFBC2, 0x8000 | 0x0061, 0x10061)]
fn double_primary_fusion(#[case] high: u32, #[case] low: u32, #[case] code: u32)
{
    let rune = char::from_u32(code).unwrap();

    let mut builder = Builder::new();
    builder.add(&[rune], &[&[high, 0, 0, 0], &[low, 0, 0, 0]]);

    let table = builder.build("").unwrap();

    assert_eq!(single_weights(&table, rune), Some((implicit_primary(code), 0, 0)));
}

#[test]
fn double_primary_in_sample()
{
    let table = builder(SAMPLE).build("").unwrap();

    assert_eq!(
        single_weights(&table, '\u{4E00}'),
        Some((0x4E00 + 0x10000, 0x20, 0x02))
    );
}

#[rstest]
#[case(vec![vec![0xFB41, 0, 0, 0], vec![0x0100, 0, 0, 0]], DoubleWeightFault::MissingFlag)]
#[case(vec![vec![0xFB41, 0, 0, 0]], DoubleWeightFault::MissingContinuation)]
fn malformed_double_primary(#[case] weights: Vec<Vec<u32>>, #[case] fault: DoubleWeightFault)
{
    let weights: Vec<&[u32]> = weights.iter().map(Vec::as_slice).collect();

    let mut builder = Builder::new();
    builder.add(&['a'], &[&[0x1FA2]]);
    builder.add(&['\u{8100}'], &weights);

    assert_eq!(
        builder.build(""),
        Err(BuildError::MalformedDoubleWeight {
            runes: vec!['\u{8100}'],
            fault,
        })
    );
}

#[test]
fn illegal_primary()
{
    let table = builder(SAMPLE).build("").unwrap();

    assert_eq!(
        single_weights(&table, '\u{FFFE}'),
        Some((ILLEGAL_OFFSET, 0x20, 0x05))
    );
}
