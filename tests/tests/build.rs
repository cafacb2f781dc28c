use pretty_assertions::assert_eq;
use unicode_collation_builder::{
    BuildError, Builder, BuilderOptions, CollationElementValue, DoubleWeightFault, Level,
    PackingOverflow, Weights,
};
use unicode_collation_builder_tests::{builder, single_weights, SAMPLE};

#[test]
fn end_to_end()
{
    let mut builder = Builder::new();
    builder.add(&['a'], &[&[100, 20, 2]]);
    builder.add(&['a', 'b'], &[&[100, 20, 2], &[150, 20, 2]]);

    assert_eq!(
        builder.entry(&['a']).map(|e| e.weights().to_vec()),
        Some(vec![Weights::new(100, 20, 2, 100)])
    );

    let table = builder.build("").unwrap();

    // стартер сокращения: собственные веса лежат по индексу 0 таблицы сокращений
    let (element, matched) = table.contraction('a', &[]).unwrap();
    assert_eq!(matched, 0);
    assert_eq!(
        element.value(),
        CollationElementValue::SingleWeights {
            primary: 100,
            secondary: 20,
            tertiary: 2,
        }
    );

    let (element, matched) = table.contraction('a', &['b']).unwrap();
    assert_eq!(matched, 1);
    assert_eq!(element.value(), CollationElementValue::Expansion(0));

    let expansion = table.expansion(0).unwrap();
    assert_eq!(table.expansions().len(), 3);
    assert_eq!(
        expansion.iter().map(|ce| ce.value()).collect::<Vec<_>>(),
        vec![
            CollationElementValue::SingleWeights {
                primary: 100,
                secondary: 20,
                tertiary: 2,
            },
            CollationElementValue::SingleWeights {
                primary: 150,
                secondary: 20,
                tertiary: 2,
            },
        ]
    );
    assert_eq!(table.max_contraction_len(), 2);
}

#[test]
fn quaternary_default()
{
    let mut builder = Builder::new();
    builder.add(&['x'], &[&[50]]);

    let entry = builder.entry(&['x']).unwrap();
    assert_eq!(entry.weights(), &[Weights::new(50, 0x20, 0x02, 50)]);
}

#[test]
fn truncation_on_empty_list()
{
    let mut builder = Builder::new();
    builder.add(&['y'], &[&[10, 1, 1], &[], &[20, 1, 1]]);

    let entry = builder.entry(&['y']).unwrap();
    assert_eq!(
        entry.weights(),
        &[Weights::new(10, 1, 1, 10), Weights::new(0, 0, 0, 0)]
    );
}

#[test]
fn custom_options()
{
    let options = BuilderOptions {
        common_secondary: 5,
        common_tertiary: 3,
        max_tertiary: 0x10,
    };

    let mut builder = Builder::with_options(options);
    builder.add(&['x'], &[&[50]]);

    assert_eq!(builder.options(), &options);
    assert_eq!(
        builder.entry(&['x']).map(|e| e.weights().to_vec()),
        Some(vec![Weights::new(50, 5, 3, 50)])
    );

    let table = builder.build("").unwrap();

    assert_eq!(single_weights(&table, 'x'), Some((50, 5, 3)));
    assert_eq!(table.max_tertiary(), 0x10);
    assert_eq!(table.data().max_tertiary, 0x10);
}

#[test]
fn first_recorded_error_wins()
{
    let mut builder = Builder::new();
    // ошибка этапа больших весов
    builder.add(&['a'], &[&[0xFB41, 0, 0, 0]]);
    // ошибка этапа сокращений
    builder.add(&['x', 'a'], &[&[20]]);

    assert_eq!(
        builder.build(""),
        Err(BuildError::MalformedDoubleWeight {
            runes: vec!['a'],
            fault: DoubleWeightFault::MissingContinuation,
        })
    );
}

#[test]
fn reingestion_replaces_entry()
{
    let mut builder = Builder::new();
    builder.add(&['a'], &[&[1]]);
    builder.add(&['b'], &[&[2]]);
    builder.add(&['a'], &[&[3]]);
    builder.add(&[], &[&[4]]);

    assert_eq!(builder.len(), 2);

    let table = builder.build("").unwrap();
    assert_eq!(single_weights(&table, 'a'), Some((3, 0x20, 0x02)));
}

#[test]
fn sample_table()
{
    let table = builder(SAMPLE).build("").unwrap();

    assert_eq!(single_weights(&table, ' '), Some((0x209, 0x20, 0x02)));
    assert_eq!(single_weights(&table, 'b'), Some((0x1FBC, 0x20, 0x02)));
    assert_eq!(table.element('z').value(), CollationElementValue::Implicit);
    assert_eq!(table.max_tertiary(), 0x1F);

    // æ - единственное расширение
    assert_eq!(
        table.element('\u{00E6}').value(),
        CollationElementValue::Expansion(0)
    );
    assert_eq!(table.expansions().len(), 4);
    assert_eq!(table.expansion(0).map(|e| e.len()), Some(3));

    let data = table.data();
    assert_eq!(data.index, table.index());
    assert_eq!(data.values, table.values());
    assert_eq!(data.contraction_tries, table.contraction_tries());
    assert_eq!(data.contraction_elements.len(), 4);
    assert_eq!(data.max_contraction_len, 2);
}

#[test]
fn tailoring_is_ignored()
{
    let plain = builder(SAMPLE).build("").unwrap();

    let mut tailored = builder(SAMPLE);
    tailored.add_tailoring("cs", "ch", "h", Level::Primary);

    assert_eq!(tailored.build("cs").unwrap(), plain);
    assert_eq!(tailored.len(), builder(SAMPLE).len());
}

#[test]
fn packing_error()
{
    let mut builder = Builder::new();
    builder.add(&['a'], &[&[0x100, 0x20, 0x02]]);
    builder.add(&['z'], &[&[0x200, 0x1000, 0x02]]);

    assert_eq!(
        builder.build(""),
        Err(BuildError::PackingError {
            runes: vec!['z'],
            overflow: PackingOverflow {
                field: "secondary",
                value: 0x1000,
                max: 0xFFF,
            },
        })
    );
}
