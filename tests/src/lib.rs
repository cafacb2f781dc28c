//! общие данные для интеграционных тестов сборщика таблицы

use unicode_collation_builder::{Builder, CollationElementValue, Table};

/// фрагмент allkeys: латиница, лигатуры, сокращения, вычисляемые и недопустимые веса
pub const SAMPLE: &str = "
0020 ; [*0209.0020.0002] # SPACE
0061 ; [.1FA2.0020.0002] # LATIN SMALL LETTER A
0062 ; [.1FBC.0020.0002] # LATIN SMALL LETTER B
0063 ; [.1FD7.0020.0002] # LATIN SMALL LETTER C
0064 ; [.1FE4.0020.0002] # LATIN SMALL LETTER D
0065 ; [.2022.0020.0002] # LATIN SMALL LETTER E
0066 ; [.2078.0020.0002] # LATIN SMALL LETTER F
0068 ; [.20D3.0020.0002] # LATIN SMALL LETTER H
0069 ; [.2108.0020.0002] # LATIN SMALL LETTER I
0301 ; [.0000.0024.0002] # COMBINING ACUTE ACCENT
00E9 ; [.2022.0020.0002][.0000.0024.0002] # LATIN SMALL LETTER E WITH ACUTE
00E6 ; [.1FA2.0020.0004][.0000.0110.0004][.2022.0020.0004] # LATIN SMALL LETTER AE
FB00 ; [.2078.0020.0002][.2078.0020.0002] # LATIN SMALL LIGATURE FF
FB03 ; [.2078.0020.0002][.2078.0020.0002][.2108.0020.001F] # LATIN SMALL LIGATURE FFI
0063 0068 ; [.2001.0020.0002] # LATIN SMALL LETTER C, LATIN SMALL LETTER H
0064 0068 ; [.2002.0020.0002] # LATIN SMALL LETTER D, LATIN SMALL LETTER H
4E00 ; [.FB40.0020.0002][.CE00.0000.0000] # CJK UNIFIED IDEOGRAPH-4E00
FFFE ; [.FFFE.0020.0005] # <noncharacter-FFFE>
";

/// записи в формате allkeys: кодпоинты и списки весов
pub fn parse_allkeys(source: &str) -> Vec<(Vec<char>, Vec<Vec<u32>>)>
{
    source.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<(Vec<char>, Vec<Vec<u32>>)>
{
    let line = line.split('#').next()?.trim();
    let (codes, weights) = line.split_once(';')?;

    let runes = codes
        .split_whitespace()
        .map(|code| u32::from_str_radix(code, 16).ok().and_then(char::from_u32))
        .collect::<Option<Vec<char>>>()?;

    let weights = weights
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split("][")
        .map(|element| {
            element
                .trim_start_matches(['.', '*'])
                .split(['.', '*'])
                .map(|value| u32::from_str_radix(value, 16).ok())
                .collect::<Option<Vec<u32>>>()
        })
        .collect::<Option<Vec<_>>>()?;

    Some((runes, weights))
}

/// сборщик, заполненный записями allkeys
pub fn builder(source: &str) -> Builder
{
    let mut builder = Builder::new();

    for (runes, weights) in parse_allkeys(source) {
        let weights: Vec<&[u32]> = weights.iter().map(Vec::as_slice).collect();
        builder.add(&runes, &weights);
    }

    builder
}

/// одинарные веса кодпоинта в таблице
pub fn single_weights(table: &Table, code: char) -> Option<(u32, u32, u32)>
{
    match table.element(code).value() {
        CollationElementValue::SingleWeights {
            primary,
            secondary,
            tertiary,
        } => Some((primary, secondary, tertiary)),
        _ => None,
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn sample_is_parsed()
    {
        let entries = parse_allkeys(SAMPLE);

        assert_eq!(entries.len(), 18);
        assert_eq!(entries[0], (vec![' '], vec![vec![0x209, 0x20, 0x02]]));
        assert_eq!(entries[14].0, vec!['c', 'h']);
        assert_eq!(entries[16].1, vec![vec![0xFB40, 0x20, 0x02], vec![0xCE00, 0, 0]]);
    }
}
