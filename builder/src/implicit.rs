// вычисляемые веса
//
// см. https://www.unicode.org/reports/tr10/#Implicit_Weights
//
// в DUCET вычисляемые веса записываются парой [.FBxx.0020.0002][.BBBB.0000.0000], где FBxx - база диапазона
// плюс старшие биты кодпоинта, а BBBB - младшие 15 бит кодпоинта с флагом 0x8000.
// в таблице храним один первичный вес: кодпоинт со смещением, зависящим от диапазона. относительный
// порядок кодпоинтов при этом сохраняется.

/// смещение основных иероглифов хань и блока совместимости
pub const COMMON_UNIFIED_OFFSET: u32 = 0x10000;
/// смещение прочих иероглифов (последний кодпоинт основного блока - U+FAFF)
pub const RARE_UNIFIED_OFFSET: u32 = 0x20000;
/// смещение всех остальных кодпоинтов (последний прочий иероглиф U+323AF получает 0x523AF)
pub const OTHER_OFFSET: u32 = 0x60000;
/// смещение для недопустимых кодпоинтов (U+FFFE, U+FFFF в DUCET), следует за весом U+10FFFF
pub const ILLEGAL_OFFSET: u32 = OTHER_OFFSET + char::MAX as u32 + 1;
/// первичный вес, больше которого вычисляемые веса не бывают
pub const MAX_PRIMARY: u32 = ILLEGAL_OFFSET + 1;

/// первичный вес для кодпоинта, у которого нет записи в таблице
#[inline]
pub fn implicit_primary(code: u32) -> u32
{
    if is_ideographic(code) {
        if is_han_core(code) || is_han_compatibility(code) {
            return code + COMMON_UNIFIED_OFFSET;
        }

        return code + RARE_UNIFIED_OFFSET;
    }

    code + OTHER_OFFSET
}

/// Ideographic=Yes
pub fn is_ideographic(code: u32) -> bool
{
    is_han_core(code)
        || is_han_compatibility(code)
        || is_han_other(code)
        || is_tangut(code)
        || is_nushu(code)
        || is_khitan(code)
        || is_ideographic_mark(code)
}

/// Основные иероглифы унификации Хань
/// https://en.wikipedia.org/wiki/CJK_Unified_Ideographs
///
/// Базовый блок иероглифов унификации Хань
///     U+4E00 ..= U+9FFF
pub fn is_han_core(code: u32) -> bool
{
    (0x4E00 ..= 0x9FFF).contains(&code)
}

/// Иероглифы совместимости
///     U+F900 ..= U+FA6D
///     U+FA70 ..= U+FAD9
pub fn is_han_compatibility(code: u32) -> bool
{
    (0xF900 ..= 0xFA6D).contains(&code) || (0xFA70 ..= 0xFAD9).contains(&code)
}

/// Иероглифы унификации Хань (прочие) и дополнение иероглифов совместимости
///     U+3400 ..= U+4DBF
///     U+20000 ..= U+2A6DF
///     U+2A700 ..= U+2B739
///     U+2B740 ..= U+2B81D
///     U+2B820 ..= U+2CEA1
///     U+2CEB0 ..= U+2EBE0
///     U+2EBF0 ..= U+2EE5D
///     U+2F800 ..= U+2FA1D
///     U+30000 ..= U+3134A
///     U+31350 ..= U+323AF
pub fn is_han_other(code: u32) -> bool
{
    [
        (0x3400 ..= 0x4DBF),
        (0x20000 ..= 0x2A6DF),
        (0x2A700 ..= 0x2B739),
        (0x2B740 ..= 0x2B81D),
        (0x2B820 ..= 0x2CEA1),
        (0x2CEB0 ..= 0x2EBE0),
        (0x2EBF0 ..= 0x2EE5D),
        (0x2F800 ..= 0x2FA1D),
        (0x30000 ..= 0x3134A),
        (0x31350 ..= 0x323AF),
    ]
    .iter()
    .any(|range| range.contains(&code))
}

/// Тангутское письмо, компоненты и дополнение
///     U+17000 ..= U+187F7
///     U+18800 ..= U+18AFF
///     U+18D00 ..= U+18D08
pub fn is_tangut(code: u32) -> bool
{
    [
        (0x17000 ..= 0x187F7),
        (0x18800 ..= 0x18AFF),
        (0x18D00 ..= 0x18D08),
    ]
    .iter()
    .any(|range| range.contains(&code))
}

/// Нюй-шу
///     U+1B170 ..= U+1B2FB
pub fn is_nushu(code: u32) -> bool
{
    (0x1B170 ..= 0x1B2FB).contains(&code)
}

/// Киданьская письменность
///     U+18B00 ..= U+18CD5
pub fn is_khitan(code: u32) -> bool
{
    (0x18B00 ..= 0x18CD5).contains(&code)
}

/// идеографические знаки из блока CJK Symbols and Punctuation
///     U+3006, U+3007, U+3021 ..= U+3029, U+3038 ..= U+303A
fn is_ideographic_mark(code: u32) -> bool
{
    matches!(code, 0x3006 | 0x3007 | 0x3021 ..= 0x3029 | 0x3038 ..= 0x303A)
}
