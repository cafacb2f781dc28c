use unicode_normalization::UnicodeNormalization;

/// каноническая декомпозиция (NFD)
pub fn canonical(runes: &[char]) -> Vec<char>
{
    runes.iter().copied().nfd().collect()
}

/// декомпозиция совместимости (NFKD)
pub fn compatibility(runes: &[char]) -> Vec<char>
{
    runes.iter().copied().nfkd().collect()
}
