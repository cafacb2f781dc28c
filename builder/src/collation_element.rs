use crate::entry::ContractionLocator;
use crate::error::PackingOverflow;
use crate::trie::ContractHandle;
use crate::weights::Weights;

// элемент сопоставления хранится в u64, младшие 3 бита - маркер типа

pub const MARKER_MASK: u64 = 0b_111;

/// записи нет, веса считаются алгоритмически
pub const MARKER_IMPLICIT: u8 = 0b_000;
/// одинарные веса
pub const MARKER_SINGLE_WEIGHTS: u8 = 0b_001;
/// расширение - индекс в таблице расширений
pub const MARKER_EXPANSION: u8 = 0b_010;
/// начало сокращения - бор суффиксов и смещение весов
pub const MARKER_CONTRACTION: u8 = 0b_011;
/// веса получаются из декомпозиции NFKD с заменой L3
pub const MARKER_DECOMPOSITION: u8 = 0b_100;

const PRIMARY_BITS: u32 = 21;
const SECONDARY_BITS: u32 = 12;
const TERTIARY_BITS: u32 = 8;
const EXPANSION_INDEX_BITS: u32 = 24;
const CONTRACT_TRIE_BITS: u32 = 16;
const CONTRACT_OFFSET_BITS: u32 = 16;
const DECOMPOSITION_TERTIARY_BITS: u32 = 8;

/// упакованный элемент сопоставления
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CollationElement(u64);

/// распакованное значение элемента сопоставления
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollationElementValue
{
    Implicit,
    SingleWeights {
        primary: u32,
        secondary: u32,
        tertiary: u32,
    },
    Expansion(u32),
    Contraction(ContractionLocator),
    Decomposition { t1: u32, t2: u32 },
}

impl CollationElement
{
    /// одинарные веса, L4 не хранится
    ///
    /// mmm_ pppp  pppp pppp    pppp pppp  psss ssss        ssss sttt  tttt t___    ____ ____  ____ ____
    ///
    pub fn single_weights(weights: &Weights) -> Result<Self, PackingOverflow>
    {
        let primary = field("primary", weights.l1 as u64, PRIMARY_BITS)?;
        let secondary = field("secondary", weights.l2 as u64, SECONDARY_BITS)?;
        let tertiary = field("tertiary", weights.l3 as u64, TERTIARY_BITS)?;

        Ok(Self(
            (MARKER_SINGLE_WEIGHTS as u64)
                | (primary << 4)
                | (secondary << (4 + PRIMARY_BITS))
                | (tertiary << (4 + PRIMARY_BITS + SECONDARY_BITS)),
        ))
    }

    /// расширение
    ///
    /// mmm_ iiii  iiii iiii    iiii iiii  iiii ____        ____ ____  ____ ____    ____ ____  ____ ____
    ///
    pub fn expansion(index: usize) -> Result<Self, PackingOverflow>
    {
        let index = field("expansion index", index as u64, EXPANSION_INDEX_BITS)?;

        Ok(Self((MARKER_EXPANSION as u64) | (index << 4)))
    }

    /// начало сокращения: n - смещение бора суффиксов, o - смещение весов в таблице сокращений
    ///
    /// mmm_ nnnn  nnnn nnnn    nnnn oooo  oooo oooo        oooo ____  ____ ____    ____ ____  ____ ____
    ///
    pub fn contraction(locator: ContractionLocator) -> Result<Self, PackingOverflow>
    {
        let trie = field(
            "contraction trie offset",
            locator.handle.offset() as u64,
            CONTRACT_TRIE_BITS,
        )?;
        let offset = field(
            "contraction weights offset",
            locator.offset as u64,
            CONTRACT_OFFSET_BITS,
        )?;

        Ok(Self(
            (MARKER_CONTRACTION as u64) | (trie << 4) | (offset << (4 + CONTRACT_TRIE_BITS)),
        ))
    }

    /// декомпозиция: L3 первых двух элементов, остальные L3 - максимальные
    ///
    /// mmm_ 1111  1111 2222    2222 ____  ____ ____        ____ ____  ____ ____    ____ ____  ____ ____
    ///
    pub fn decomposition(t1: u32, t2: u32) -> Result<Self, PackingOverflow>
    {
        let t1 = field("decomposition tertiary", t1 as u64, DECOMPOSITION_TERTIARY_BITS)?;
        let t2 = field("decomposition tertiary", t2 as u64, DECOMPOSITION_TERTIARY_BITS)?;

        Ok(Self(
            (MARKER_DECOMPOSITION as u64) | (t1 << 4) | (t2 << (4 + DECOMPOSITION_TERTIARY_BITS)),
        ))
    }

    #[inline(always)]
    pub fn from_bits(bits: u64) -> Self
    {
        Self(bits)
    }

    #[inline(always)]
    pub fn bits(self) -> u64
    {
        self.0
    }

    #[inline(always)]
    pub fn marker(self) -> u8
    {
        (self.0 & MARKER_MASK) as u8
    }

    /// распаковать
    pub fn value(self) -> CollationElementValue
    {
        match self.marker() {
            MARKER_SINGLE_WEIGHTS => CollationElementValue::SingleWeights {
                primary: bits(self.0, 4, PRIMARY_BITS),
                secondary: bits(self.0, 4 + PRIMARY_BITS, SECONDARY_BITS),
                tertiary: bits(self.0, 4 + PRIMARY_BITS + SECONDARY_BITS, TERTIARY_BITS),
            },
            MARKER_EXPANSION => {
                CollationElementValue::Expansion(bits(self.0, 4, EXPANSION_INDEX_BITS))
            }
            MARKER_CONTRACTION => CollationElementValue::Contraction(ContractionLocator {
                handle: ContractHandle::new(bits(self.0, 4, CONTRACT_TRIE_BITS)),
                offset: bits(self.0, 4 + CONTRACT_TRIE_BITS, CONTRACT_OFFSET_BITS),
            }),
            MARKER_DECOMPOSITION => CollationElementValue::Decomposition {
                t1: bits(self.0, 4, DECOMPOSITION_TERTIARY_BITS),
                t2: bits(self.0, 4 + DECOMPOSITION_TERTIARY_BITS, DECOMPOSITION_TERTIARY_BITS),
            },
            _ => CollationElementValue::Implicit,
        }
    }
}

impl core::fmt::Debug for CollationElement
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result
    {
        write!(f, "{:016X} {:?}", self.0, self.value())
    }
}

/// проверить, что значение умещается в заданное количество бит
fn field(name: &'static str, value: u64, width: u32) -> Result<u64, PackingOverflow>
{
    let max = (1 << width) - 1;

    match value <= max {
        true => Ok(value),
        false => Err(PackingOverflow {
            field: name,
            value,
            max,
        }),
    }
}

#[inline(always)]
fn bits(value: u64, shift: u32, width: u32) -> u32
{
    ((value >> shift) & ((1 << width) - 1)) as u32
}
