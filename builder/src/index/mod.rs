// основной бор: кодпоинт -> упакованный элемент сопоставления
//
// три уровня:
//  - верхний индекс: code >> 12, 0x110 записей - номер блока индексов
//  - блок индексов: (code >> 6) & 0x3F, 64 записи - номер блока значений
//  - блок значений: code & 0x3F, 64 значения
//
// одинаковые блоки хранятся один раз. блок 0 каждого уровня - пустой.

use std::collections::{BTreeMap, HashMap};

use crate::collation_element::CollationElement;

const BLOCK_BITS: u32 = 6;
const BLOCK_LEN: usize = 1 << BLOCK_BITS;
const BLOCK_MASK: u32 = (BLOCK_LEN as u32) - 1;
const TOP_SHIFT: u32 = BLOCK_BITS * 2;
/// размер верхнего индекса
pub const TOP_LEN: usize = (char::MAX as usize >> TOP_SHIFT) + 1;

/// заполняемый бор
#[derive(Debug, Clone, Default)]
pub struct CodepointTrieBuilder
{
    values: BTreeMap<u32, u64>,
}

/// собранный бор
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodepointTrie
{
    /// верхний индекс, за ним - блоки индексов
    index: Vec<u16>,
    /// блоки значений
    values: Vec<u64>,
}

impl CodepointTrieBuilder
{
    pub fn insert(&mut self, code: char, element: CollationElement)
    {
        self.values.insert(u32::from(code), element.bits());
    }

    /// собрать бор
    ///
    /// номера блоков укладываются в u16: блоков значений не больше 0x110 * 64 + 1, блоков индексов - 0x110 + 1
    pub fn compile(&self) -> CodepointTrie
    {
        let mut index: Vec<u16> = vec![0; TOP_LEN + BLOCK_LEN];
        let mut values: Vec<u64> = vec![0; BLOCK_LEN];

        let mut value_blocks: HashMap<Vec<u64>, u16> = HashMap::new();
        let mut index_blocks: HashMap<Vec<u16>, u16> = HashMap::new();

        for top in 0 .. TOP_LEN as u32 {
            let mut index_block = vec![0u16; BLOCK_LEN];

            for mid in 0 .. BLOCK_LEN as u32 {
                let base = (top << TOP_SHIFT) | (mid << BLOCK_BITS);
                let mut block = vec![0u64; BLOCK_LEN];
                let mut is_empty = true;

                for (&code, &value) in self.values.range(base .. base + BLOCK_LEN as u32) {
                    block[(code & BLOCK_MASK) as usize] = value;
                    is_empty = false;
                }

                if is_empty {
                    continue;
                }

                let number = *value_blocks.entry(block).or_insert_with_key(|block| {
                    let number = values.len() / BLOCK_LEN;
                    values.extend_from_slice(block);
                    number as u16
                });

                index_block[mid as usize] = number;
            }

            if index_block.iter().all(|&number| number == 0) {
                continue;
            }

            let number = *index_blocks.entry(index_block).or_insert_with_key(|block| {
                let number = (index.len() - TOP_LEN) / BLOCK_LEN;
                index.extend_from_slice(block);
                number as u16
            });

            index[top as usize] = number;
        }

        CodepointTrie { index, values }
    }
}

impl CodepointTrie
{
    /// элемент сопоставления кодпоинта; пустой элемент - записи нет
    #[inline]
    pub fn lookup(&self, code: u32) -> CollationElement
    {
        if code > char::MAX as u32 {
            return CollationElement::default();
        }

        let index_block = self.index[(code >> TOP_SHIFT) as usize] as usize;
        let value_block =
            self.index[TOP_LEN + index_block * BLOCK_LEN + ((code >> BLOCK_BITS) & BLOCK_MASK) as usize];

        CollationElement::from_bits(self.values[value_block as usize * BLOCK_LEN + (code & BLOCK_MASK) as usize])
    }

    pub fn index(&self) -> &[u16]
    {
        &self.index
    }

    pub fn values(&self) -> &[u64]
    {
        &self.values
    }
}
