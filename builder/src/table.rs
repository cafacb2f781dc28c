use crate::collation_element::{CollationElement, CollationElementValue};
use crate::data::TableData;
use crate::index::CodepointTrie;
use crate::stages::ContractionTable;

/// собранная таблица весов
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table
{
    trie: CodepointTrie,
    expansions: Vec<u64>,
    contractions: ContractionTable,
    max_tertiary: u32,
}

impl Table
{
    pub(crate) fn new(
        trie: CodepointTrie,
        expansions: Vec<u64>,
        contractions: ContractionTable,
        max_tertiary: u32,
    ) -> Self
    {
        Self {
            trie,
            expansions,
            contractions,
            max_tertiary,
        }
    }

    /// элемент сопоставления кодпоинта
    pub fn element(&self, code: char) -> CollationElement
    {
        self.trie.lookup(u32::from(code))
    }

    /// элементы записи таблицы расширений
    pub fn expansion(&self, index: u32) -> Option<Vec<CollationElement>>
    {
        let start = index as usize;
        let len = *self.expansions.get(start)? as usize;

        self.expansions
            .get(start + 1 ..= start + len)
            .map(|elements| elements.iter().map(|&bits| CollationElement::from_bits(bits)).collect())
    }

    /// элемент самого длинного сокращения, начинающегося со стартера и продолжающегося суффиксом,
    /// и количество совпавших кодпоинтов суффикса
    pub fn contraction(&self, starter: char, suffix: &[char]) -> Option<(CollationElement, usize)>
    {
        let locator = match self.element(starter).value() {
            CollationElementValue::Contraction(locator) => locator,
            _ => return None,
        };

        let (index, matched) = self.contractions.tries.lookup(locator.handle, suffix);
        let bits = self.contractions.elements.get(locator.offset as usize + index)?;

        Some((CollationElement::from_bits(*bits), matched))
    }

    pub fn index(&self) -> &[u16]
    {
        self.trie.index()
    }

    pub fn values(&self) -> &[u64]
    {
        self.trie.values()
    }

    pub fn expansions(&self) -> &[u64]
    {
        &self.expansions
    }

    pub fn contraction_tries(&self) -> &[u32]
    {
        self.contractions.tries.as_slice()
    }

    pub fn contraction_elements(&self) -> &[u64]
    {
        &self.contractions.elements
    }

    pub fn max_contraction_len(&self) -> usize
    {
        self.contractions.max_len
    }

    pub fn max_tertiary(&self) -> u32
    {
        self.max_tertiary
    }

    /// все массивы таблицы
    pub fn data(&self) -> TableData<'_>
    {
        TableData {
            index: self.index(),
            values: self.values(),
            expansions: self.expansions(),
            contraction_tries: self.contraction_tries(),
            contraction_elements: self.contraction_elements(),
            max_contraction_len: self.max_contraction_len(),
            max_tertiary: self.max_tertiary,
        }
    }
}
