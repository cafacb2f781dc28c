use indexmap::IndexMap;

use crate::trie::ContractHandle;
use crate::weights::Weights;

/// расположение весов сокращений стартера: бор суффиксов и база в таблице весов сокращений
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractionLocator
{
    pub handle: ContractHandle,
    pub offset: u32,
}

/// запись таблицы: последовательность кодпоинтов и её веса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry
{
    pub(crate) runes: Vec<char>,
    pub(crate) elements: Vec<Weights>,
    /// веса можно получить из декомпозиции NFKD
    pub(crate) decompose: bool,
    /// индекс в таблице расширений
    pub(crate) expansion_index: Option<u32>,
    /// запись - стартер сокращений
    pub(crate) contraction: Option<ContractionLocator>,
}

impl Entry
{
    pub(crate) fn new(runes: Vec<char>, elements: Vec<Weights>) -> Self
    {
        Self {
            runes,
            elements,
            decompose: false,
            expansion_index: None,
            contraction: None,
        }
    }

    pub fn runes(&self) -> &[char]
    {
        &self.runes
    }

    pub fn weights(&self) -> &[Weights]
    {
        &self.elements
    }

    pub fn is_decompose(&self) -> bool
    {
        self.decompose
    }

    /// несколько весов, которые не получить из декомпозиции
    pub fn is_expansion(&self) -> bool
    {
        !self.decompose && self.elements.len() > 1
    }

    /// последовательность из нескольких кодпоинтов
    pub fn is_contraction(&self) -> bool
    {
        self.runes.len() > 1
    }

    /// первый кодпоинт
    pub fn starter(&self) -> char
    {
        self.runes[0]
    }
}

/// записи в порядке добавления, ключ - последовательность кодпоинтов
#[derive(Debug, Clone, Default)]
pub struct EntryStore
{
    entries: IndexMap<Vec<char>, Entry>,
}

impl EntryStore
{
    /// добавить запись; запись с тем же ключом заменяется на своём месте
    pub fn insert(&mut self, entry: Entry)
    {
        self.entries.insert(entry.runes.clone(), entry);
    }

    pub fn get(&self, runes: &[char]) -> Option<&Entry>
    {
        self.entries.get(runes)
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry>
    {
        self.entries.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entry>
    {
        self.entries.values_mut()
    }

    /// запись по порядковому номеру
    pub fn get_index(&self, index: usize) -> Option<&Entry>
    {
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Entry>
    {
        self.entries.get_index_mut(index).map(|(_, entry)| entry)
    }

    /// оставить только записи, удовлетворяющие условию; порядок сохраняется
    pub fn retain(&mut self, mut keep: impl FnMut(&Entry) -> bool)
    {
        self.entries.retain(|_, entry| keep(entry));
    }
}
