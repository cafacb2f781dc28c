// бор суффиксов сокращений
//
// сокращение - последовательность кодпоинтов, которой сопоставлены собственные веса. первый кодпоинт
// последовательности - стартер, остальные - суффикс. у многих стартеров одинаковые наборы суффиксов,
// поэтому бор строится по набору суффиксов и может использоваться несколькими стартерами.
//
// каждому суффиксу набора присваивается индекс - позиция в отсортированном наборе + 1, индекс 0 - пустой
// суффикс (стартер сам по себе). по индексу берутся веса из таблицы сокращений: база стартера + индекс.

mod iter;
mod node;

pub use iter::TrieIter;
pub use node::{bake_node, TrieNode, MAX_SUFFIX_INDEX};

use crate::error::PackingOverflow;

/// бор в наборе - смещение первого узла верхнего уровня
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractHandle(u32);

impl ContractHandle
{
    pub(crate) fn new(offset: u32) -> Self
    {
        Self(offset)
    }

    /// смещение первого узла бора
    pub fn offset(self) -> u32
    {
        self.0
    }
}

/// непрерывный массив боров суффиксов
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractTrieSet
{
    nodes: Vec<u32>,
}

impl ContractTrieSet
{
    /// узлы всех боров
    pub fn as_slice(&self) -> &[u32]
    {
        &self.nodes
    }

    /// добавить бор для отсортированного набора уникальных непустых суффиксов
    pub fn append(&mut self, suffixes: &[Vec<char>]) -> Result<ContractHandle, PackingOverflow>
    {
        if suffixes.len() > MAX_SUFFIX_INDEX {
            return Err(PackingOverflow {
                field: "contraction suffix count",
                value: suffixes.len() as u64,
                max: MAX_SUFFIX_INDEX as u64,
            });
        }

        let handle = ContractHandle::new(self.nodes.len() as u32);

        let indexed: Vec<(u8, &[char])> = suffixes
            .iter()
            .enumerate()
            .map(|(i, suffix)| ((i + 1) as u8, suffix.as_slice()))
            .collect();

        bake_level(&indexed, 0, &mut self.nodes);

        Ok(handle)
    }

    /// индекс самого длинного суффикса набора, с которого начинается строка, и количество
    /// совпавших кодпоинтов. (0, 0) - совпадений нет
    pub fn lookup(&self, handle: ContractHandle, suffix: &[char]) -> (usize, usize)
    {
        let mut result = (0, 0);
        let mut offset = handle.offset();

        for (depth, &code) in suffix.iter().enumerate() {
            let node = match TrieIter::new(&self.nodes, offset)
                .find(|node| node.code() == u32::from(code))
            {
                Some(node) => node,
                None => break,
            };

            if node.index() != 0 {
                result = (node.index() as usize, depth + 1);
            }

            if !node.has_children() {
                break;
            }

            offset = node.first_child();
        }

        result
    }
}

/// запечь уровень бора: суффиксы отсортированы, имеют общее начало длиной depth и длиннее его
fn bake_level(suffixes: &[(u8, &[char])], depth: usize, data: &mut Vec<u32>)
{
    let mut groups: Vec<&[(u8, &[char])]> = vec![];
    let mut rest = suffixes;

    // в отсортированном наборе суффиксы с одинаковым кодпоинтом на этой глубине идут подряд
    while let Some((_, first)) = rest.first() {
        let code = first[depth];
        let len = rest
            .iter()
            .take_while(|(_, suffix)| suffix[depth] == code)
            .count();

        groups.push(&rest[.. len]);
        rest = &rest[len ..];
    }

    let last = groups.len().saturating_sub(1);

    for (i, group) in groups.iter().enumerate() {
        let code = group[0].1[depth];

        // суффикс, заканчивающийся на этом узле, в отсортированной группе всегда первый
        let (index, children) = match group[0].1.len() == depth + 1 {
            true => (group[0].0, &group[1 ..]),
            false => (0, &group[..]),
        };

        data.push(bake_node(code, index, !children.is_empty(), i == last));
        bake_level(children, depth + 1, data);
    }
}
