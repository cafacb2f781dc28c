// сокращения
//
// записи из нескольких кодпоинтов группируются по стартеру. для группы строится (или берётся уже
// построенный) бор суффиксов, веса группы записываются подряд в общий массив в порядке индексов бора:
// по индексу 0 - веса самого стартера. стартеру достаются бор и база группы в массиве весов, так что
// при поиске веса сокращения находятся по адресу база + индекс найденного суффикса.

use std::collections::HashMap;

use crate::collation_element::CollationElement;
use crate::entry::{ContractionLocator, Entry, EntryStore};
use crate::error::{BuildError, ErrorLatch, PackingOverflow};
use crate::trie::{ContractHandle, ContractTrieSet};
use crate::weights::Weights;

/// боры суффиксов и веса сокращений
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContractionTable
{
    /// боры суффиксов всех стартеров
    pub tries: ContractTrieSet,
    /// веса: для каждого стартера - непрерывный блок, адресуемый индексами бора
    pub elements: Vec<u64>,
    /// максимальная длина сокращения в кодпоинтах
    pub max_len: usize,
}

/// построить таблицу сокращений
///
/// несоответствие индексов бора и группы - фатальная ошибка, остальные ошибки фиксируются
pub fn process_contractions(
    entries: &mut EntryStore,
    table: &mut ContractionTable,
    latch: &mut ErrorLatch,
) -> Result<(), BuildError>
{
    let (starters, groups) = group_by_starter(entries, table);
    let mut handles: HashMap<Vec<Vec<char>>, ContractHandle> = HashMap::new();

    for starter in starters {
        let group = match groups.get(&starter) {
            Some(group) => group,
            None => continue,
        };
        let members: Vec<&Entry> = group.iter().filter_map(|&i| entries.get_index(i)).collect();

        if !members.iter().any(|entry| !entry.is_contraction()) {
            latch.record(BuildError::ContractionMissingBaseEntry { starter });
            continue;
        }

        let mut suffixes: Vec<Vec<char>> = members
            .iter()
            .filter(|entry| entry.is_contraction())
            .map(|entry| entry.runes[1 ..].to_vec())
            .collect();
        suffixes.sort();

        let handle = match handles.get(&suffixes) {
            Some(&handle) => handle,
            None => match table.tries.append(&suffixes) {
                Ok(handle) => {
                    handles.insert(suffixes, handle);
                    handle
                }
                Err(overflow) => {
                    latch.record(BuildError::packing(&[starter], overflow));
                    continue;
                }
            },
        };

        // индексы записей группы в боре
        let mut indexed = Vec::with_capacity(group.len());

        for (&position, entry) in group.iter().zip(&members) {
            let index = match entry.is_contraction() {
                true => {
                    let suffix = &entry.runes[1 ..];
                    let (index, matched) = table.tries.lookup(handle, suffix);

                    if matched != suffix.len() {
                        return Err(BuildError::ContractionIndexConsistency {
                            starter,
                            reason: format!(
                                "suffix matched {} of {} code points",
                                matched,
                                suffix.len()
                            ),
                        });
                    }

                    index
                }
                false => 0,
            };

            indexed.push((index, position));
        }

        let slots = bucket_by_index(starter, group.len(), indexed)?;

        let locator = ContractionLocator {
            handle,
            offset: table.elements.len() as u32,
        };

        if let Some(entry) = entries.get_index_mut(slots[0]) {
            entry.contraction = Some(locator);
        }

        for &position in slots.iter() {
            let entry = match entries.get_index(position) {
                Some(entry) => entry,
                None => continue,
            };

            // при ошибке оставляем пустой элемент, чтобы не сдвинуть индексы группы
            let element = base_element(entry).unwrap_or_else(|overflow| {
                latch.record(BuildError::packing(&entry.runes, overflow));
                CollationElement::default()
            });

            table.elements.push(element.bits());
        }
    }

    tracing::debug!(
        tries = handles.len(),
        nodes = table.tries.as_slice().len(),
        elements = table.elements.len(),
        max_len = table.max_len,
        "contraction table built"
    );

    Ok(())
}

/// стартеры в порядке появления и позиции записей групп: сначала сокращения, затем сам стартер
fn group_by_starter(
    entries: &EntryStore,
    table: &mut ContractionTable,
) -> (Vec<char>, HashMap<char, Vec<usize>>)
{
    let mut starters = vec![];
    let mut groups: HashMap<char, Vec<usize>> = HashMap::new();

    for (position, entry) in entries.iter().enumerate() {
        if entry.is_contraction() {
            table.max_len = table.max_len.max(entry.runes.len());

            groups
                .entry(entry.starter())
                .or_insert_with(|| {
                    starters.push(entry.starter());
                    vec![]
                })
                .push(position);
        }
    }

    for (position, entry) in entries.iter().enumerate() {
        if !entry.is_contraction() {
            if let Some(group) = groups.get_mut(&entry.starter()) {
                group.push(position);
            }
        }
    }

    (starters, groups)
}

/// разложить записи группы по индексам бора; индекс вне группы или повтор индекса - фатальная ошибка
fn bucket_by_index(
    starter: char,
    len: usize,
    indexed: impl IntoIterator<Item = (usize, usize)>,
) -> Result<Vec<usize>, BuildError>
{
    let mut slots: Vec<Option<usize>> = vec![None; len];

    for (index, position) in indexed {
        let slot = slots
            .get_mut(index)
            .ok_or_else(|| BuildError::ContractionIndexConsistency {
                starter,
                reason: format!("index {} out of range 0 .. {}", index, len),
            })?;

        if slot.is_some() {
            return Err(BuildError::ContractionIndexConsistency {
                starter,
                reason: format!("multiple contractions for index {}", index),
            });
        }

        *slot = Some(position);
    }

    Ok(slots.into_iter().flatten().collect())
}

/// элемент сопоставления записи без учёта сокращений и декомпозиции
fn base_element(entry: &Entry) -> Result<CollationElement, PackingOverflow>
{
    match entry.is_expansion() {
        // индекса нет - ошибка уже зафиксирована при построении таблицы расширений
        true => match entry.expansion_index {
            Some(index) => CollationElement::expansion(index as usize),
            None => Ok(CollationElement::default()),
        },
        false => CollationElement::single_weights(entry.elements.first().unwrap_or(&Weights::default())),
    }
}
