use std::collections::HashMap;

use crate::collation_element::CollationElement;
use crate::entry::EntryStore;
use crate::error::{BuildError, ErrorLatch, PackingOverflow};
use crate::weights::Weights;

/// записать расширения в таблицу; одинаковые последовательности весов записываются один раз
///
/// запись таблицы: количество элементов, затем упакованные элементы
pub fn process_expansions(entries: &mut EntryStore, expansions: &mut Vec<u64>, latch: &mut ErrorLatch)
{
    let mut known: HashMap<Vec<[u32; 3]>, u32> = HashMap::new();
    let mut shared = 0;

    for entry in entries.iter_mut().filter(|entry| entry.is_expansion()) {
        let key: Vec<[u32; 3]> = entry.elements.iter().map(Weights::levels).collect();

        if let Some(&index) = known.get(&key) {
            entry.expansion_index = Some(index);
            shared += 1;
            continue;
        }

        match append_expansion(&entry.elements, expansions) {
            Ok(index) => {
                known.insert(key, index);
                entry.expansion_index = Some(index);
            }
            Err(overflow) => latch.record(BuildError::packing(&entry.runes, overflow)),
        }
    }

    tracing::debug!(
        records = known.len(),
        shared,
        len = expansions.len(),
        "expansion table built"
    );
}

/// дописать запись в таблицу расширений, вернуть её индекс
fn append_expansion(elements: &[Weights], expansions: &mut Vec<u64>) -> Result<u32, PackingOverflow>
{
    let packed = elements
        .iter()
        .map(CollationElement::single_weights)
        .collect::<Result<Vec<_>, _>>()?;

    let index = u32::try_from(expansions.len()).map_err(|_| PackingOverflow {
        field: "expansion index",
        value: expansions.len() as u64,
        max: u32::MAX as u64,
    })?;

    expansions.push(packed.len() as u64);
    expansions.extend(packed.iter().map(|ce| ce.bits()));

    Ok(index)
}
