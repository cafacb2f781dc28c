use crate::collation_element::CollationElement;
use crate::entry::{Entry, EntryStore};
use crate::error::{BuildError, ErrorLatch, PackingOverflow};
use crate::index::{CodepointTrie, CodepointTrieBuilder};
use crate::weights::Weights;

/// построить основной бор: кодпоинт -> элемент сопоставления
///
/// продолжения сокращений собственного места в боре не имеют - их веса лежат в таблице сокращений
pub fn build_primary_trie(entries: &EntryStore, latch: &mut ErrorLatch) -> CodepointTrie
{
    let mut trie = CodepointTrieBuilder::default();

    for entry in entries.iter().filter(|entry| !entry.is_contraction()) {
        match collation_element(entry) {
            Ok(Some(element)) => trie.insert(entry.starter(), element),
            Ok(None) => (),
            Err(overflow) => latch.record(BuildError::packing(&entry.runes, overflow)),
        }
    }

    let trie = trie.compile();

    tracing::debug!(
        index = trie.index().len(),
        values = trie.values().len(),
        "primary trie built"
    );

    trie
}

/// элемент сопоставления одиночной записи; None - расширение без индекса (ошибка уже зафиксирована)
fn collation_element(entry: &Entry) -> Result<Option<CollationElement>, PackingOverflow>
{
    if entry.is_decompose() {
        let tertiary = |i: usize| entry.elements.get(i).map_or(0, |w| w.l3);

        return CollationElement::decomposition(tertiary(0), tertiary(1)).map(Some);
    }

    if let Some(locator) = entry.contraction {
        return CollationElement::contraction(locator).map(Some);
    }

    if entry.is_expansion() {
        return match entry.expansion_index {
            Some(index) => CollationElement::expansion(index as usize).map(Some),
            None => Ok(None),
        };
    }

    CollationElement::single_weights(entry.elements.first().unwrap_or(&Weights::default())).map(Some)
}
