// упрощение таблицы
//
// записи, веса которых совпадают с весами их канонической декомпозиции, удаляются - при поиске веса
// будут получены из декомпозиции. записи, веса которых воспроизводятся из декомпозиции совместимости с
// точностью до L3, помечаются: в таблице останутся только их L3.
//
// стартеры сокращений не трогаем - их записи нужны, чтобы найти бор суффиксов.

use std::collections::HashSet;

use crate::decomposition;
use crate::entry::{Entry, EntryStore};
use crate::implicit::implicit_primary;
use crate::options::BuilderOptions;
use crate::weights::{equal_levels, Weights};

pub fn simplify(entries: &mut EntryStore, options: &BuilderOptions)
{
    let keep: HashSet<char> = entries
        .iter()
        .filter(|entry| entry.is_contraction())
        .map(Entry::starter)
        .collect();

    let removed = canonical_duplicates(entries, &keep, options);
    entries.retain(|entry| entry.is_contraction() || !removed.contains(&entry.starter()));

    let decompose = compatibility_duplicates(entries, &keep, options);
    for entry in entries.iter_mut() {
        if !entry.is_contraction() && decompose.contains(&entry.starter()) {
            entry.decompose = true;
        }
    }

    tracing::debug!(
        removed = removed.len(),
        decompose = decompose.len(),
        remaining = entries.len(),
        "entries simplified"
    );
}

/// одиночная запись, которую можно удалить или пометить
fn is_candidate(entry: &Entry, keep: &HashSet<char>) -> bool
{
    !entry.is_contraction() && !keep.contains(&entry.starter())
}

/// кодпоинты, веса которых совпадают с весами их NFD
fn canonical_duplicates(entries: &EntryStore, keep: &HashSet<char>, options: &BuilderOptions) -> HashSet<char>
{
    entries
        .iter()
        .filter(|entry| is_candidate(entry, keep))
        .filter(|entry| {
            let nfd = decomposition::canonical(&entry.runes);

            nfd != entry.runes && equal_levels(&derive_elements(entries, &nfd, options), &entry.elements)
        })
        .map(Entry::starter)
        .collect()
}

/// кодпоинты, веса которых воспроизводятся из NFKD
fn compatibility_duplicates(
    entries: &EntryStore,
    keep: &HashSet<char>,
    options: &BuilderOptions,
) -> HashSet<char>
{
    entries
        .iter()
        .filter(|entry| is_candidate(entry, keep))
        .filter(|entry| {
            let nfkd = decomposition::compatibility(&entry.runes);

            nfkd != entry.runes
                && reproducible_from_compatibility(
                    &entry.elements,
                    &derive_elements(entries, &nfkd, options),
                    options.max_tertiary,
                )
        })
        .map(Entry::starter)
        .collect()
}

/// веса строки из весов её кодпоинтов; для кодпоинтов без записи - вычисляемые веса
pub fn derive_elements(entries: &EntryStore, runes: &[char], options: &BuilderOptions) -> Vec<Weights>
{
    let mut result = vec![];

    for &rune in runes {
        match entries.get(&[rune]) {
            Some(entry) => result.extend_from_slice(&entry.elements),
            None => result.push(Weights::new(
                implicit_primary(u32::from(rune)),
                options.common_secondary,
                options.common_tertiary,
                u32::from(rune),
            )),
        }
    }

    result
}

/// веса записи воспроизводятся из декомпозиции совместимости:
///  - одинаковая длина, совпадают L1 и L2;
///  - L3 первых двух элементов совпадают;
///  - L3 остальных элементов записи - максимальные
fn reproducible_from_compatibility(elements: &[Weights], nfkd: &[Weights], max_tertiary: u32) -> bool
{
    if elements.len() != nfkd.len() {
        return false;
    }

    elements.iter().zip(nfkd).enumerate().all(|(i, (weights, derived))| {
        let tertiary = match i < 2 {
            true => weights.l3 == derived.l3,
            false => weights.l3 == max_tertiary,
        };

        weights.l1 == derived.l1 && weights.l2 == derived.l2 && tertiary
    })
}
