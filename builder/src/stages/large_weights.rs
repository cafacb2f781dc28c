// большие первичные веса
//
// см. https://www.unicode.org/reports/tr10/#Implicit_Weights
//
// CJK и прочие кодпоинты с вычисляемыми весами записаны в DUCET как
//   [.FBxx.0020.0002][.BBBB.0000.0000]
// заменяем такую пару одним элементом с первичным весом implicit_primary(кодпоинт).
// веса >= 0xFFFE - недопустимые кодпоинты, переносим их в отдельный диапазон.

use crate::entry::EntryStore;
use crate::error::{BuildError, DoubleWeightFault, ErrorLatch};
use crate::implicit::{implicit_primary, ILLEGAL_OFFSET};
use crate::weights::Weights;

const FIRST_LARGE_PRIMARY: u32 = 0xFB40;
const ILLEGAL_PRIMARY: u32 = 0xFFFE;
const HIGH_BITS_MASK: u32 = 0x3F;
const LOW_BITS_MASK: u32 = 0x7FFF;
const LOW_BITS_FLAG: u32 = 0x8000;
const SHIFT_BITS: u32 = 15;

/// заменить большие первичные веса во всех записях
pub fn split_large_weights(entries: &mut EntryStore, latch: &mut ErrorLatch)
{
    let mut converted = 0;

    for entry in entries.iter_mut() {
        if !entry.elements.iter().any(|w| w.l1 >= FIRST_LARGE_PRIMARY) {
            continue;
        }

        match convert_large_weights(&entry.elements) {
            Ok(elements) => {
                entry.elements = elements;
                converted += 1;
            }
            Err(fault) => latch.record(BuildError::MalformedDoubleWeight {
                runes: entry.runes.clone(),
                fault,
            }),
        }
    }

    tracing::debug!(converted, "large primary weights converted");
}

/// последовательность весов, где двойные первичные веса объединены, а недопустимые - перенесены
pub fn convert_large_weights(elements: &[Weights]) -> Result<Vec<Weights>, DoubleWeightFault>
{
    let mut result = Vec::with_capacity(elements.len());
    let mut iter = elements.iter().copied();

    while let Some(mut weights) = iter.next() {
        let primary = weights.l1;

        if primary >= ILLEGAL_PRIMARY {
            weights.l1 = ILLEGAL_OFFSET.saturating_add(primary - ILLEGAL_PRIMARY);
        } else if primary >= FIRST_LARGE_PRIMARY {
            // вторая часть двойного веса поглощается первой
            let low = iter
                .next()
                .ok_or(DoubleWeightFault::MissingContinuation)?
                .l1;

            if low & LOW_BITS_FLAG == 0 {
                return Err(DoubleWeightFault::MissingFlag);
            }

            let code = ((primary & HIGH_BITS_MASK) << SHIFT_BITS) | (low & LOW_BITS_MASK);
            weights.l1 = implicit_primary(code);
        }

        result.push(weights);
    }

    Ok(result)
}
