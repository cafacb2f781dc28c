use core::fmt::Debug;

use crate::options::BuilderOptions;

/// веса для кодпоинта, 4 уровня
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Weights
{
    pub l1: u32,
    pub l2: u32,
    pub l3: u32,
    pub l4: u32,
}

impl Weights
{
    pub fn new(l1: u32, l2: u32, l3: u32, l4: u32) -> Self
    {
        Self { l1, l2, l3, l4 }
    }

    /// веса L1, L2, L3 - то, что сохраняется в таблице (L4 восстанавливается как L1)
    pub fn levels(&self) -> [u32; 3]
    {
        [self.l1, self.l2, self.l3]
    }

    /// в виде, в котором веса представлены в allkeys
    pub fn format(&self) -> String
    {
        format!(
            "[.{:04X}.{:04X}.{:04X}.{:04X}]",
            self.l1, self.l2, self.l3, self.l4
        )
    }

    /// веса из предварительного списка 0 ..= 4 значений; пустой список - None
    ///
    /// недостающие L2 и L3 берутся из общих значений, недостающий L4 равен L1
    pub fn from_raw(raw: &[u32], options: &BuilderOptions) -> Option<Self>
    {
        let (&l1, rest) = raw.split_first()?;

        Some(Self {
            l1,
            l2: rest.first().copied().unwrap_or(options.common_secondary),
            l3: rest.get(1).copied().unwrap_or(options.common_tertiary),
            l4: rest.get(2).copied().unwrap_or(l1),
        })
    }
}

impl Debug for Weights
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result
    {
        f.write_str(self.format().as_str())
    }
}

/// последовательность весов записи из предварительных списков
///
/// пустой список - маркер конца записи: пишем нулевые веса и отбрасываем всё, что следует за ним
pub fn normalize(raw: &[&[u32]], options: &BuilderOptions) -> Vec<Weights>
{
    let mut result = Vec::with_capacity(raw.len());

    for list in raw {
        match Weights::from_raw(list, options) {
            Some(weights) => result.push(weights),
            None => {
                result.push(Weights::default());
                break;
            }
        }
    }

    result
}

/// совпадают ли последовательности весов на уровнях L1 - L3
pub fn equal_levels(a: &[Weights], b: &[Weights]) -> bool
{
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| a.levels() == b.levels())
}
