/// массивы собранной таблицы - всё, что нужно для её сохранения
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableData<'a>
{
    /// индексы основного бора
    pub index: &'a [u16],
    /// элементы сопоставления основного бора
    pub values: &'a [u64],
    /// расширения
    pub expansions: &'a [u64],
    /// боры суффиксов сокращений
    pub contraction_tries: &'a [u32],
    /// веса сокращений
    pub contraction_elements: &'a [u64],
    /// максимальная длина сокращения в кодпоинтах
    pub max_contraction_len: usize,
    /// максимальный вес L3, подставляемый при декомпозиции
    pub max_tertiary: u32,
}
