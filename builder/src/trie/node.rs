/// узел бора суффиксов сокращений
///
/// FLii iiii  ii_n nnnn    nnnn nnnn  nnnn nnnn
///  - F - флаг наличия потомков
///  - L - последний элемент текущего уровня
///  - i - индекс суффикса, заканчивающегося на этом узле (0 - суффикс здесь не заканчивается)
///  - n - кодпоинт - 21 бит
#[derive(Debug, Clone, Copy)]
pub struct TrieNode
{
    value: u32,
    pos: u32,
}

/// максимальный индекс суффикса
pub const MAX_SUFFIX_INDEX: usize = 0xFF;

impl TrieNode
{
    /// из массива, где хранится бор
    #[inline(always)]
    pub fn from_slice(source: &[u32], pos: u32) -> Option<Self>
    {
        source
            .get(pos as usize)
            .map(|&value| Self { value, pos })
    }

    /// кодпоинт
    #[inline(always)]
    pub fn code(&self) -> u32
    {
        self.value >> 11
    }

    /// индекс суффикса
    #[inline(always)]
    pub fn index(&self) -> u8
    {
        (self.value >> 2) as u8
    }

    /// флаг наличия потомков
    #[inline(always)]
    pub fn has_children(&self) -> bool
    {
        (self.value & 1) != 0
    }

    /// последний элемент на своём уровне
    #[inline(always)]
    pub fn is_last(&self) -> bool
    {
        (self.value & 2) != 0
    }

    /// позиция первого потомка
    #[inline(always)]
    pub fn first_child(&self) -> u32
    {
        self.pos + 1
    }
}

/// запечь узел
pub fn bake_node(code: char, index: u8, has_children: bool, is_last: bool) -> u32
{
    (has_children as u32) | ((is_last as u32) << 1) | ((index as u32) << 2) | (u32::from(code) << 11)
}
