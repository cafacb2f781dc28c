// веса по умолчанию - см. UTS #10, https://www.unicode.org/reports/tr10/#Well_Formed_DUCET

/// уровень сравнения, на котором задаётся тейлоринг
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Level
{
    Primary = 1,    // базовые символы
    Secondary = 2,  // диакритические знаки
    Tertiary = 3,   // регистр / варианты
    Quaternary = 4, // пунктуация
}

/// параметры сборки таблицы
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BuilderOptions
{
    /// вес L2, если он не указан
    pub common_secondary: u32,
    /// вес L3, если он не указан
    pub common_tertiary: u32,
    /// максимальный вес L3 в таблице
    pub max_tertiary: u32,
}

impl Default for Level
{
    fn default() -> Self
    {
        Self::Tertiary
    }
}

impl Default for BuilderOptions
{
    fn default() -> Self
    {
        Self {
            common_secondary: 0x20,
            common_tertiary: 0x02,
            max_tertiary: 0x1F,
        }
    }
}
