//! Сборка таблицы весов сопоставления Unicode (UTS #10) из весов DUCET / CLDR.
//!
//! веса добавляются через [`Builder::add`], [`Builder::build`] приводит их к каноническому виду,
//! упрощает и упаковывает в [`Table`]: основной бор по кодпоинтам, таблицы расширений и сокращений.

pub use collation_element::{CollationElement, CollationElementValue};
pub use data::TableData;
pub use entry::{ContractionLocator, Entry};
pub use error::{BuildError, DoubleWeightFault, PackingOverflow};
pub use implicit::implicit_primary;
pub use options::{BuilderOptions, Level};
pub use table::Table;
pub use trie::ContractHandle;
pub use weights::Weights;

use entry::EntryStore;
use error::ErrorLatch;
use stages::ContractionTable;

pub mod collation_element;
pub mod decomposition;
pub mod implicit;
pub mod options;
pub mod trie;
pub mod weights;

mod data;
mod entry;
mod error;
mod index;
mod stages;
mod table;

/// сборщик таблицы весов
#[derive(Debug, Clone, Default)]
pub struct Builder
{
    options: BuilderOptions,
    entries: EntryStore,
}

impl Builder
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn with_options(options: BuilderOptions) -> Self
    {
        Self {
            options,
            entries: EntryStore::default(),
        }
    }

    pub fn options(&self) -> &BuilderOptions
    {
        &self.options
    }

    /// добавить запись корневой таблицы: последовательность кодпоинтов и списки весов [L1, L2, L3, L4]
    ///
    /// недостающие веса дополняются, пустой список завершает запись. веса - предварительные,
    /// в таблице они могут быть записаны иначе
    pub fn add(&mut self, runes: &[char], weights: &[&[u32]])
    {
        if runes.is_empty() {
            tracing::warn!("entry without code points ignored");
            return;
        }

        let elements = weights::normalize(weights, &self.options);
        tracing::trace!(?runes, ?elements, "entry added");

        self.entries.insert(Entry::new(runes.to_vec(), elements));
    }

    /// тейлоринг x <level y для локали, см. https://www.unicode.org/reports/tr10/#Tailoring_Example
    ///
    /// пока не реализован: собирается только корневая таблица
    pub fn add_tailoring(&mut self, locale: &str, x: &str, y: &str, level: Level)
    {
        tracing::debug!(locale, x, y, ?level, "tailoring is not supported yet, ignored");
    }

    /// добавленная запись
    pub fn entry(&self, runes: &[char]) -> Option<&Entry>
    {
        self.entries.get(runes)
    }

    /// количество записей
    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// собрать таблицу для локали; пустая строка - корневая таблица
    ///
    /// ошибки в отдельных записях не останавливают сборку, но таблица в этом случае не возвращается:
    /// результат - первая из ошибок
    pub fn build(&self, locale: &str) -> Result<Table, BuildError>
    {
        let _span = tracing::debug_span!("build", locale, entries = self.entries.len()).entered();

        if !locale.is_empty() {
            tracing::debug!("locale tables are not supported yet, building the root table");
        }

        let mut entries = self.entries.clone();
        let mut latch = ErrorLatch::default();
        let mut expansions = vec![];
        let mut contractions = ContractionTable::default();

        stages::split_large_weights(&mut entries, &mut latch);
        stages::simplify(&mut entries, &self.options);
        stages::process_expansions(&mut entries, &mut expansions, &mut latch);
        stages::process_contractions(&mut entries, &mut contractions, &mut latch)?;
        let trie = stages::build_primary_trie(&entries, &mut latch);

        if latch.is_set() {
            tracing::debug!("table discarded because of recorded errors");
        }
        latch.into_result()?;

        Ok(Table::new(
            trie,
            expansions,
            contractions,
            self.options.max_tertiary,
        ))
    }
}
