use core::fmt;

use thiserror::Error;

/// ошибки сборки таблицы
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError
{
    /// вторая часть двойного первичного веса отсутствует или не имеет флага 0x8000
    #[error("{}: {fault} double primary weight", Runes(runes))]
    MalformedDoubleWeight {
        runes: Vec<char>,
        fault: DoubleWeightFault,
    },

    /// у начала сокращения нет собственной записи
    #[error("no single entry for contraction starter U+{:04X}", u32::from(*starter))]
    ContractionMissingBaseEntry { starter: char },

    /// бор суффиксов вернул индекс, который не укладывается в группу сокращений
    #[error("contraction starter U+{:04X}: {reason}", u32::from(*starter))]
    ContractionIndexConsistency {
        starter: char,
        reason: String,
    },

    /// значение не помещается в отведённые ему биты
    #[error("{}: {overflow}", Runes(runes))]
    PackingError {
        runes: Vec<char>,
        overflow: PackingOverflow,
    },
}

/// что не так с двойным первичным весом
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoubleWeightFault
{
    /// вторая часть отсутствует
    MissingContinuation,
    /// у второй части нет флага младших бит
    MissingFlag,
}

/// переполнение поля упакованного значения
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field} value {value:#X} exceeds {max:#X}")]
pub struct PackingOverflow
{
    pub field: &'static str,
    pub value: u64,
    pub max: u64,
}

impl BuildError
{
    /// ошибка, после которой сборка не может быть продолжена
    pub fn is_fatal(&self) -> bool
    {
        matches!(self, Self::ContractionIndexConsistency { .. })
    }

    /// ошибка упаковки значения для записи
    pub(crate) fn packing(runes: &[char], overflow: PackingOverflow) -> Self
    {
        Self::PackingError {
            runes: runes.to_vec(),
            overflow,
        }
    }
}

impl fmt::Display for DoubleWeightFault
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        f.write_str(match self {
            Self::MissingContinuation => "missing second part of",
            Self::MissingFlag => "malformed second part of",
        })
    }
}

/// накопитель ошибок: запоминается первая, последующие только пишутся в лог
#[derive(Debug, Default)]
pub struct ErrorLatch
{
    first: Option<BuildError>,
}

impl ErrorLatch
{
    /// зафиксировать ошибку и продолжить работу
    pub fn record(&mut self, error: BuildError)
    {
        tracing::warn!(%error, "collation table build error");

        if self.first.is_none() {
            self.first = Some(error);
        }
    }

    /// была ли зафиксирована хотя бы одна ошибка
    pub fn is_set(&self) -> bool
    {
        self.first.is_some()
    }

    /// первая зафиксированная ошибка
    pub fn into_result(self) -> Result<(), BuildError>
    {
        match self.first {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

/// кодпоинты записи в виде U+XXXX
struct Runes<'a>(&'a [char]);

impl fmt::Display for Runes<'_>
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        for (i, &c) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "U+{:04X}", u32::from(c))?;
        }

        Ok(())
    }
}
