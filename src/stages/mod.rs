//! Rule stages applied across the selected fields

pub(crate) mod format;
pub(crate) mod matching;
pub(crate) mod required;
