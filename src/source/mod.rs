pub(crate) mod directory;
pub(crate) mod font;
pub(crate) mod synthetic;
