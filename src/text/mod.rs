pub(crate) mod bitmap;
pub(crate) mod fit;
pub(crate) mod label;
pub(crate) mod layout;
