pub(crate) mod source;
pub(crate) mod store;
