pub(crate) mod sampler;
pub(crate) mod timeline;
pub(crate) mod track;
