pub(crate) mod arc;
pub(crate) mod evaluator;
pub(crate) mod focus;
pub(crate) mod guard;
