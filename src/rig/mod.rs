pub(crate) mod pose;
pub(crate) mod state;
pub(crate) mod waypoint;
