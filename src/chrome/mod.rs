pub(crate) mod composition_handler;
pub(crate) mod hittest_handler;
pub(crate) mod nccalcsize_handler;
pub(crate) mod region_handler;
pub(crate) mod windowpos_handler;
