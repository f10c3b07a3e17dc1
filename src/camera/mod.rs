pub(crate) mod orientation;
pub(crate) mod projection;
pub(crate) mod rig;
