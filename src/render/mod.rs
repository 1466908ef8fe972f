pub(crate) mod composite;
pub(crate) mod content;
pub(crate) mod surface;
