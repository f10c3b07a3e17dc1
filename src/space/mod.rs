pub(crate) mod axes;
