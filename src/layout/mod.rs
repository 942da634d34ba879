pub(crate) mod boundaries;
