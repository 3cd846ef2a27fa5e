pub(crate) mod aberration;
