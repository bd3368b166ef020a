pub(crate) mod hashed;
