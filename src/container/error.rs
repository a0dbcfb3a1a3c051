use derive_more::{Display, Error, From};

#[derive(Debug, Display, Error)]
#[display("type not registered: {name}")]
pub struct NotRegisteredError {
    pub name: String,
}

#[derive(Debug, Display, Error)]
#[display("type registered as {name} does not match the requested type {requested}")]
pub struct TypeMismatchError {
    pub name: String,
    pub registered: &'static str,
    pub requested: &'static str,
}

#[derive(Debug, Display, From, Error)]
pub enum ResolveError {
    NotRegistered(NotRegisteredError),
    TypeMismatch(TypeMismatchError),
}
