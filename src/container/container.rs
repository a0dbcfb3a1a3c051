use std::any::{Any, type_name};
use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

use super::{NotRegisteredError, ResolveError, TypeMismatchError};

type Factory = Box<dyn Fn() -> Box<dyn Any>>;

struct Registration {
    factory: Factory,
    type_name: &'static str,
}

/// A registry of named factories.
///
/// # Examples
/// ```
/// # use exercise_lib::container::Container;
/// #[derive(Debug, Default)]
/// struct UserService;
///
/// let mut container = Container::new();
/// container.register("UserService", UserService::default);
///
/// let service = container.resolve_as::<UserService>("UserService");
/// assert!(service.is_ok());
/// assert!(container.resolve("PaymentService").is_err());
/// ```
#[derive(Default)]
pub struct Container {
    registrations: HashMap<String, Registration>,
}

impl Container {
    pub fn new() -> Container {
        Container::default()
    }

    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.registrations.contains_key(name)
    }

    /// Returns the registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.registrations.keys().map(String::as_str)
    }

    /// Registers `factory` under `name`, replacing any factory previously registered with the
    /// same name.
    pub fn register<T, F>(&mut self, name: impl Into<String>, factory: F)
    where
        T: Any,
        F: Fn() -> T + 'static,
    {
        let name = name.into();
        let registration = Registration {
            factory: Box::new(move || Box::new(factory()) as Box<dyn Any>),
            type_name: type_name::<T>(),
        };

        let replaced = self.registrations.insert(name.clone(), registration).is_some();
        tracing::debug!(name = %name, ty = type_name::<T>(), replaced, "registered factory");
    }

    /// Removes the factory registered under `name`, returning true if there was one.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.registrations.remove(name).is_some()
    }

    /// Creates a new instance from the factory registered under `name`.
    ///
    /// # Errors
    /// Returns [`ResolveError::NotRegistered`] if no factory has been registered under `name`.
    pub fn resolve(&self, name: &str) -> Result<Box<dyn Any>, ResolveError> {
        match self.registrations.get(name) {
            Some(registration) => Ok((registration.factory)()),
            None => {
                tracing::warn!(name, "attempted to resolve an unregistered type");
                Err(NotRegisteredError {
                    name: name.to_owned(),
                }
                .into())
            },
        }
    }

    /// Creates a new instance from the factory registered under `name`, as a `T`.
    ///
    /// # Errors
    /// Returns [`ResolveError::NotRegistered`] if no factory has been registered under `name`, or
    /// [`ResolveError::TypeMismatch`] if the factory doesn't produce a `T`.
    pub fn resolve_as<T: Any>(&self, name: &str) -> Result<Box<T>, ResolveError> {
        self.resolve(name)?.downcast::<T>().map_err(|_| {
            let registered = self
                .registrations
                .get(name)
                .map_or("<unknown>", |r| r.type_name);
            tracing::warn!(name, registered, requested = type_name::<T>(), "type mismatch");
            TypeMismatchError {
                name: name.to_owned(),
                registered,
                requested: type_name::<T>(),
            }
            .into()
        })
    }
}

impl Debug for Container {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.registrations.iter().map(|(name, r)| (name, r.type_name)))
            .finish()
    }
}
