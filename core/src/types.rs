//! # ACTION INJECTION TYPE DEFINITIONS
//!
//! **CRITICAL**: Value containers shared by the resolver and the dispatcher
//! **MANDATE**: Injected values and action results are both `Service` handles

use crate::errors::BoxError;
use std::any::Any;
use std::slice;
use std::sync::Arc;

/// **SERVICE HANDLE**
///
/// **PURPOSE**: Opaque value handed out by a service locator, an inline
/// factory, or returned by an action.
pub type Service = Arc<dyn Any + Send + Sync>;

/// **ACTION RETURN TYPE**
pub type ActionResult = Result<Service, BoxError>;

/// **SERVICE CONSTRUCTOR**
pub fn service<T: Any + Send + Sync>(value: T) -> Service {
    Arc::new(value)
}

/// **RESOLVED ARGUMENTS**
///
/// **PURPOSE**: Positional argument list for one action invocation
/// **GUARANTEE**: Order matches the declaration order it was resolved from
#[derive(Debug, Clone, Default)]
pub struct ResolvedArguments {
    /// **POSITIONAL VALUES**
    values: Vec<Service>,
}

impl ResolvedArguments {
    /// **CONSTRUCTOR**
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// **CONSTRUCTOR WITH CAPACITY**
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: Service) {
        self.values.push(value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// **RAW POSITIONAL ACCESS**
    pub fn service(&self, index: usize) -> Option<&Service> {
        self.values.get(index)
    }

    /// **TYPED POSITIONAL ACCESS**
    ///
    /// **RETURNS**: `None` when the position is empty or holds another type
    pub fn get<T: Any>(&self, index: usize) -> Option<&T> {
        self.values.get(index)?.downcast_ref::<T>()
    }

    pub fn iter(&self) -> slice::Iter<'_, Service> {
        self.values.iter()
    }

    pub fn into_vec(self) -> Vec<Service> {
        self.values
    }
}

impl From<Vec<Service>> for ResolvedArguments {
    fn from(values: Vec<Service>) -> Self {
        Self { values }
    }
}

impl FromIterator<Service> for ResolvedArguments {
    fn from_iter<I: IntoIterator<Item = Service>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ResolvedArguments {
    type Item = &'a Service;
    type IntoIter = slice::Iter<'a, Service>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
