//! Functions stored inside a subject.

use std::fmt;
use std::sync::Arc;

use crate::{Map, Value};

type Func = dyn Fn(&mut Map, &[Value]) -> Value + Send + Sync;

/// A function value that can live in a [`Map`] and be run by
/// [`invoke_in`](crate::invoke_in).
///
/// The function receives the subject it was invoked on as an explicit
/// receiver, followed by the call arguments. Cloning is cheap and clones
/// compare equal; two separately constructed callables never do.
#[derive(Clone)]
pub struct Callable {
    name: Option<String>,
    func: Arc<Func>,
}

impl Callable {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&mut Map, &[Value]) -> Value + Send + Sync + 'static,
    {
        Callable {
            name: None,
            func: Arc::new(func),
        }
    }

    /// Attach a name, shown in `Debug` output.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Run the function with `receiver` bound as its subject.
    pub fn call(&self, receiver: &mut Map, args: &[Value]) -> Value {
        (self.func)(receiver, args)
    }
}

impl PartialEq for Callable {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Callable({})", name),
            None => write!(f, "Callable(<anonymous>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_passes_receiver_and_args() {
        let sum = Callable::new(|receiver, args| {
            let total: i64 = args
                .iter()
                .filter_map(|arg| match arg {
                    Value::Integer(i) => Some(*i),
                    _ => None,
                })
                .sum();
            receiver.insert("total".to_string(), Value::Integer(total));
            Value::Integer(total)
        });

        let mut subject = Map::new();
        let result = sum.call(&mut subject, &[Value::Integer(10), Value::Integer(5)]);

        assert_eq!(result, Value::Integer(15));
        assert_eq!(subject.get("total"), Some(&Value::Integer(15)));
    }

    #[test]
    fn clones_are_equal() {
        let f = Callable::new(|_, _| Value::Absent);
        assert_eq!(f, f.clone());
        assert_ne!(f, Callable::new(|_, _| Value::Absent));
    }

    #[test]
    fn debug_shows_name() {
        let f = Callable::new(|_, _| Value::Absent);
        assert_eq!(format!("{:?}", f), "Callable(<anonymous>)");
        let f = f.named("greet");
        assert_eq!(f.name(), Some("greet"));
        assert_eq!(format!("{:?}", f), "Callable(greet)");
    }
}
