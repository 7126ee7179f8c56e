use core::fmt;

use tracing::trace;

use crate::{
    config::MAX_IDENT_LEN,
    error::{Error, Result},
    value::Value,
};

/// A variable name no longer than [`MAX_IDENT_LEN`] bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self> {
        if name.len() > MAX_IDENT_LEN {
            return Err(Error::NameTooLong {
                name: name.to_string(),
                max: MAX_IDENT_LEN,
            });
        }
        Ok(Name(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

pub trait Scope {
    fn get(&self, name: &str) -> Value;
}

#[derive(Debug, Default)]
pub struct Context {
    vars: Vec<(Name, Value)>,
}

impl Context {
    pub fn new() -> Self {
        Self { vars: Vec::new() }
    }

    pub fn get(&self, name: &str) -> Value {
        self.lookup(name).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, name: &Name, value: Value) -> Result<()> {
        if let Some((_, slot)) = self.vars.iter_mut().find(|(n, _)| n == name) {
            *slot = value;
            return Ok(());
        }

        if self.vars.len() == self.vars.capacity() {
            let additional = self.vars.capacity().max(1);
            self.vars
                .try_reserve_exact(additional)
                .map_err(|_| Error::OutOfMemory)?;
        }
        trace!(name = %name, "new variable");
        self.vars.push((name.clone(), value));
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Value)> {
        self.vars.iter().map(|(name, value)| (name, value))
    }

    fn lookup(&self, name: &str) -> Option<&Value> {
        self.vars
            .iter()
            .find(|(n, _)| n.as_str() == name)
            .map(|(_, value)| value)
    }
}

impl Scope for Context {
    fn get(&self, name: &str) -> Value {
        Context::get(self, name)
    }
}
