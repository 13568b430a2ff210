// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::{hash_map::Entry as MapEntry, HashMap};

use crate::arg::{strip_name, Arg, Count, Position, Values};
use crate::error::{Error, Result};

/// Stable identifier for a registered [Arg].
///
/// Identifiers remain valid however many arguments are registered
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ArgId(usize);

impl ArgId {
    /// Registration order of the argument (0-based).
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Entry {
    arg: Arg,
    values: Values,
}

/// Represents a collection of arguments.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Args {
    /// Registered arguments in registration order.
    entries: Vec<Entry>,

    /// Alias table built by [Args::build_aliases], or `None` if an
    /// argument has been registered or changed since.
    ///
    /// - name: argument name without leading dashes.
    /// - value: index into `entries`.
    aliases: Option<HashMap<String, usize>>,
}

impl Args {
    /// Create a new argument collection.
    pub fn new() -> Self {
        Args::default()
    }

    /// Returns the number of registered arguments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no arguments have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a single argument.
    pub fn add(&mut self, arg: Arg) -> ArgId {
        self.entries.push(Entry {
            arg,
            values: Values::default(),
        });

        self.aliases = None;

        ArgId(self.entries.len() - 1)
    }

    /// Register a new argument called `name` and return a handle to
    /// configure it.
    pub fn add_argument(&mut self, name: &str) -> ArgHandle<'_> {
        let id = self.add(Arg::new(name));

        ArgHandle { args: self, id }
    }

    /// Return a handle to reconfigure a registered argument.
    pub fn handle(&mut self, id: ArgId) -> Option<ArgHandle<'_>> {
        if id.0 < self.entries.len() {
            Some(ArgHandle { args: self, id })
        } else {
            None
        }
    }

    /// Returns the [Arg] with the specified identifier.
    pub fn get(&self, id: ArgId) -> Option<&Arg> {
        self.entries.get(id.0).map(|e| &e.arg)
    }

    /// Returns the values bound to the argument by the last parse.
    pub fn values(&self, id: ArgId) -> Option<&Values> {
        self.entries.get(id.0).map(|e| &e.values)
    }

    /// Find the argument with the specified name.
    ///
    /// Leading dashes are ignored, so `-f`, `--f` and `f` all resolve the
    /// same way. Only exact names match. If the alias table is stale (not
    /// yet built, or arguments were registered since the last parse), the
    /// registered names are searched in registration order instead.
    pub fn resolve(&self, name: &str) -> Option<ArgId> {
        match &self.aliases {
            Some(aliases) => aliases.get(strip_name(name)).map(|i| ArgId(*i)),
            None => self
                .entries
                .iter()
                .position(|e| e.arg.matches(name))
                .map(ArgId),
        }
    }

    /// Returns true if an argument with the specified name is registered.
    pub fn exists(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.arg.matches(name))
    }

    /// Iterate all arguments in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (ArgId, &Arg, &Values)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, e)| (ArgId(i), &e.arg, &e.values))
    }

    /// Build the alias table, failing if two arguments share a name.
    pub(crate) fn build_aliases(&mut self) -> Result<()> {
        let mut aliases = HashMap::with_capacity(self.entries.len());

        for (i, entry) in self.entries.iter().enumerate() {
            for (key, name) in entry.arg.keys().zip(entry.arg.names.iter()) {
                match aliases.entry(key.to_string()) {
                    MapEntry::Occupied(_) => return Err(Error::DuplicateAlias(name.clone())),
                    MapEntry::Vacant(v) => {
                        v.insert(i);
                    }
                }
            }
        }

        self.aliases = Some(aliases);

        Ok(())
    }

    /// Forget the values bound by a previous parse.
    pub(crate) fn reset(&mut self) {
        for entry in self.entries.iter_mut() {
            entry.values.clear();
        }
    }

    pub(crate) fn count(&self, id: ArgId) -> Count {
        self.entries[id.0].arg.count
    }

    pub(crate) fn values_mut(&mut self, id: ArgId) -> &mut Values {
        &mut self.entries[id.0].values
    }

    /// Bind the free arguments to positional arguments.
    pub(crate) fn bind_positionals(&mut self, free: &[String]) {
        for entry in self.entries.iter_mut() {
            let value = match entry.arg.position {
                Position::None => continue,
                Position::Index(i) => free.get(i),
                Position::Last => free.last(),
            };

            if let Some(value) = value {
                entry.values.push(value);
                entry.values.found = true;
            }
        }
    }

    /// Check that all required arguments were found and that every option
    /// with an exact count was given all its values.
    ///
    /// Arguments are checked in registration order.
    pub(crate) fn validate(&self) -> Result<()> {
        for entry in self.entries.iter() {
            let (arg, values) = (&entry.arg, &entry.values);

            if arg.required && !values.found {
                return Err(Error::MissingRequiredArgument(arg.describe()));
            }

            if let Count::Exactly(n) = arg.count {
                if values.found && !arg.position.is_positional() && values.len() < n {
                    return Err(Error::TooFewValues {
                        name: arg.display_names(),
                        expected: n,
                        found: values.len(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Handle to a registered [Arg], used to configure it fluently.
///
/// The handle addresses the argument by its [ArgId], so it stays
/// valid regardless of other registrations.
#[derive(Debug)]
pub struct ArgHandle<'a> {
    args: &'a mut Args,
    id: ArgId,
}

impl<'a> ArgHandle<'a> {
    /// Identifier of the argument being configured.
    pub fn id(&self) -> ArgId {
        self.id
    }

    fn update<F>(self, f: F) -> Self
    where
        F: FnOnce(Arg) -> Arg,
    {
        let entry = &mut self.args.entries[self.id.0];
        entry.arg = f(std::mem::take(&mut entry.arg));
        self.args.aliases = None;
        self
    }

    /// Add an alias for the argument.
    pub fn name(self, name: &str) -> Self {
        self.update(|arg| arg.name(name))
    }

    /// Replace all names of the argument.
    pub fn names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.update(|arg| arg.names(names))
    }

    /// Specify the help text for the argument.
    pub fn help(self, help: &str) -> Self {
        self.update(|arg| arg.help(help))
    }

    /// Specify that the argument must be provided.
    pub fn required(self) -> Self {
        self.update(|arg| arg.required())
    }

    /// Specify the number of values the option claims.
    pub fn count(self, count: Count) -> Self {
        self.update(|arg| arg.count(count))
    }

    /// Bind the argument to a free argument position.
    pub fn position(self, position: Position) -> Self {
        self.update(|arg| arg.position(position))
    }
}
