//! Command builder
//!
//! `CommandBuilder` accumulates directives into one `CommandSet`. Each call
//! validates its own inputs and returns the builder for chaining:
//!
//! ```
//! use fmxml_core::{CommandBuilder, SortSpec};
//!
//! let mut builder = CommandBuilder::new("contacts");
//! builder
//!     .set_layout("people")?
//!     .find_by_fields([("LastName", "Smith")])?
//!     .sort(&[SortSpec::new("FirstName", 1).ascending()])?
//!     .max(10);
//!
//! assert_eq!(builder.command_set().len(), 7);
//! # Ok::<(), fmxml_core::FmError>(())
//! ```
//!
//! ## Validation contract
//!
//! A call that fails leaves the command set exactly as it was: arguments,
//! layout presence and operation conflicts are all checked before the first
//! write.

use crate::command_set::CommandSet;
use crate::directive::{DirectiveKey, DirectiveValue};
use crate::errors::{FmError, Result};
use crate::sort::SortSpec;

/// Accumulates the directives of one command
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    database: String,
    layout: Option<String>,
    commands: CommandSet,
}

impl CommandBuilder {
    /// Create a builder for the given database
    ///
    /// The database name is what priming writes to `-db`.
    pub fn new(database: impl Into<String>) -> Self {
        Self {
            database: database.into(),
            layout: None,
            commands: CommandSet::new(),
        }
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// The layout set by `set_layout`, if any
    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    /// The directives accumulated so far
    pub fn command_set(&self) -> &CommandSet {
        &self.commands
    }

    /// Capture the accumulated directives and clear the builder
    ///
    /// The layout is kept.
    pub fn take_command_set(&mut self) -> CommandSet {
        self.commands.take()
    }

    /// Set the layout that priming writes to `-lay`
    ///
    /// The layout outlives `clear()` and command execution.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the name is empty.
    pub fn set_layout(&mut self, name: impl Into<String>) -> Result<&mut Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(FmError::invalid_argument("set_layout", "no layout specified"));
        }
        self.layout = Some(name);
        Ok(self)
    }

    /// Find every record of the layout
    ///
    /// # Errors
    ///
    /// `MissingScope` without a layout; `InvalidArgument` if another
    /// operation is already present.
    pub fn find_all(&mut self) -> Result<&mut Self> {
        self.begin_operation("find_all", &DirectiveKey::FindAll)?;
        self.commands.insert(DirectiveKey::FindAll, DirectiveValue::Marker);
        Ok(self)
    }

    /// Find records whose fields match the given values
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty map or an empty field name,
    /// `MissingScope` without a layout, `InvalidArgument` on an operation
    /// conflict.
    pub fn find_by_fields<I, K, V>(&mut self, field_values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>,
    {
        const OP: &str = "find_by_fields";
        let fields = collect_fields(OP, field_values)?;
        if fields.is_empty() {
            return Err(FmError::invalid_argument(OP, "no field values specified"));
        }
        self.begin_operation(OP, &DirectiveKey::Find)?;
        self.merge(fields);
        self.commands.insert(DirectiveKey::Find, DirectiveValue::Marker);
        Ok(self)
    }

    /// Find a record by its internal record id
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank id, `MissingScope` without a layout,
    /// `InvalidArgument` on an operation conflict.
    pub fn find_by_record_id(&mut self, id: impl Into<DirectiveValue>) -> Result<&mut Self> {
        const OP: &str = "find_by_record_id";
        let id = require_record_id(OP, id)?;
        self.begin_operation(OP, &DirectiveKey::Find)?;
        self.commands.insert(DirectiveKey::RecId, id);
        self.commands.insert(DirectiveKey::Find, DirectiveValue::Marker);
        Ok(self)
    }

    /// Create a record populated with `data`, which may be empty
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty field name, `MissingScope` without a
    /// layout, `InvalidArgument` on an operation conflict.
    pub fn create_record<I, K, V>(&mut self, data: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>,
    {
        const OP: &str = "create_record";
        let fields = collect_fields(OP, data)?;
        self.begin_operation(OP, &DirectiveKey::New)?;
        self.merge(fields);
        self.commands.insert(DirectiveKey::New, DirectiveValue::Marker);
        Ok(self)
    }

    /// Overwrite the listed fields of an existing record
    ///
    /// Fields not named in `data` are left untouched by the server.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank id or an empty field name,
    /// `MissingScope` without a layout, `InvalidArgument` on an operation
    /// conflict.
    pub fn update_record<I, K, V>(
        &mut self,
        id: impl Into<DirectiveValue>,
        data: I,
    ) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>,
    {
        const OP: &str = "update_record";
        let id = require_record_id(OP, id)?;
        let fields = collect_fields(OP, data)?;
        self.begin_operation(OP, &DirectiveKey::Edit)?;
        self.merge(fields);
        self.commands.insert(DirectiveKey::RecId, id);
        self.commands.insert(DirectiveKey::Edit, DirectiveValue::Marker);
        Ok(self)
    }

    /// Delete a record by its internal record id
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a blank id, `MissingScope` without a layout,
    /// `InvalidArgument` on an operation conflict.
    pub fn delete_record(&mut self, id: impl Into<DirectiveValue>) -> Result<&mut Self> {
        const OP: &str = "delete_record";
        let id = require_record_id(OP, id)?;
        self.begin_operation(OP, &DirectiveKey::Delete)?;
        self.commands.insert(DirectiveKey::RecId, id);
        self.commands.insert(DirectiveKey::Delete, DirectiveValue::Marker);
        Ok(self)
    }

    /// Run a script, alone or alongside an operation
    ///
    /// Primes the command set only when it has not been primed yet, so a
    /// script can follow any operation without disturbing it.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for an empty name, `MissingScope` when priming is
    /// needed and no layout is set.
    pub fn call_script(&mut self, name: &str, param: Option<&str>) -> Result<&mut Self> {
        const OP: &str = "call_script";
        if name.trim().is_empty() {
            return Err(FmError::invalid_argument(OP, "no script name specified"));
        }
        if !self.commands.contains(&DirectiveKey::Db) {
            self.prime(OP)?;
        }
        self.commands.insert(DirectiveKey::Script, name);
        if let Some(param) = param {
            self.commands.insert(DirectiveKey::ScriptParam, param);
        }
        Ok(self)
    }

    /// Merge raw directives without any validation
    ///
    /// Keys that spell a known directive (`"-max"`, `"-find"`, ...) are
    /// stored as that directive.
    pub fn add_command_items<I, K, V>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>,
    {
        for (key, value) in items {
            self.commands.insert(DirectiveKey::parse(&key.into()), value);
        }
        self
    }

    /// Drop every accumulated directive; the layout stays
    pub fn clear(&mut self) -> &mut Self {
        self.commands.clear();
        self
    }

    /// Limit the number of records returned (`-max`)
    pub fn max(&mut self, count: u32) -> &mut Self {
        self.commands.insert(DirectiveKey::Max, count);
        self
    }

    /// Skip the first `count` records (`-skip`)
    pub fn skip(&mut self, count: u32) -> &mut Self {
        self.commands.insert(DirectiveKey::Skip, count);
        self
    }

    /// Add `-sortfield.<rank>` (and `-sortorder.<rank>`) per spec
    ///
    /// # Errors
    ///
    /// `InvalidArgument` naming the first invalid spec; nothing is written
    /// in that case.
    pub fn sort(&mut self, specs: &[SortSpec]) -> Result<&mut Self> {
        let mut valid = Vec::with_capacity(specs.len());
        for spec in specs {
            let sort = spec.validate().map_err(|reason| {
                FmError::invalid_argument("sort", format!("{} in {:?}", reason, spec))
            })?;
            valid.push(sort);
        }

        for sort in valid {
            self.commands.insert(DirectiveKey::SortField(sort.rank), sort.field);
            if let Some(direction) = sort.direction {
                self.commands.insert(DirectiveKey::SortOrder(sort.rank), direction.as_str());
            }
        }
        Ok(self)
    }

    /// Write the scope directives, overwriting stale values
    fn prime(&mut self, op: &'static str) -> Result<()> {
        let layout = self.layout.clone().ok_or(FmError::MissingScope { op })?;
        self.commands.insert(DirectiveKey::Db, self.database.as_str());
        self.commands.insert(DirectiveKey::Lay, layout);
        Ok(())
    }

    /// Check that `verb` may be added, then prime
    fn begin_operation(&mut self, op: &'static str, verb: &DirectiveKey) -> Result<()> {
        if self.layout.is_none() {
            return Err(FmError::MissingScope { op });
        }
        if let Some(existing) = self.commands.keys().find(|k| k.is_operation() && *k != verb) {
            return Err(FmError::invalid_argument(
                op,
                format!(
                    "operation '{}' conflicts with '{}' already in the command set",
                    verb, existing
                ),
            ));
        }
        self.prime(op)
    }

    fn merge(&mut self, fields: Vec<(DirectiveKey, DirectiveValue)>) {
        for (key, value) in fields {
            self.commands.insert(key, value);
        }
    }
}

/// Validate caller field names before anything is written
///
/// A field may not spell an operation or scope directive: that would add a
/// second verb or replace the primed database or layout.
fn collect_fields<I, K, V>(
    op: &'static str,
    fields: I,
) -> Result<Vec<(DirectiveKey, DirectiveValue)>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<DirectiveValue>,
{
    fields
        .into_iter()
        .map(|(name, value)| {
            let name = name.into();
            if name.trim().is_empty() {
                return Err(FmError::invalid_argument(op, "field name is empty"));
            }
            let key = DirectiveKey::parse(&name);
            if key.is_operation() || key.is_scope() {
                return Err(FmError::invalid_argument(
                    op,
                    format!("field name '{}' is a reserved directive", name),
                ));
            }
            Ok((key, value.into()))
        })
        .collect()
}

fn require_record_id(op: &'static str, id: impl Into<DirectiveValue>) -> Result<DirectiveValue> {
    let id = id.into();
    if id.is_blank() {
        return Err(FmError::invalid_argument(op, "no record id specified"));
    }
    Ok(id)
}
