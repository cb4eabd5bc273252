//! Public connection contract
//!
//! `FileMakerInterface` is what generic code such as `Model` is written
//! against. `FileMaker<T>` is the implementation; the operations behave as
//! documented on `CommandBuilder` and `FileMaker::execute_command`.

use crate::builder::CommandBuilder;
use crate::coordinator::FileMaker;
use crate::directive::DirectiveValue;
use crate::errors::Result;
use crate::sort::SortSpec;
use crate::transport::{RawResult, Transport};

/// Chainable directive calls plus one-shot execution
pub trait FileMakerInterface {
    /// # Errors
    ///
    /// `InvalidArgument` on an empty name.
    fn set_layout(&mut self, name: &str) -> Result<&mut Self>;

    fn layout(&self) -> Option<&str>;

    /// # Errors
    ///
    /// See `CommandBuilder::find_all`.
    fn find_all(&mut self) -> Result<&mut Self>;

    /// # Errors
    ///
    /// See `CommandBuilder::find_by_fields`.
    fn find_by_fields<I, K, V>(&mut self, field_values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>;

    /// # Errors
    ///
    /// See `CommandBuilder::find_by_record_id`.
    fn find_by_record_id<R: Into<DirectiveValue>>(&mut self, id: R) -> Result<&mut Self>;

    /// # Errors
    ///
    /// See `CommandBuilder::create_record`.
    fn create_record<I, K, V>(&mut self, data: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>;

    /// # Errors
    ///
    /// See `CommandBuilder::update_record`.
    fn update_record<R, I, K, V>(&mut self, id: R, data: I) -> Result<&mut Self>
    where
        R: Into<DirectiveValue>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>;

    /// # Errors
    ///
    /// See `CommandBuilder::delete_record`.
    fn delete_record<R: Into<DirectiveValue>>(&mut self, id: R) -> Result<&mut Self>;

    /// # Errors
    ///
    /// See `CommandBuilder::call_script`.
    fn call_script(&mut self, name: &str, param: Option<&str>) -> Result<&mut Self>;

    fn add_command_items<I, K, V>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>;

    fn clear(&mut self) -> &mut Self;

    fn max(&mut self, count: u32) -> &mut Self;

    fn skip(&mut self, count: u32) -> &mut Self;

    /// # Errors
    ///
    /// See `CommandBuilder::sort`.
    fn sort(&mut self, specs: &[SortSpec]) -> Result<&mut Self>;

    /// # Errors
    ///
    /// See `FileMaker::execute_command`.
    fn execute_command(&mut self) -> Result<RawResult>;
}

impl<T: Transport> FileMakerInterface for FileMaker<T> {
    fn set_layout(&mut self, name: &str) -> Result<&mut Self> {
        self.builder_mut().set_layout(name)?;
        Ok(self)
    }

    fn layout(&self) -> Option<&str> {
        self.builder().layout()
    }

    fn find_all(&mut self) -> Result<&mut Self> {
        self.builder_mut().find_all()?;
        Ok(self)
    }

    fn find_by_fields<I, K, V>(&mut self, field_values: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>,
    {
        self.builder_mut().find_by_fields(field_values)?;
        Ok(self)
    }

    fn find_by_record_id<R: Into<DirectiveValue>>(&mut self, id: R) -> Result<&mut Self> {
        self.builder_mut().find_by_record_id(id)?;
        Ok(self)
    }

    fn create_record<I, K, V>(&mut self, data: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>,
    {
        self.builder_mut().create_record(data)?;
        Ok(self)
    }

    fn update_record<R, I, K, V>(&mut self, id: R, data: I) -> Result<&mut Self>
    where
        R: Into<DirectiveValue>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>,
    {
        self.builder_mut().update_record(id, data)?;
        Ok(self)
    }

    fn delete_record<R: Into<DirectiveValue>>(&mut self, id: R) -> Result<&mut Self> {
        self.builder_mut().delete_record(id)?;
        Ok(self)
    }

    fn call_script(&mut self, name: &str, param: Option<&str>) -> Result<&mut Self> {
        self.builder_mut().call_script(name, param)?;
        Ok(self)
    }

    fn add_command_items<I, K, V>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<DirectiveValue>,
    {
        self.builder_mut().add_command_items(items);
        self
    }

    fn clear(&mut self) -> &mut Self {
        CommandBuilder::clear(self.builder_mut());
        self
    }

    fn max(&mut self, count: u32) -> &mut Self {
        self.builder_mut().max(count);
        self
    }

    fn skip(&mut self, count: u32) -> &mut Self {
        self.builder_mut().skip(count);
        self
    }

    fn sort(&mut self, specs: &[SortSpec]) -> Result<&mut Self> {
        self.builder_mut().sort(specs)?;
        Ok(self)
    }

    fn execute_command(&mut self) -> Result<RawResult> {
        FileMaker::execute_command(self)
    }
}
