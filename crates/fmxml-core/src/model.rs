//! Layout-bound models
//!
//! A `Model` is a connection whose layout was set once at construction.
//! It derefs to the connection, so every `FileMakerInterface` call is
//! available directly:
//!
//! ```
//! use fmxml_core::{CommandSet, FileMaker, FileMakerInterface, FileMakerModel};
//! use fmxml_core::{RawResult, Transport, TransportError};
//!
//! struct Offline;
//!
//! impl Transport for Offline {
//!     fn execute(&self, _: &CommandSet) -> Result<RawResult, TransportError> {
//!         Ok(RawResult::success(Vec::new()))
//!     }
//! }
//!
//! struct Person;
//!
//! impl FileMakerModel for Person {
//!     const LAYOUT: &'static str = "people";
//! }
//!
//! let mut people = Person::bind(FileMaker::new(Offline, "contacts"))?;
//! let result = people.find_all()?.execute_command()?;
//! assert!(result.records().is_empty());
//! # Ok::<(), fmxml_core::FmError>(())
//! ```

use std::ops::{Deref, DerefMut};

use crate::contract::FileMakerInterface;
use crate::errors::Result;

/// A connection pre-bound to one layout
#[derive(Debug)]
pub struct Model<F> {
    connection: F,
    layout: String,
}

impl<F: FileMakerInterface> Model<F> {
    /// Bind `connection` to `layout`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the layout name is empty.
    pub fn new(mut connection: F, layout: &str) -> Result<Self> {
        connection.set_layout(layout)?;
        Ok(Self {
            connection,
            layout: layout.to_string(),
        })
    }

    /// The layout this model was bound to
    pub fn layout(&self) -> &str {
        &self.layout
    }

    pub fn connection(&self) -> &F {
        &self.connection
    }

    pub fn connection_mut(&mut self) -> &mut F {
        &mut self.connection
    }

    pub fn into_inner(self) -> F {
        self.connection
    }
}

impl<F> Deref for Model<F> {
    type Target = F;

    fn deref(&self) -> &F {
        &self.connection
    }
}

impl<F> DerefMut for Model<F> {
    fn deref_mut(&mut self) -> &mut F {
        &mut self.connection
    }
}

/// A type that names the layout its records live on
pub trait FileMakerModel {
    const LAYOUT: &'static str;

    /// Bind a connection to `Self::LAYOUT`
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `LAYOUT` is empty.
    fn bind<F: FileMakerInterface>(connection: F) -> Result<Model<F>> {
        Model::new(connection, Self::LAYOUT)
    }
}
