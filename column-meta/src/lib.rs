//! # column-meta
//!
//! Declarative column names for struct fields, accessor methods and parameters.
//!
//! A `#[column]` attribute records which persistence column an element maps to.
//! The declarations are turned into `'static` tables at compile time and can be
//! read at run time by any mapping code through [`ColumnFields`], [`ColumnMethods`]
//! or a [`ColumnRegistry`]. This crate never maps anything itself: a missing
//! declaration (`None`) or an empty name tells the mapper to fall back to its own
//! naming convention.
//!
//! ```rust
//! use column_meta::{ColumnFields, ColumnMethods, column_methods};
//!
//! #[derive(ColumnFields)]
//! struct Employee {
//!     #[column("emp_id")]
//!     id: i64,
//!     #[column]
//!     full_name: String,
//! }
//!
//! #[column_methods]
//! impl Employee {
//!     fn new(#[column("emp_id")] id: i64, full_name: String) -> Self {
//!         Self { id, full_name }
//!     }
//!
//!     #[column("emp_id")]
//!     fn id(&self) -> i64 {
//!         self.id
//!     }
//! }
//!
//! assert_eq!(Employee::field_column("id").map(|c| c.name()), Some("emp_id"));
//! assert_eq!(Employee::method_column("id").map(|c| c.name()), Some("emp_id"));
//! assert_eq!(Employee::parameter_column("new", 0).map(|c| c.name()), Some("emp_id"));
//! assert_eq!(Employee::parameter_column("new", 1), None);
//! ```
//!
//! ## Attachment targets
//!
//! Only fields, methods and parameters may carry `#[column]`. Anything else fails
//! to compile.
//!
//! On the type itself:
//!
//! ```rust,compile_fail
//! use column_meta::ColumnFields;
//!
//! #[derive(ColumnFields)]
//! #[column("employees")]
//! struct Employee {
//!     id: i64,
//! }
//! ```
//!
//! On an enum variant:
//!
//! ```rust,compile_fail
//! use column_meta::ColumnFields;
//!
//! #[derive(ColumnFields)]
//! enum Status {
//!     #[column]
//!     Active,
//! }
//! ```
//!
//! On a `self` receiver:
//!
//! ```rust,compile_fail
//! use column_meta::column_methods;
//!
//! struct Employee {
//!     id: i64,
//! }
//!
//! #[column_methods]
//! impl Employee {
//!     fn id(#[column] &self) -> i64 {
//!         self.id
//!     }
//! }
//! ```
//!
//! On an associated constant:
//!
//! ```rust,compile_fail
//! use column_meta::column_methods;
//!
//! struct Employee;
//!
//! #[column_methods]
//! impl Employee {
//!     #[column("max")]
//!     const MAX: i64 = 10;
//! }
//! ```
//!
//! On a free function, where no macro claims the attribute:
//!
//! ```rust,compile_fail
//! #[column("emp_id")]
//! fn employee_id() -> i64 {
//!     7
//! }
//! ```
//!
//! Through a trait implementation:
//!
//! ```rust,compile_fail
//! use column_meta::column_methods;
//!
//! trait Identified {
//!     fn id(&self) -> i64;
//! }
//!
//! struct Employee;
//!
//! #[column_methods]
//! impl Identified for Employee {
//!     #[column("emp_id")]
//!     fn id(&self) -> i64 {
//!         7
//!     }
//! }
//! ```
//!
//! An element carries at most one column name:
//!
//! ```rust,compile_fail
//! use column_meta::ColumnFields;
//!
//! #[derive(ColumnFields)]
//! struct Employee {
//!     #[column("emp_id")]
//!     #[column("id")]
//!     id: i64,
//! }
//! ```
//!
//! Declarations made at run time through [`RegistryBuilder::attach`] are checked
//! the same way and fail with [`Error::InvalidAttachmentTarget`].

mod element;
mod error;
mod metadata;
mod reflect;
pub mod registry;

pub use column_meta_macro::{ColumnFields, column_methods};

pub use element::{ElementId, ElementKind};
pub use error::Error;
pub use metadata::{ColumnMetadata, FieldColumn, MethodColumn, ParameterColumn};
pub use reflect::{ColumnFields, ColumnMethods};
pub use registry::{ColumnRegistry, RegistryBuilder, global, install, lookup};
