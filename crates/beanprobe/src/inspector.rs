//! Property inspection of a single bean
//!
//! A [`PropertyInspector`] lists the properties of a bean that can actually be
//! read. Every candidate property between the bean's class and the stop class
//! is probed once, at construction; a property whose read fails for any reason
//! is left out without raising an error. The result is two parallel, frozen
//! sequences of names and types.
//!
//! ## Usage
//!
//! ```ignore
//! let inspector = PropertyInspector::new(&ctx, &point, Builtin::Object.id())?;
//! assert_eq!(inspector.names(), ["x", "y"]);
//!
//! for property in &inspector {
//!     println!("{}: {}", property.name(), ctx.type_name(property.property_type()));
//! }
//! ```
//!
//! ## Limitations
//!
//! The default inspector cannot tell a property that does not exist from one
//! whose probe failed: both are simply absent. Use
//! [`PropertyInspector::probe`] to see why each candidate was kept or dropped.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use beanprobe_types::{AssignabilityContext, ClassId, TypeContext, TypeDescriptor};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::accessor;
use crate::bean::Bean;
use crate::config::InspectorOptions;
use crate::error::{IntrospectionError, PropertyAccessError};
use crate::introspector::{Introspector, PropertyDescriptor};

/// Readable properties of one bean
pub struct PropertyInspector<'a> {
    type_ctx: &'a TypeContext,
    target: &'a dyn Bean,
    stop: ClassId,
    report_boxed_primitives: bool,
    names: Vec<String>,
    types: Vec<TypeDescriptor>,
}

impl<'a> PropertyInspector<'a> {
    /// Inspect `target`, reporting primitive property types as primitives
    pub fn new(
        type_ctx: &'a TypeContext,
        target: &'a dyn Bean,
        stop: ClassId,
    ) -> Result<Self, IntrospectionError> {
        Self::with_options(type_ctx, target, stop, InspectorOptions::default())
    }

    /// Inspect `target`, optionally reporting primitive types as their boxed
    /// classes (`Integer` instead of `int`)
    pub fn with_boxed_primitives(
        type_ctx: &'a TypeContext,
        target: &'a dyn Bean,
        stop: ClassId,
        report_boxed_primitives: bool,
    ) -> Result<Self, IntrospectionError> {
        let options = InspectorOptions {
            report_boxed_primitives,
        };
        Self::with_options(type_ctx, target, stop, options)
    }

    /// Inspect `target` with explicit options
    ///
    /// Fails only when the class hierarchy cannot be introspected; individual
    /// unreadable properties are skipped.
    #[instrument(level = "debug", skip_all, fields(class = %target.class_id(), stop = %stop))]
    pub fn with_options(
        type_ctx: &'a TypeContext,
        target: &'a dyn Bean,
        stop: ClassId,
        options: InspectorOptions,
    ) -> Result<Self, IntrospectionError> {
        let candidates = Introspector::new(type_ctx).bean_info(target.class_id(), stop)?;
        let candidate_count = candidates.len();

        let (names, types): (Vec<String>, Vec<TypeDescriptor>) = candidates
            .into_iter()
            .filter_map(|property| {
                accessor::probe(type_ctx, target, &property.name)
                    .ok()
                    .map(|()| property)
            })
            .map(|property| {
                let ty = if options.report_boxed_primitives {
                    property.ty.boxed()
                } else {
                    property.ty
                };
                (property.name, ty)
            })
            .unzip();

        debug!(
            candidates = candidate_count,
            retained = names.len(),
            "inspected bean properties"
        );

        Ok(Self {
            type_ctx,
            target,
            stop,
            report_boxed_primitives: options.report_boxed_primitives,
            names,
            types,
        })
    }

    /// Probe every candidate property and report each outcome
    ///
    /// Unlike construction, failures are returned rather than dropped, in
    /// name order.
    pub fn probe(
        type_ctx: &TypeContext,
        target: &dyn Bean,
        stop: ClassId,
    ) -> Result<Vec<ProbeOutcome>, IntrospectionError> {
        let candidates = Introspector::new(type_ctx).bean_info(target.class_id(), stop)?;
        Ok(candidates
            .into_iter()
            .map(|descriptor| {
                let result = accessor::probe(type_ctx, target, &descriptor.name);
                ProbeOutcome { descriptor, result }
            })
            .collect())
    }

    /// Number of readable properties
    pub fn count(&self) -> usize {
        self.names.len()
    }

    /// Check if no property survived probing
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Property names, in introspection order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Property types, parallel to [`names`](Self::names)
    pub fn types(&self) -> &[TypeDescriptor] {
        &self.types
    }

    /// Property at `index`
    pub fn get(&self, index: usize) -> Option<Property<'_>> {
        Some(Property {
            name: self.names.get(index)?,
            ty: self.types.get(index)?,
        })
    }

    /// Names of properties whose type is assignable from `ty`
    ///
    /// That is, properties whose type is the same as, or a superclass or
    /// super-interface of, `ty`. A `Number` property matches `Integer`.
    pub fn names_assignable_from(&self, ty: &TypeDescriptor) -> Vec<&str> {
        let assign = AssignabilityContext::new(self.type_ctx);
        self.iter()
            .filter(|property| assign.is_assignable_from(property.ty, ty))
            .map(|property| property.name)
            .collect()
    }

    /// Boxed equivalent of a primitive type; other types are returned as is
    pub fn boxed_primitive_type(&self, ty: &TypeDescriptor) -> TypeDescriptor {
        ty.boxed()
    }

    /// Iterate over `(name, type)` pairs
    pub fn iter(&self) -> PropertyIter<'_> {
        PropertyIter {
            names: self.names.iter(),
            types: self.types.iter(),
        }
    }

    /// The inspected bean
    pub fn target(&self) -> &'a dyn Bean {
        self.target
    }

    /// Class at which enumeration stopped
    pub fn stop_class(&self) -> ClassId {
        self.stop
    }

    /// Whether primitive types were reported as boxed classes
    pub fn reports_boxed_primitives(&self) -> bool {
        self.report_boxed_primitives
    }

    /// The type context the bean was inspected against
    pub fn context(&self) -> &'a TypeContext {
        self.type_ctx
    }

    /// Serializable description of the inspected properties
    pub fn summary(&self) -> InspectionSummary {
        let class_name = |id: ClassId| self.type_ctx.type_name(&id.into());
        InspectionSummary {
            class: class_name(self.target.class_id()),
            stop: class_name(self.stop),
            boxed_primitives: self.report_boxed_primitives,
            properties: self
                .iter()
                .map(|property| PropertySummary {
                    name: property.name.to_string(),
                    type_name: self.type_ctx.type_name(property.ty),
                })
                .collect(),
        }
    }
}

impl fmt::Debug for PropertyInspector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyInspector")
            .field("class", &self.target.class_id())
            .field("stop", &self.stop)
            .field("report_boxed_primitives", &self.report_boxed_primitives)
            .field("names", &self.names)
            .field("types", &self.types)
            .finish()
    }
}

impl<'i> IntoIterator for &'i PropertyInspector<'_> {
    type Item = Property<'i>;
    type IntoIter = PropertyIter<'i>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A property name paired with its type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Property<'i> {
    name: &'i str,
    ty: &'i TypeDescriptor,
}

impl<'i> Property<'i> {
    /// Property name
    pub fn name(&self) -> &'i str {
        self.name
    }

    /// Property type, boxed if the inspector reports boxed primitives
    pub fn property_type(&self) -> &'i TypeDescriptor {
        self.ty
    }
}

/// Iterator over the properties of a [`PropertyInspector`]
///
/// Walks names and types in lockstep. Each call to
/// [`PropertyInspector::iter`] starts a fresh, independent traversal. The
/// iterator only hands out shared borrows; the inspector cannot be changed
/// through it.
#[derive(Debug, Clone)]
pub struct PropertyIter<'i> {
    names: slice::Iter<'i, String>,
    types: slice::Iter<'i, TypeDescriptor>,
}

impl<'i> Iterator for PropertyIter<'i> {
    type Item = Property<'i>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(Property {
            name: self.names.next()?,
            ty: self.types.next()?,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.names.size_hint()
    }
}

impl DoubleEndedIterator for PropertyIter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        Some(Property {
            name: self.names.next_back()?,
            ty: self.types.next_back()?,
        })
    }
}

impl ExactSizeIterator for PropertyIter<'_> {}

impl FusedIterator for PropertyIter<'_> {}

/// Result of probing one candidate property
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeOutcome {
    /// The candidate, with its declared (never boxed) type
    pub descriptor: PropertyDescriptor,
    /// Whether the read succeeded
    pub result: Result<(), PropertyAccessError>,
}

impl ProbeOutcome {
    /// Check if the property could be read
    pub fn is_readable(&self) -> bool {
        self.result.is_ok()
    }
}

/// Serializable view of an inspector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionSummary {
    /// Inspected class name
    pub class: String,
    /// Stop class name
    pub stop: String,
    /// Whether primitive types were boxed
    pub boxed_primitives: bool,
    /// Properties in inspection order
    pub properties: Vec<PropertySummary>,
}

/// One property in an [`InspectionSummary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySummary {
    /// Property name
    pub name: String,
    /// Display name of the property type
    #[serde(rename = "type")]
    pub type_name: String,
}
